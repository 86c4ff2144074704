//! Seed algorithms producing the initial generation

pub mod algorithm;
pub mod descriptor;

pub use algorithm::{Coord, SeedAlgorithm};
pub use descriptor::SeedDescriptor;
