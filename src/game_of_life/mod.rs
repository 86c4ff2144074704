//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod rules;

pub use grid::{Cell, CellId, Grid, GridAttributes, GridStatus, LiveCells, MAX_HEIGHT, MAX_WIDTH};
pub use io::{load_descriptor_from_file, load_systems, save_descriptor_to_file, save_system};
pub use rules::GameOfLifeRules;
