//! The registered seed algorithms and their per-cell generators

use crate::error::{LifeError, Result};
use crate::game_of_life::grid::{Cell, Grid};
use log::warn;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Grid-relative `[x, y]` coordinate as it appears in seed arguments
pub type Coord = [i64; 2];

/// A resolved seed algorithm with its argument
#[derive(Debug, Clone, PartialEq)]
pub enum SeedAlgorithm {
    /// Every cell gets the same state
    Constant(bool),
    /// Each cell is alive with the given percent chance
    Random(f64),
    /// Exactly the listed cells are alive
    Selection(Vec<Coord>),
}

impl SeedAlgorithm {
    /// Names accepted by [`SeedAlgorithm::from_str`]
    pub const NAMES: [&'static str; 3] = ["constant", "random", "selection"];

    pub fn name(&self) -> &'static str {
        match self {
            SeedAlgorithm::Constant(_) => "constant",
            SeedAlgorithm::Random(_) => "random",
            SeedAlgorithm::Selection(_) => "selection",
        }
    }

    /// Random seed with a percentage in `0..=100`
    pub fn random(percent: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(LifeError::InvalidArgument {
                algorithm: "random",
                reason: format!("percent chance {} is not within 0..=100", percent),
            });
        }
        Ok(SeedAlgorithm::Random(percent))
    }

    /// Build the per-cell generator for `grid`.
    ///
    /// Selection coordinates are resolved against the grid once, here;
    /// coordinates outside it are dropped.
    pub fn generator<'a, R: Rng>(
        &'a self,
        grid: &Grid,
        rng: &'a mut R,
    ) -> Box<dyn FnMut(usize, &Cell) -> bool + 'a> {
        match self {
            SeedAlgorithm::Constant(value) => {
                let value = *value;
                Box::new(move |_, _| value)
            }
            SeedAlgorithm::Random(percent) => {
                let probability = if percent.is_finite() {
                    (percent / 100.0).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                Box::new(move |_, _| rng.gen_bool(probability))
            }
            SeedAlgorithm::Selection(coords) => {
                let live: HashSet<usize> = coords
                    .iter()
                    .filter_map(|&coord| grid.absolute_index(coord))
                    .collect();
                let dropped = coords
                    .iter()
                    .filter(|&&coord| grid.absolute_index(coord).is_none())
                    .count();
                if dropped > 0 {
                    warn!(
                        "Dropped {} selection coordinate(s) outside the {}x{} grid",
                        dropped,
                        grid.width(),
                        grid.height()
                    );
                }
                Box::new(move |index, _| live.contains(&index))
            }
        }
    }
}

impl FromStr for SeedAlgorithm {
    type Err = LifeError;

    /// Parse a bare algorithm name with its default argument
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "constant" => Ok(SeedAlgorithm::Constant(false)),
            "random" => Ok(SeedAlgorithm::Random(50.0)),
            "selection" => Ok(SeedAlgorithm::Selection(Vec::new())),
            other => Err(LifeError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for SeedAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedAlgorithm::Constant(value) => write!(f, "constant({})", u8::from(*value)),
            SeedAlgorithm::Random(percent) => write!(f, "random({}%)", percent),
            SeedAlgorithm::Selection(coords) => write!(f, "selection({} cells)", coords.len()),
        }
    }
}
