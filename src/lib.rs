//! Game of Life Session Engine
//!
//! A bounded Conway's Game of Life grid with incremental, active-set driven
//! stepping, seed algorithms for the initial generation, and a session layer
//! that tracks run state and population statistics for a host that supplies
//! the timer and the display.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod seed;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, Result};
pub use game_of_life::{GameOfLifeRules, Grid};
pub use seed::{SeedAlgorithm, SeedDescriptor};
pub use session::{GameStatus, Session, StatusObserver, TickScheduler};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a session with a grid sized from `settings`.
///
/// No game is created yet; call [`Session::create_game`] next.
pub fn session_from_settings<O, S>(settings: &Settings, observer: O, scheduler: S) -> anyhow::Result<Session>
where
    O: StatusObserver + 'static,
    S: TickScheduler + 'static,
{
    let (width, height) = settings.grid.dimensions()?;
    let grid = Grid::new(width, height)?;
    let session = Session::new(grid, observer, scheduler);

    Ok(match settings.run.rng_seed {
        Some(seed) => session.with_rng(StdRng::seed_from_u64(seed)),
        None => session,
    })
}
