//! Game session wrapping a grid with run state and statistics

pub mod game;
pub mod host;
pub mod status;

pub use game::Session;
pub use host::{ManualScheduler, NullObserver, StatusObserver, TickHandle, TickScheduler};
pub use status::{GameStatus, SessionState};
