//! Session status snapshots

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No game created, or the last one was closed
    Idle,
    /// Seeded, not running
    Configured,
    /// Ticks are scheduled
    Running,
}

/// Snapshot passed to the observer and returned by `Session::status`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub active: usize,
    pub capacity: usize,
    pub lived_min: usize,
    pub lived_max: usize,
    pub lived_current: usize,
    pub steps_count: u64,
    pub time_elapsed_ms: u64,
    pub is_running: bool,
}

impl GameStatus {
    /// `value` as a percentage of capacity
    pub fn percent_of_capacity(&self, value: usize) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            value as f64 * 100.0 / self.capacity as f64
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {} | active {:.1}% | population {:.1}% (min {:.1}%, max {:.1}%)",
            self.steps_count,
            self.percent_of_capacity(self.active),
            self.percent_of_capacity(self.lived_current),
            self.percent_of_capacity(self.lived_min),
            self.percent_of_capacity(self.lived_max),
        )
    }
}
