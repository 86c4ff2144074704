//! Game session: run/stop lifecycle and population statistics around a grid

use super::host::{StatusObserver, TickHandle, TickScheduler};
use super::status::{GameStatus, SessionState};
use crate::error::{LifeError, Result};
use crate::game_of_life::grid::{Grid, GridStatus};
use crate::seed::SeedDescriptor;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One game of life, owned by the host for as long as its view is mounted.
///
/// The session never runs a timer itself. `start_game` asks the host's
/// [`TickScheduler`] for periodic callbacks and the host answers each with a
/// call to [`Session::tick`].
pub struct Session {
    grid: Grid,
    observer: Box<dyn StatusObserver>,
    scheduler: Box<dyn TickScheduler>,
    timer: Option<Box<dyn TickHandle>>,
    rng: StdRng,
    state: SessionState,
    algorithm: Option<SeedDescriptor>,
    begin_state: Vec<usize>,
    period_ms: u64,
    steps_count: u64,
    time_elapsed_ms: u64,
    active: usize,
    lived_current: usize,
    lived_min: usize,
    lived_max: usize,
}

impl Session {
    pub fn new<O, S>(grid: Grid, observer: O, scheduler: S) -> Self
    where
        O: StatusObserver + 'static,
        S: TickScheduler + 'static,
    {
        Self {
            grid,
            observer: Box::new(observer),
            scheduler: Box::new(scheduler),
            timer: None,
            rng: StdRng::from_entropy(),
            state: SessionState::Idle,
            algorithm: None,
            begin_state: Vec::new(),
            period_ms: 0,
            steps_count: 0,
            time_elapsed_ms: 0,
            active: 0,
            lived_current: 0,
            lived_min: 0,
            lived_max: 0,
        }
    }

    /// Replace the random source used by the `random` seed algorithm
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Whether the host should allow cell editing
    pub fn can_edit(&self) -> bool {
        !self.is_running()
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Descriptor the current game was created from
    pub fn selected_algorithm(&self) -> Option<&SeedDescriptor> {
        self.algorithm.as_ref()
    }

    /// Live cell indices captured by the last `start_game`
    pub fn begin_state(&self) -> &[usize] {
        &self.begin_state
    }

    /// Create a new game from `descriptor`.
    ///
    /// The descriptor is resolved before the current game is touched, so an
    /// invalid one leaves the previous game, running or not, as it was.
    pub fn create_game(&mut self, descriptor: &SeedDescriptor) -> Result<GameStatus> {
        let algorithm = descriptor.resolve()?;

        self.close_game();

        let generator = algorithm.generator(&self.grid, &mut self.rng);
        let grid_status = self.grid.seed(generator);

        self.algorithm = Some(descriptor.clone());
        self.active = grid_status.active_count;
        self.lived_current = grid_status.alive_count;
        self.lived_min = grid_status.alive_count;
        self.lived_max = grid_status.alive_count;
        self.state = SessionState::Configured;

        debug!(
            "Created game with {} on a {}x{} grid: {} alive, {} active",
            algorithm,
            self.grid.width(),
            self.grid.height(),
            grid_status.alive_count,
            grid_status.active_count
        );
        Ok(self.notify())
    }

    /// Start periodic stepping every `period_ms` milliseconds
    pub fn start_game(&mut self, period_ms: u64) -> Result<()> {
        if self.is_running() {
            return Err(LifeError::AlreadyRunning);
        }
        if period_ms == 0 {
            return Err(LifeError::InvalidPeriod);
        }

        self.begin_state = self.grid.live_indices().collect();
        self.period_ms = period_ms;
        self.timer = Some(self.scheduler.schedule(period_ms));
        self.state = SessionState::Running;

        debug!(
            "Started game: period {} ms, {} cells alive",
            period_ms,
            self.begin_state.len()
        );
        Ok(())
    }

    /// Advance one generation. Ignored unless the game is running, so a late
    /// callback after `stop_game` is harmless.
    pub fn tick(&mut self) -> Option<GameStatus> {
        if !self.is_running() {
            return None;
        }

        self.steps_count += 1;
        self.time_elapsed_ms += self.period_ms;

        let grid_status = self.grid.step();
        self.apply_grid_status(grid_status);

        trace!(
            "Step {}: {} changed, {} alive, {} active",
            self.steps_count,
            grid_status.changed_count,
            grid_status.alive_count,
            grid_status.active_count
        );
        Some(self.notify())
    }

    /// Cancel periodic stepping, keeping the grid as it is
    pub fn stop_game(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        if self.is_running() {
            self.state = SessionState::Configured;
            debug!("Stopped game after {} steps", self.steps_count);
        }
    }

    /// Stop the game, kill every cell and reset all counters
    pub fn close_game(&mut self) {
        if self.is_running() {
            self.stop_game();
        }
        self.grid.clear();

        self.algorithm = None;
        self.begin_state.clear();
        self.period_ms = 0;
        self.steps_count = 0;
        self.time_elapsed_ms = 0;
        self.active = 0;
        self.lived_current = 0;
        self.lived_min = 0;
        self.lived_max = 0;
        self.state = SessionState::Idle;
    }

    /// Flip one cell. Editing while running is a host concern; see
    /// [`Session::can_edit`].
    pub fn toggle_cell(&mut self, index: usize) -> Result<bool> {
        self.grid.toggle(index)
    }

    /// Finish a batch of edits: rebuild the active set, update statistics and
    /// notify the observer
    pub fn accept_edits(&mut self) -> GameStatus {
        let grid_status = self.grid.refresh();
        self.apply_grid_status(grid_status);
        debug!(
            "Accepted edits: {} alive, {} active",
            grid_status.alive_count, grid_status.active_count
        );
        self.notify()
    }

    /// Export the current live cells as a reusable `selection` descriptor
    pub fn save_game(&self) -> Result<SeedDescriptor> {
        let coords: Vec<[usize; 2]> = self.grid.live_coords().collect();
        let text = serde_json::to_string(&coords)?;
        Ok(SeedDescriptor::new("selection", serde_json::Value::String(text)))
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            active: self.active,
            capacity: self.grid.capacity(),
            lived_min: self.lived_min,
            lived_max: self.lived_max,
            lived_current: self.lived_current,
            steps_count: self.steps_count,
            time_elapsed_ms: self.time_elapsed_ms,
            is_running: self.is_running(),
        }
    }

    fn apply_grid_status(&mut self, grid_status: GridStatus) {
        self.active = grid_status.active_count;
        self.lived_current = grid_status.alive_count;
        self.lived_max = self.lived_max.max(self.lived_current);
        self.lived_min = self.lived_min.min(self.lived_current);
    }

    fn notify(&mut self) -> GameStatus {
        let status = self.status();
        self.observer.on_status(&status);
        status
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}
