//! Capabilities the host environment lends to a session

use super::status::GameStatus;
use std::cell::Cell;
use std::rc::Rc;

/// Receives a status snapshot after every seed, edit acceptance and tick
pub trait StatusObserver {
    fn on_status(&mut self, status: &GameStatus);
}

impl<F> StatusObserver for F
where
    F: FnMut(&GameStatus),
{
    fn on_status(&mut self, status: &GameStatus) {
        self(status)
    }
}

/// Observer that discards every snapshot
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl StatusObserver for NullObserver {
    fn on_status(&mut self, _status: &GameStatus) {}
}

/// Cancels a periodic callback registered with a [`TickScheduler`]
pub trait TickHandle {
    fn cancel(&mut self);
}

/// Host timer service. The host calls `Session::tick` once per period until
/// the returned handle is cancelled.
pub trait TickScheduler {
    fn schedule(&mut self, period_ms: u64) -> Box<dyn TickHandle>;
}

/// Scheduler for hosts that drive ticks themselves, such as the CLI loop or
/// tests. Clones share state, so a host keeps one clone to see whether ticks
/// are currently requested.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    period_ms: Rc<Cell<Option<u64>>>,
    scheduled: Rc<Cell<usize>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested period while a schedule is live
    pub fn period_ms(&self) -> Option<u64> {
        self.period_ms.get()
    }

    pub fn is_active(&self) -> bool {
        self.period_ms.get().is_some()
    }

    /// Number of schedules ever requested
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.get()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, period_ms: u64) -> Box<dyn TickHandle> {
        self.period_ms.set(Some(period_ms));
        self.scheduled.set(self.scheduled.get() + 1);
        Box::new(ManualHandle {
            period_ms: Rc::clone(&self.period_ms),
        })
    }
}

struct ManualHandle {
    period_ms: Rc<Cell<Option<u64>>>,
}

impl TickHandle for ManualHandle {
    fn cancel(&mut self) {
        self.period_ms.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler() {
        let host_view = ManualScheduler::new();
        let mut scheduler = host_view.clone();
        assert!(!host_view.is_active());

        let mut handle = scheduler.schedule(400);
        assert_eq!(host_view.period_ms(), Some(400));
        assert_eq!(host_view.scheduled_count(), 1);

        handle.cancel();
        assert!(!host_view.is_active());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |status: &GameStatus| seen.push(status.steps_count);
            observer.on_status(&GameStatus::default());
        }
        assert_eq!(seen, vec![0]);
    }
}
