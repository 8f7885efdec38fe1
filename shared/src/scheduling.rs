//! Ownership of the repeating auto-advance task.
//!
//! The task handle type is left generic so the same bookkeeping drives a
//! `gloo` interval in the browser and a fake clock in tests. Dropping the
//! handle must cancel the underlying task.

use crate::progress::ProgressControl;
use log::debug;

/// Holds at most one running repeating task together with its period
#[derive(Debug)]
pub struct AutoAdvanceTask<H> {
    running: Option<(u32, H)>,
}

impl<H> Default for AutoAdvanceTask<H> {
    fn default() -> Self {
        Self { running: None }
    }
}

impl<H> AutoAdvanceTask<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the running task in line with the desired state.
    ///
    /// Starts a task when one is wanted and none runs, restarts it when the
    /// period changed, and drops it when it is no longer wanted. `spawn` is only
    /// called when a new task has to be created. Returns whether a task is running.
    pub fn reconcile<F>(&mut self, wants: bool, period_ms: u32, spawn: F) -> bool
    where
        F: FnOnce(u32) -> H,
    {
        let period_ms = period_ms.max(1);
        let up_to_date = matches!(&self.running, Some((period, _)) if *period == period_ms);

        if wants && !up_to_date {
            self.running = None;
            self.running = Some((period_ms, spawn(period_ms)));
            debug!("auto-advance scheduled every {}ms", period_ms);
        } else if !wants && self.running.take().is_some() {
            debug!("auto-advance cancelled");
        }
        self.is_scheduled()
    }

    /// Reconcile against the current state of a progress control
    pub fn reconcile_with<F>(&mut self, control: &ProgressControl, spawn: F) -> bool
    where
        F: FnOnce(u32) -> H,
    {
        self.reconcile(control.wants_auto_advance(), control.step_interval_ms(), spawn)
    }

    pub fn cancel(&mut self) {
        self.running = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.running.is_some()
    }

    pub fn period_ms(&self) -> Option<u32> {
        self.running.as_ref().map(|(period, _)| *period)
    }

    #[cfg(test)]
    fn handle(&self) -> Option<&H> {
        self.running.as_ref().map(|(_, handle)| handle)
    }

    #[cfg(test)]
    fn handle_mut(&mut self) -> Option<&mut H> {
        self.running.as_mut().map(|(_, handle)| handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Point;
    use crate::progress::{ProgressConfig, TrackRect};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Interval on a virtual millisecond clock; counts how many were dropped
    struct FakeInterval {
        period_ms: u64,
        next_due_ms: u64,
        drops: Rc<Cell<usize>>,
    }

    impl Drop for FakeInterval {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    struct Harness {
        control: ProgressControl,
        task: AutoAdvanceTask<FakeInterval>,
        now_ms: u64,
        changes: Vec<f64>,
        drops: Rc<Cell<usize>>,
    }

    impl Harness {
        fn new(config: ProgressConfig) -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let mut harness = Self {
                control: ProgressControl::new(config),
                task: AutoAdvanceTask::new(),
                now_ms: 0,
                changes: Vec::new(),
                drops: Rc::new(Cell::new(0)),
            };
            harness.reconcile();
            harness
        }

        fn reconcile(&mut self) {
            let now = self.now_ms;
            let drops = self.drops.clone();
            self.task.reconcile_with(&self.control, |period| FakeInterval {
                period_ms: u64::from(period),
                next_due_ms: now + u64::from(period),
                drops,
            });
        }

        fn advance(&mut self, duration_ms: u64) {
            let end = self.now_ms + duration_ms;
            while self.now_ms < end {
                self.now_ms += 1;
                let now = self.now_ms;
                let fired = match self.task.handle_mut() {
                    Some(interval) if interval.next_due_ms == now => {
                        interval.next_due_ms += interval.period_ms;
                        true
                    }
                    _ => false,
                };
                if fired {
                    if let Some(value) = self.control.auto_advance_tick() {
                        self.changes.push(value);
                    }
                    self.reconcile();
                }
            }
        }
    }

    fn counting_config() -> ProgressConfig {
        ProgressConfig {
            current: 0.0,
            target: 5.0,
            auto_advance: true,
            step_interval_ms: 100,
            ..ProgressConfig::default()
        }
    }

    #[test]
    fn test_auto_advance_reaches_target_and_stops() {
        let mut harness = Harness::new(counting_config());
        assert!(harness.task.is_scheduled());

        harness.advance(550);
        assert_eq!(harness.control.displayed_value(), 5.0);
        assert_eq!(harness.changes, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(!harness.task.is_scheduled());
        assert_eq!(harness.drops.get(), 1);

        // No stray ticks once the target is reached
        harness.advance(1000);
        assert_eq!(harness.changes.len(), 5);
    }

    #[test]
    fn test_interaction_suspends_auto_advance() {
        let mut harness = Harness::new(counting_config());
        harness.advance(150);
        assert_eq!(harness.changes, vec![1.0]);

        // Press at the very left of the track, mid-countdown
        let track = Some(TrackRect::new(0.0, 100.0));
        if let Some(value) = harness.control.begin_interaction(Point::new(0.0, 0.0), track) {
            harness.changes.push(value);
        }
        harness.reconcile();
        assert!(!harness.task.is_scheduled());

        harness.advance(300);
        assert_eq!(harness.changes, vec![1.0, 0.0]);

        harness.control.end_interaction();
        harness.reconcile();
        assert!(harness.task.is_scheduled());

        // A fresh interval starts at release time
        harness.advance(99);
        assert_eq!(harness.changes, vec![1.0, 0.0]);
        harness.advance(1);
        assert_eq!(harness.changes, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_disable_cancels_and_enable_restarts() {
        let mut harness = Harness::new(counting_config());
        harness.advance(50);

        harness.control.set_auto_advance(false);
        harness.reconcile();
        assert!(!harness.task.is_scheduled());
        harness.advance(500);
        assert!(harness.changes.is_empty());

        harness.control.set_auto_advance(true);
        harness.reconcile();
        harness.advance(100);
        assert_eq!(harness.changes, vec![1.0]);
    }

    #[test]
    fn test_period_change_restarts_task() {
        let drops = Rc::new(Cell::new(0));
        let spawned = Cell::new(0);
        let mut task = AutoAdvanceTask::new();
        let make = |period: u32| {
            spawned.set(spawned.get() + 1);
            FakeInterval {
                period_ms: u64::from(period),
                next_due_ms: u64::from(period),
                drops: drops.clone(),
            }
        };

        assert!(task.reconcile(true, 100, make));
        // Same period keeps the existing task
        assert!(task.reconcile(true, 100, make));
        assert_eq!(spawned.get(), 1);

        assert!(task.reconcile(true, 250, make));
        assert_eq!(spawned.get(), 2);
        assert_eq!(drops.get(), 1);
        assert_eq!(task.period_ms(), Some(250));

        task.cancel();
        assert_eq!(drops.get(), 2);
        assert!(task.handle().is_none());
    }
}
