//! Cooperative per-frame task lists.
//!
//! A [`TaskList`] is a FIFO of boxed tasks. Each pass runs every task that
//! was queued when the pass started, exactly once: a task that answers
//! [`Signal::Continue`] goes to the back of the queue for the next pass,
//! one that answers [`Signal::Complete`] is dropped. Single-threaded and
//! deterministic.

use std::collections::VecDeque;

use tracing::debug;

/// What a task wants after running for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep the task and run it again next pass.
    Continue,
    /// Remove the task.
    Complete,
}

impl Signal {
    /// `Continue` while `keep_running` holds.
    pub fn from_bool(keep_running: bool) -> Self {
        if keep_running {
            Signal::Continue
        } else {
            Signal::Complete
        }
    }
}

/// A unit of per-frame work operating on a shared context `C`.
pub trait Task<C> {
    /// Runs one step. `delta_ms` is the frame time in milliseconds.
    fn run(&mut self, ctx: &mut C, delta_ms: f64) -> Signal;

    /// Short label used in logs.
    fn name(&self) -> &'static str {
        "task"
    }
}

pub struct TaskList<C> {
    queue: VecDeque<Box<dyn Task<C>>>,
}

impl<C> TaskList<C> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, task: Box<dyn Task<C>>) {
        self.queue.push_back(task);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Runs one pass and returns how many tasks completed.
    ///
    /// Tasks pushed onto this list while the pass is running are not run
    /// until the next pass.
    pub fn run_once(&mut self, ctx: &mut C, delta_ms: f64) -> usize {
        let limit = self.queue.len();
        let mut completed = 0;

        for _ in 0..limit {
            let Some(mut task) = self.queue.pop_front() else {
                break;
            };
            match task.run(ctx, delta_ms) {
                Signal::Continue => self.queue.push_back(task),
                Signal::Complete => {
                    debug!(task = task.name(), "task complete");
                    completed += 1;
                }
            }
        }

        completed
    }
}

impl<C> Default for TaskList<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records its id into the context and completes after `runs` passes.
    struct Counter {
        id: u32,
        runs: u32,
    }

    impl Task<Vec<u32>> for Counter {
        fn run(&mut self, log: &mut Vec<u32>, _delta_ms: f64) -> Signal {
            log.push(self.id);
            self.runs -= 1;
            Signal::from_bool(self.runs > 0)
        }
    }

    #[test]
    fn test_signal_from_bool() {
        assert_eq!(Signal::from_bool(true), Signal::Continue);
        assert_eq!(Signal::from_bool(false), Signal::Complete);
    }

    #[test]
    fn test_run_once_keeps_fifo_order() {
        let mut list = TaskList::new();
        list.push(Box::new(Counter { id: 1, runs: 2 }));
        list.push(Box::new(Counter { id: 2, runs: 1 }));
        list.push(Box::new(Counter { id: 3, runs: 3 }));

        let mut log = Vec::new();
        assert_eq!(list.run_once(&mut log, 16.0), 1);
        assert_eq!(log, vec![1, 2, 3]);
        assert_eq!(list.len(), 2);

        assert_eq!(list.run_once(&mut log, 16.0), 1);
        assert_eq!(log, vec![1, 2, 3, 1, 3]);

        assert_eq!(list.run_once(&mut log, 16.0), 1);
        assert_eq!(log, vec![1, 2, 3, 1, 3, 3]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_run_once_on_empty_list() {
        let mut list: TaskList<Vec<u32>> = TaskList::default();
        let mut log = Vec::new();
        assert_eq!(list.run_once(&mut log, 16.0), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear_drops_tasks() {
        let mut list = TaskList::new();
        list.push(Box::new(Counter { id: 1, runs: 5 }));
        list.clear();
        let mut log = Vec::new();
        list.run_once(&mut log, 16.0);
        assert!(log.is_empty());
    }
}
