//! Cooperative task scheduler.
//!
//! The scheduler holds pending zero-argument units of work and a `run`
//! operation that drains them to completion. Each task runs atomically
//! start-to-finish; there is no inter-task suspension and no preemption.
//! Tasks executed by `run` may themselves schedule further tasks, growing
//! the queue mid-drain; `run` only returns once no pending tasks remain.
//!
//! The scheduler is an explicit handle passed to
//! [`spawn`](crate::combinator::spawn) and the combinators rather than a
//! process-wide singleton, so independent runs (one per test, say) never
//! share state. Cloning a [`Scheduler`] clones the handle; all clones push
//! into and drain the same queue.

use crate::runtime::builder::SchedulerBuilder;
use crate::runtime::config::{QueueOrder, SchedulerConfig};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// A deferred zero-argument unit of work.
type Task = Box<dyn FnOnce()>;

struct SchedulerState {
    queue: RefCell<VecDeque<Task>>,
    order: QueueOrder,
}

/// The cooperative task scheduler.
///
/// Created empty, accumulates tasks as producers and combinators schedule
/// them, and is done once [`run`](Scheduler::run) returns with the queue
/// empty.
pub struct Scheduler {
    state: Rc<SchedulerState>,
}

impl Clone for Scheduler {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("order", &self.state.order)
            .field("pending", &self.len())
            .finish()
    }
}

impl Scheduler {
    /// Creates a new empty FIFO scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    /// Creates a scheduler from an explicit configuration.
    #[must_use]
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            state: Rc::new(SchedulerState {
                queue: RefCell::new(VecDeque::with_capacity(config.initial_capacity)),
                order: config.order,
            }),
        }
    }

    /// Returns a builder for custom configuration.
    #[must_use]
    pub fn builder() -> SchedulerBuilder {
        SchedulerBuilder::new()
    }

    /// Returns the configured queue ordering policy.
    #[must_use]
    pub fn order(&self) -> QueueOrder {
        self.state.order
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.queue.borrow().len()
    }

    /// Returns true if no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.queue.borrow().is_empty()
    }

    /// Appends a task to the pending queue.
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        let mut queue = self.state.queue.borrow_mut();
        queue.push_back(Box::new(task));
        tracing::trace!(pending = queue.len(), "task scheduled");
    }

    /// Pops the next task per the configured order. The borrow is released
    /// before the caller invokes the task, since the task may schedule.
    fn pop(&self) -> Option<Task> {
        let mut queue = self.state.queue.borrow_mut();
        match self.state.order {
            QueueOrder::Fifo => queue.pop_front(),
            QueueOrder::Lifo => queue.pop_back(),
        }
    }

    /// Repeatedly removes one task and executes it to completion, until the
    /// queue is empty, including tasks scheduled during execution.
    ///
    /// Returns the number of tasks executed. A panicking task body
    /// propagates out of this loop uncontrolled; the queue retains whatever
    /// was pending at that point.
    pub fn run(&self) -> usize {
        let mut executed = 0_usize;
        while let Some(task) = self.pop() {
            task();
            executed += 1;
        }
        tracing::debug!(tasks = executed, "scheduler drained");
        executed
    }
}
