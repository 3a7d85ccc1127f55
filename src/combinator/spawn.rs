//! Deferred computation: the producer side of the algebra.

use crate::combinator::complete;
use crate::future::Future;
use crate::runtime::Scheduler;

/// Schedules a task that computes `f()` and fulfills a fresh future with the
/// result. Returns that future immediately, still unfulfilled; it is set
/// once [`Scheduler::run`] reaches the task.
///
/// ```
/// use monosync::combinator::spawn;
/// use monosync::runtime::Scheduler;
///
/// let scheduler = Scheduler::new();
/// let fut = spawn(&scheduler, || 11);
/// assert!(!fut.is_fulfilled());
/// scheduler.run();
/// assert_eq!(fut.value(), Some(11));
/// ```
pub fn spawn<T, F>(scheduler: &Scheduler, f: F) -> Future<T>
where
    F: FnOnce() -> T + 'static,
    T: 'static,
{
    let output = Future::new();
    let result = output.clone();
    scheduler.schedule(move || complete(&result, f()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_defers_until_run() {
        let scheduler = Scheduler::new();
        let fut = spawn(&scheduler, || "computed");
        assert!(!fut.is_fulfilled());
        assert_eq!(scheduler.run(), 1);
        assert_eq!(fut.value(), Some("computed"));
    }

    #[test]
    fn independent_spawns_run_in_fifo_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let log = Rc::clone(&log);
            spawn(&scheduler, move || log.borrow_mut().push(id));
        }
        scheduler.run();
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }
}
