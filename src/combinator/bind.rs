//! Monadic composition: sequence computations that themselves produce
//! futures.

use crate::combinator::{complete, schedule_apply};
use crate::future::Future;
use crate::runtime::Scheduler;

/// Collapses a future of a future into a future of the inner value.
///
/// A trigger on the outer future waits for the inner future to arrive; a
/// second trigger on the inner future forwards its eventual value to the
/// output. This is the primitive [`bind`] is built from. No scheduler is
/// involved: flattening is pure trigger plumbing, so nested `ready` chains
/// collapse synchronously.
pub fn flatten<T>(nested: &Future<Future<T>>) -> Future<T>
where
    T: Clone + 'static,
{
    let output = Future::new();
    let result = output.clone();
    nested.add_trigger(move |inner: &Future<T>| {
        let inner = inner.clone();
        inner.add_trigger(move |value: &T| complete(&result, value.clone()));
    });
    output
}

/// Sequences `input` into a future-producing continuation.
///
/// When `input` is fulfilled with `t`, a task computing the inner future
/// `f(t)` is scheduled; its result lands in an intermediate future of a
/// future, which [`flatten`] collapses into the returned output.
///
/// ```
/// use monosync::combinator::{bind, spawn};
/// use monosync::future::Future;
/// use monosync::runtime::Scheduler;
///
/// let scheduler = Scheduler::new();
/// let fut = spawn(&scheduler, || 11);
/// let sched = scheduler.clone();
/// let bound = bind(
///     &scheduler,
///     move |n: i32| {
///         if n < 5 {
///             Future::ready(n)
///         } else {
///             spawn(&sched, || 20)
///         }
///     },
///     &fut,
/// );
/// scheduler.run();
/// assert_eq!(bound.value(), Some(20));
/// ```
pub fn bind<T, U, F>(scheduler: &Scheduler, f: F, input: &Future<T>) -> Future<U>
where
    F: FnOnce(T) -> Future<U> + 'static,
    T: Clone + 'static,
    U: Clone + 'static,
{
    let nested: Future<Future<U>> = Future::new();
    schedule_apply(scheduler, input, f, nested.clone());
    flatten(&nested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::spawn;

    #[test]
    fn flatten_forwards_inner_value() {
        let scheduler = Scheduler::new();
        let inner = spawn(&scheduler, || 9);
        let nested = Future::ready(inner);
        let flat = flatten(&nested);
        scheduler.run();
        assert_eq!(flat.value(), Some(9));
    }

    #[test]
    fn flatten_of_ready_ready_resolves_without_scheduler() {
        let nested = Future::ready(Future::ready("inline"));
        let flat = flatten(&nested);
        assert_eq!(flat.value(), Some("inline"));
    }

    #[test]
    fn bind_left_identity() {
        // bind(f, ready(v)) has the same eventual value as f(v).
        let scheduler = Scheduler::new();
        let f = |n: i32| Future::ready(n * 2);
        let bound = bind(&scheduler, f, &Future::ready(21));
        scheduler.run();
        assert_eq!(bound.value(), f(21).value());
    }

    #[test]
    fn bind_right_identity() {
        // bind(ready, fut) has the same eventual value as fut.
        let scheduler = Scheduler::new();
        let fut = spawn(&scheduler, || 17);
        let bound = bind(&scheduler, Future::ready, &fut);
        scheduler.run();
        assert_eq!(bound.value(), fut.value());
    }

    #[test]
    fn bind_into_spawned_inner_future() {
        let scheduler = Scheduler::new();
        let fut = spawn(&scheduler, || 11);
        let sched = scheduler.clone();
        let bound = bind(
            &scheduler,
            move |n: i32| {
                if n < 5 {
                    Future::ready(n)
                } else {
                    spawn(&sched, || 20)
                }
            },
            &fut,
        );
        scheduler.run();
        assert_eq!(bound.value(), Some(20));
    }
}
