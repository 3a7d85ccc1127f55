//! Functor composition: apply a function to an eventual value.

use crate::combinator::schedule_apply;
use crate::curry::{Curried, Curry};
use crate::future::Future;
use crate::runtime::Scheduler;

/// Applies `f` to the eventual value of `input`, producing a new future.
///
/// `f` is curried first, so it may take more than one argument; mapping a
/// binary function over a `Future<T>` yields a future of the partially
/// applied remainder, which [`apply`](crate::combinator::apply) can then feed
/// from another future:
///
/// ```
/// use monosync::combinator::{apply, map, spawn};
/// use monosync::future::Future;
/// use monosync::runtime::Scheduler;
///
/// let scheduler = Scheduler::new();
/// let fut = spawn(&scheduler, || 11);
/// let partial = map(&scheduler, |x: i32, y: i32| x * y, &fut);
/// let product = apply(&scheduler, &partial, &Future::ready(10));
/// scheduler.run();
/// assert_eq!(product.value(), Some(110));
/// ```
///
/// When `input` is fulfilled, the application is scheduled as a fresh task
/// rather than run inline; the returned future is fulfilled on a later
/// scheduler iteration. The input future is never mutated.
pub fn map<Args, F, T, U>(scheduler: &Scheduler, f: F, input: &Future<T>) -> Future<U>
where
    F: Curry<Args, Curried = Curried<T, U>>,
    T: Clone + 'static,
    U: 'static,
{
    let curried = f.curry();
    let output = Future::new();
    schedule_apply(scheduler, input, move |value| curried(value), output.clone());
    output
}
