//! The composition algebra over futures.
//!
//! Combinators for building computation chains from eventual values:
//!
//! - [`spawn`]: schedule a computation, get its future immediately
//! - [`map`]: functor; apply a (curried) function to an eventual value
//! - [`apply`]: applicative; combine an eventual function with an eventual
//!   argument
//! - [`bind`] / [`flatten`]: monad; sequence computations that themselves
//!   produce futures
//!
//! Every combinator is referentially transparent over its inputs: it never
//! mutates an input future, only reads its eventual value and constructs new
//! futures and tasks. Work crossing a combinator boundary is deferred to the
//! next scheduler iteration; chains of already-available values
//! ([`Future::ready`]) resolve synchronously through the trigger mechanism
//! without scheduler involvement.

use crate::future::Future;
use crate::runtime::Scheduler;

pub mod apply;
pub mod bind;
pub mod map;
pub mod spawn;

pub use apply::apply;
pub use bind::{bind, flatten};
pub use map::map;
pub use spawn::spawn;

/// Fulfills a combinator-owned output future.
///
/// Output futures have exactly one producer by construction, so a second
/// fulfillment here is a crate bug, not a caller error; fail fast rather
/// than dropping the value.
pub(crate) fn complete<T>(future: &Future<T>, value: T) {
    future
        .fulfill(value)
        .expect("combinator output future fulfilled twice");
}

/// Shared continuation step: when `input` is fulfilled, schedule a task that
/// applies `transform` to the value and fulfills `output` with the result.
///
/// The application always runs as a scheduled task, never inline in the
/// trigger, so heavy work lands on the scheduler and independent chains
/// interleave per the configured queue order. Both [`map`] and [`bind`] are
/// this step plus a choice of output cell.
pub(crate) fn schedule_apply<T, U, F>(
    scheduler: &Scheduler,
    input: &Future<T>,
    transform: F,
    output: Future<U>,
) where
    F: FnOnce(T) -> U + 'static,
    T: Clone + 'static,
    U: 'static,
{
    let scheduler = scheduler.clone();
    input.add_trigger(move |value: &T| {
        let value = value.clone();
        scheduler.schedule(move || complete(&output, transform(value)));
    });
}
