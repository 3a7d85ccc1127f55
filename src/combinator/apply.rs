//! Applicative composition: combine an eventual function with an eventual
//! argument.

use crate::combinator::schedule_apply;
use crate::curry::Curried;
use crate::future::Future;
use crate::runtime::Scheduler;
use std::rc::Rc;

/// Applies an eventual curried function to an eventual argument.
///
/// A trigger on `function` waits for the function value; once it arrives, a
/// further trigger on `argument` (the same continuation step [`map`] uses)
/// applies it when the argument is available too. Neither input future is
/// mutated; the result is an independent output future, fulfilled on a
/// scheduler iteration after both inputs are.
///
/// Together with [`map`], this evaluates a multi-argument function over
/// several futures one argument at a time, in whatever order the inputs
/// resolve.
///
/// [`map`]: crate::combinator::map
pub fn apply<T, U>(
    scheduler: &Scheduler,
    function: &Future<Curried<T, U>>,
    argument: &Future<T>,
) -> Future<U>
where
    T: Clone + 'static,
    U: 'static,
{
    let output = Future::new();
    let scheduler = scheduler.clone();
    let argument = argument.clone();
    let result = output.clone();
    function.add_trigger(move |curried: &Curried<T, U>| {
        let curried = Rc::clone(curried);
        schedule_apply(&scheduler, &argument, move |value| curried(value), result);
    });
    output
}
