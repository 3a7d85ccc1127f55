//! Arity-generic currying adapter.
//!
//! [`Curry`] converts a callable of static arity N into an equivalent chain
//! of unary functions: applying the chain to argument 1 yields a callable of
//! arity N-1 capturing argument 1, and so on until the original function can
//! be invoked. The base case (arity 1) is the identity wrapping of the
//! callable itself.
//!
//! The adapter is a purely structural transform with no side effects. It
//! accepts plain `fn` items, capturing closures, and anything else
//! implementing the `Fn` traits. Its purpose in this crate is to let
//! [`map`](crate::combinator::map) and [`apply`](crate::combinator::apply)
//! accept functions of any arity and feed them one argument at a time as
//! values arrive from independent futures:
//!
//! ```
//! use monosync::curry::Curry;
//!
//! let add = |a: i32, b: i32, c: i32| a + b + c;
//! let curried = add.curry();
//! let partial = curried(1)(2);
//! assert_eq!(partial(3), 6);
//! assert_eq!(partial(40), 43);
//! ```
//!
//! Each step of the chain is an [`Rc`]-shared `Fn`, so partial applications
//! are cheap to clone and may be applied any number of times; every argument
//! except the last is therefore required to be `Clone` (it is re-supplied on
//! each call of the remaining chain).

use std::rc::Rc;

/// One unary step of a curried call chain: a shared function from `A` to `R`.
///
/// For a function of arity N the fully curried form nests N of these, e.g.
/// `Curried<A, Curried<B, R>>` for `Fn(A, B) -> R`.
pub type Curried<A, R> = Rc<dyn Fn(A) -> R>;

/// A callable of known arity that can be rewritten as a unary chain.
///
/// `Args` is the tuple of argument types; it is inferred from the callable's
/// `Fn` signature, so `f.curry()` needs no annotations. Implementations are
/// provided for arities 1 through 5.
pub trait Curry<Args> {
    /// The unary-chain form of this callable.
    type Curried;

    /// Rewrites this callable into a chain of single-argument functions.
    fn curry(self) -> Self::Curried;
}

/// Free-function form of [`Curry::curry`].
pub fn curry<Args, F>(f: F) -> F::Curried
where
    F: Curry<Args>,
{
    f.curry()
}

impl<F, A, R> Curry<(A,)> for F
where
    F: Fn(A) -> R + 'static,
    A: 'static,
    R: 'static,
{
    type Curried = Curried<A, R>;

    fn curry(self) -> Self::Curried {
        Rc::new(self)
    }
}

impl<F, A, B, R> Curry<(A, B)> for F
where
    F: Fn(A, B) -> R + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    type Curried = Curried<A, Curried<B, R>>;

    fn curry(self) -> Self::Curried {
        let f = Rc::new(self);
        Rc::new(move |a: A| {
            let f = Rc::clone(&f);
            Rc::new(move |b: B| f(a.clone(), b)) as Curried<B, R>
        })
    }
}

impl<F, A, B, C, R> Curry<(A, B, C)> for F
where
    F: Fn(A, B, C) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    type Curried = Curried<A, Curried<B, Curried<C, R>>>;

    fn curry(self) -> Self::Curried {
        let f = Rc::new(self);
        Rc::new(move |a: A| {
            let f = Rc::clone(&f);
            // Peel one argument and re-curry the remainder.
            let rest = move |b: B, c: C| f(a.clone(), b, c);
            <_ as Curry<(B, C)>>::curry(rest)
        })
    }
}

impl<F, A, B, C, D, R> Curry<(A, B, C, D)> for F
where
    F: Fn(A, B, C, D) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    R: 'static,
{
    type Curried = Curried<A, Curried<B, Curried<C, Curried<D, R>>>>;

    fn curry(self) -> Self::Curried {
        let f = Rc::new(self);
        Rc::new(move |a: A| {
            let f = Rc::clone(&f);
            let rest = move |b: B, c: C, d: D| f(a.clone(), b, c, d);
            <_ as Curry<(B, C, D)>>::curry(rest)
        })
    }
}

impl<F, A, B, C, D, E, R> Curry<(A, B, C, D, E)> for F
where
    F: Fn(A, B, C, D, E) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
    E: 'static,
    R: 'static,
{
    type Curried = Curried<A, Curried<B, Curried<C, Curried<D, Curried<E, R>>>>>;

    fn curry(self) -> Self::Curried {
        let f = Rc::new(self);
        Rc::new(move |a: A| {
            let f = Rc::clone(&f);
            let rest = move |b: B, c: C, d: D, e: E| f(a.clone(), b, c, d, e);
            <_ as Curry<(B, C, D, E)>>::curry(rest)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtract(a: i32, b: i32) -> i32 {
        a - b
    }

    #[test]
    fn arity_one_is_identity_wrapping() {
        let double = (|n: i32| n * 2).curry();
        assert_eq!(double(21), 42);
    }

    #[test]
    fn arity_two_fn_pointer() {
        let curried = curry(subtract);
        assert_eq!(curried(10)(4), 6);
    }

    #[test]
    fn arity_two_closure_with_captured_state() {
        let offset = 100;
        let curried = (move |a: i32, b: i32| a + b + offset).curry();
        assert_eq!(curried(1)(2), 103);
    }

    #[test]
    fn partial_application_is_reusable() {
        let mult = (|a: i32, b: i32| a * b).curry();
        let times_three = mult(3);
        assert_eq!(times_three(4), 12);
        assert_eq!(times_three(5), 15);
    }

    #[test]
    fn arity_three_through_five() {
        let three = (|a: i32, b: i32, c: i32| a + b + c).curry();
        assert_eq!(three(1)(2)(3), 6);

        let four = (|a: i32, b: i32, c: i32, d: i32| a * b * c * d).curry();
        assert_eq!(four(1)(2)(3)(4), 24);

        let five = (|a: u64, b: u64, c: u64, d: u64, e: u64| a + b + c + d + e).curry();
        assert_eq!(five(1)(2)(3)(4)(5), 15);
    }

    #[test]
    fn mixed_argument_types() {
        let describe = (|name: String, count: usize| format!("{name}: {count}")).curry();
        let apples = describe("apples".to_string());
        assert_eq!(apples(3), "apples: 3");
        assert_eq!(apples(7), "apples: 7");
    }

    #[test]
    fn curried_steps_are_cheaply_cloneable() {
        let add = (|a: i32, b: i32| a + b).curry();
        let also_add = Rc::clone(&add);
        assert_eq!(add(1)(2), also_add(1)(2));
    }
}
