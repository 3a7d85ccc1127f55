//! Monosync: a single-threaded cooperative future runtime with a monadic
//! composition algebra.
//!
//! # Overview
//!
//! Monosync pairs a cooperative task scheduler with a single-assignment
//! future cell and builds a small composition algebra on top: functor
//! ([`map`](combinator::map)), applicative ([`apply`](combinator::apply)),
//! and monad ([`bind`](combinator::bind) / [`flatten`](combinator::flatten)).
//! A generic currying adapter ([`curry`]) turns any multi-argument function
//! into a chain of unary functions so arbitrary callables compose uniformly
//! through the algebra, one argument at a time, as values arrive from
//! independent futures.
//!
//! # Core Guarantees
//!
//! - **Single assignment**: a future cell accepts exactly one value; a second
//!   write fails with [`Error::DoubleFulfillment`](error::Error)
//! - **Ordered triggers**: callbacks on a future fire in registration order,
//!   synchronously, before `fulfill` returns
//! - **Deterministic draining**: [`Scheduler::run`](runtime::Scheduler::run)
//!   executes every directly and transitively scheduled task exactly once,
//!   in queue order (FIFO by default, LIFO configurable)
//! - **No hidden state**: the scheduler is an explicit handle passed to
//!   `spawn` and the combinators, never a thread-local singleton
//!
//! # Execution Model
//!
//! Everything is single-threaded and cooperative. A pending computation has
//! no runtime representation beyond a trigger waiting on a future plus,
//! transitively, a task waiting in the scheduler queue; nothing blocks and
//! no task yields mid-execution. A future that is never fulfilled keeps its
//! waiting chain alive for the life of the scheduler; that is a documented
//! liveness limitation, not an error.
//!
//! # Module Structure
//!
//! - [`curry`]: arity-generic currying adapter
//! - [`future`]: the single-assignment future cell
//! - [`runtime`]: scheduler, configuration, and builder
//! - [`combinator`]: `spawn`, `map`, `apply`, `bind`, `flatten`
//! - [`error`]: error types
//!
//! # Quick Start
//!
//! ```
//! use monosync::combinator::{map, spawn};
//! use monosync::runtime::Scheduler;
//!
//! let scheduler = Scheduler::new();
//! let answer = spawn(&scheduler, || 11);
//! let doubled = map(&scheduler, |n: i32| n * 2, &answer);
//! scheduler.run();
//! assert_eq!(doubled.value(), Some(22));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod combinator;
pub mod curry;
pub mod error;
pub mod future;
pub mod runtime;

pub use combinator::{apply, bind, flatten, map, spawn};
pub use curry::{curry, Curried, Curry};
pub use error::{Error, Result};
pub use future::Future;
pub use runtime::{QueueOrder, Scheduler, SchedulerBuilder, SchedulerConfig};
