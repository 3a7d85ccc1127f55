//! Scheduler and runtime configuration.
//!
//! This module contains the driving machinery of the crate:
//!
//! - [`scheduler`]: the cooperative FIFO/LIFO task scheduler
//! - [`config`]: scheduler configuration types
//! - [`builder`]: fluent, move-based scheduler builder
//!
//! # Driving Contract
//!
//! A program constructs futures and combinator chains against a
//! [`Scheduler`] handle, then calls [`Scheduler::run`] at the point it wants
//! execution to completion; `run` returning means all scheduled and
//! transitively triggered work has finished.
//!
//! ```
//! use monosync::runtime::{QueueOrder, Scheduler};
//!
//! let scheduler = Scheduler::builder().order(QueueOrder::Fifo).build();
//! scheduler.schedule(|| println!("deferred"));
//! let executed = scheduler.run();
//! assert_eq!(executed, 1);
//! ```

pub mod builder;
pub mod config;
pub mod scheduler;

pub use builder::SchedulerBuilder;
pub use config::{QueueOrder, SchedulerConfig};
pub use scheduler::Scheduler;
