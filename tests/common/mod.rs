#![allow(dead_code)]
//! Shared integration test utilities.
//!
//! Import with:
//! ```
//! mod common;
//! use common::*;
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging with trace-level output.
///
/// Safe to call multiple times; only initializes once.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}

/// An output sink standing in for stdout in scenario tests.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl OutputLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line.
    pub fn push(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push(line.into());
    }

    /// Returns the lines observed so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// A printing function in the shape the scenarios expect: records the
    /// value and returns it unchanged.
    pub fn print_fn(&self) -> impl Fn(i64) -> i64 + 'static {
        let log = self.clone();
        move |value| {
            log.push(value.to_string());
            value
        }
    }
}
