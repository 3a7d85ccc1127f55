//! Error types for monosync.
//!
//! The runtime has a deliberately small error surface. The only recoverable
//! error is a violation of the single-assignment contract on a future cell;
//! everything else (a task body panicking, a future that is never fulfilled)
//! is documented behavior rather than an error value.

/// Errors raised by the future cell and its combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A future was fulfilled a second time.
    ///
    /// A future cell accepts exactly one value. A second `fulfill` indicates
    /// a correctness bug in the caller: two producers both believe they own
    /// the write side of the cell. The first value and any triggers it fired
    /// are unaffected.
    #[error("future already fulfilled: a single-assignment cell accepts exactly one value")]
    DoubleFulfillment,
}

/// Result alias for monosync operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_fulfillment_display_names_the_contract() {
        let msg = Error::DoubleFulfillment.to_string();
        assert!(msg.contains("single-assignment"));
    }
}
