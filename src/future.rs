//! The single-assignment future cell.
//!
//! A [`Future<T>`] is a reference-counted cell holding an eventual value of
//! type `T` plus an ordered list of fulfillment triggers. The cell moves
//! through exactly one state transition, unset to set; a second write fails
//! with [`Error::DoubleFulfillment`].
//!
//! Triggers registered before fulfillment fire synchronously inside
//! [`Future::fulfill`], in registration order, with a reference to the value.
//! A trigger registered after fulfillment fires immediately inside
//! [`Future::add_trigger`]. Triggers typically schedule continuation tasks on
//! a [`Scheduler`](crate::runtime::Scheduler) rather than doing heavy work
//! inline; the combinators in [`crate::combinator`] are built entirely from
//! this pattern.
//!
//! The handle is `Rc`-based and cheap to clone for any `T`. Many holders may
//! read a cell, but only one logical producer may write it; that single-writer
//! discipline is the only concurrency rule the crate needs, since execution
//! is strictly single-threaded.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A fulfillment callback. Fires at most once, with a reference to the value.
type Trigger<T> = Box<dyn FnOnce(&T)>;

struct CellState<T> {
    /// Unset until fulfilled, then immutable. Stored behind `Rc` so triggers
    /// run without holding the `RefCell` borrow; a trigger may reenter this
    /// cell (or fulfill another future whose triggers run inline).
    value: Option<Rc<T>>,
    triggers: Vec<Trigger<T>>,
}

/// A single-assignment container for a value that becomes available at most
/// once, after which registered triggers are notified.
///
/// Cloning a `Future` clones the handle, not the cell: all clones observe the
/// same eventual value.
pub struct Future<T> {
    cell: Rc<RefCell<CellState<T>>>,
}

impl<T> Clone for Future<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T> Default for Future<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Future<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.cell.borrow();
        f.debug_struct("Future")
            .field("fulfilled", &state.value.is_some())
            .field("pending_triggers", &state.triggers.len())
            .finish()
    }
}

impl<T> Future<T> {
    /// Creates a new, unset cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: Rc::new(RefCell::new(CellState {
                value: None,
                triggers: Vec::new(),
            })),
        }
    }

    /// Creates a cell that is already set to `value`.
    #[must_use]
    pub fn ready(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(CellState {
                value: Some(Rc::new(value)),
                triggers: Vec::new(),
            })),
        }
    }

    /// Sets the value and synchronously runs every registered trigger, in
    /// registration order. All triggers complete before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DoubleFulfillment`] if the cell is already set; the
    /// first value and any triggers it fired are unaffected.
    pub fn fulfill(&self, value: T) -> Result<()> {
        let (value, pending) = {
            let mut state = self.cell.borrow_mut();
            if state.value.is_some() {
                return Err(Error::DoubleFulfillment);
            }
            let value = Rc::new(value);
            state.value = Some(Rc::clone(&value));
            (value, std::mem::take(&mut state.triggers))
        };
        // Borrow released: triggers may register on or read this same cell.
        tracing::trace!(triggers = pending.len(), "future fulfilled");
        for trigger in pending {
            trigger(&value);
        }
        Ok(())
    }

    /// Registers `trigger` to run with the eventual value.
    ///
    /// If the cell is already set, `trigger` runs immediately, before this
    /// returns; otherwise it is appended to the trigger list and fires on
    /// fulfillment.
    pub fn add_trigger<F>(&self, trigger: F)
    where
        F: FnOnce(&T) + 'static,
    {
        let ready = self.cell.borrow().value.clone();
        match ready {
            Some(value) => trigger(&value),
            None => self.cell.borrow_mut().triggers.push(Box::new(trigger)),
        }
    }

    /// Returns true once the cell has been set.
    #[must_use]
    pub fn is_fulfilled(&self) -> bool {
        self.cell.borrow().value.is_some()
    }

    /// Returns a shared handle to the value, if set.
    #[must_use]
    pub fn peek(&self) -> Option<Rc<T>> {
        self.cell.borrow().value.clone()
    }

    /// Returns a clone of the value, if set.
    #[must_use]
    pub fn value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek().map(|value| (*value).clone())
    }
}
