//! Scheduler configuration types.
//!
//! These types hold the concrete values that drive scheduler behavior. In
//! most cases you should use
//! [`SchedulerBuilder`](super::builder::SchedulerBuilder) rather than
//! creating a [`SchedulerConfig`] directly.
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `order` | `QueueOrder::Fifo` |
//! | `initial_capacity` | 32 |

/// Ordering policy for the task queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueOrder {
    /// Insertion order: breadth-first execution of independent continuation
    /// chains. The default, and the more predictable cooperative-scheduling
    /// contract.
    #[default]
    Fifo,
    /// Stack order: depth-first execution, following each continuation chain
    /// as far as possible before starting the next.
    Lifo,
}

/// Scheduler configuration.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Ordering policy for pending tasks.
    pub order: QueueOrder,
    /// Initial capacity of the task queue.
    pub initial_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            order: QueueOrder::Fifo,
            initial_capacity: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order_is_fifo() {
        assert_eq!(SchedulerConfig::default().order, QueueOrder::Fifo);
    }
}
