//! Scheduler builder.
//!
//! A fluent, move-based builder: each method consumes `self` and returns an
//! updated builder, enabling chaining without borrowing hazards.

use crate::runtime::config::{QueueOrder, SchedulerConfig};
use crate::runtime::scheduler::Scheduler;

/// Builder for constructing a scheduler with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct SchedulerBuilder {
    config: SchedulerConfig,
}

impl SchedulerBuilder {
    /// Create a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the queue ordering policy.
    #[must_use]
    pub fn order(mut self, order: QueueOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Set the initial capacity of the task queue.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// FIFO preset: breadth-first execution of independent chains.
    #[must_use]
    pub fn fifo() -> Self {
        Self::new().order(QueueOrder::Fifo)
    }

    /// LIFO preset: depth-first execution along each chain.
    #[must_use]
    pub fn lifo() -> Self {
        Self::new().order(QueueOrder::Lifo)
    }

    /// Build a scheduler from this configuration.
    #[must_use]
    pub fn build(self) -> Scheduler {
        Scheduler::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain_applies_configuration() {
        let scheduler = SchedulerBuilder::new()
            .order(QueueOrder::Lifo)
            .initial_capacity(8)
            .build();
        assert_eq!(scheduler.order(), QueueOrder::Lifo);
    }

    #[test]
    fn presets() {
        assert_eq!(SchedulerBuilder::fifo().build().order(), QueueOrder::Fifo);
        assert_eq!(SchedulerBuilder::lifo().build().order(), QueueOrder::Lifo);
    }
}
