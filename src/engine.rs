//! Checker execution and violation aggregation

pub mod aggregator;
pub mod executor;

pub use aggregator::{ValidationReport, ViolationAggregator};
pub use executor::{ExecutionEngine, ExecutionResult};
