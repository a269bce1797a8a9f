//! Error kinds raised by the planner core.

use thiserror::Error;

/// Errors returned by address parsing, prefix arithmetic and VLSM allocation.
///
/// Every error is terminal for the operation that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Malformed dotted-decimal address, prefix or host count.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Prefix outside [0,32], negative host count, or a host count larger than IPv4.
    #[error("Range error: {0}")]
    Range(String),

    /// Allocation would run past the end of the base block.
    #[error("Capacity error: {name} needs /{prefix} ({block_size} addresses) at {cursor}, past the end of {base}")]
    Capacity {
        name: String,
        prefix: u8,
        block_size: u64,
        cursor: String,
        base: String,
    },
}

impl PlanError {
    pub fn is_parse(&self) -> bool {
        matches!(self, PlanError::Parse(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, PlanError::Range(_))
    }

    pub fn is_capacity(&self) -> bool {
        matches!(self, PlanError::Capacity { .. })
    }
}
