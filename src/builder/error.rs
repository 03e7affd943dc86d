//! Build errors for transition tables.

use thiserror::Error;

/// Errors that can occur when building a table with [`TableBuilder`](super::TableBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Record {index} is an end-of-table marker. Use states other than -1")]
    SentinelRecord { index: usize },

    #[error("Table holds {count} transitions, more than the {max} allowed")]
    TooManyTransitions { count: usize, max: usize },
}
