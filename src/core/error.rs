//! Construction errors for machines and tables.

use thiserror::Error;

/// Errors that can occur when creating or initializing a machine.
///
/// Any variant means construction failed; none of them leave a partially
/// usable machine behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("Transition table is empty")]
    MissingTable,

    #[error("Transition table starts with the end-of-table marker")]
    LeadingSentinel,

    #[error("No instance to initialize")]
    MissingInstance,

    #[error("Allocator could not provide storage for the instance")]
    AllocationFailed,

    #[error("Transition table holds more than {max} transitions")]
    TableTooLarge { max: usize },
}
