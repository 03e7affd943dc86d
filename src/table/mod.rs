//! Transition table validation and inspection.
//!
//! Tables are plain slices of [`Transition`] records closed by a sentinel.
//! The end of the slice also ends every scan, so an unterminated slice is
//! never read out of bounds.

mod audit;

pub use audit::{audit, TableIssue};

use crate::core::{FsmError, StateId, Transition};
use serde::{Deserialize, Serialize};

/// Largest number of transitions a table may hold.
pub const MAX_TRANSITIONS: usize = 128;

/// Return the first record if the table may be bound to a machine.
pub(crate) fn first_record<C>(table: &[Transition<C>]) -> Result<&Transition<C>, FsmError> {
    let first = table.first().ok_or(FsmError::MissingTable)?;
    if first.is_sentinel() {
        return Err(FsmError::LeadingSentinel);
    }
    Ok(first)
}

/// Whether a machine can be bound to `table`.
///
/// Only the first record is inspected: the table must not be empty and must
/// not start with a sentinel.
pub fn is_valid<C>(table: &[Transition<C>]) -> bool {
    first_record(table).is_ok()
}

/// Count the valid records before the first sentinel.
///
/// At most `MAX_TRANSITIONS + 1` records are read. A table with more than
/// [`MAX_TRANSITIONS`] transitions fails with [`FsmError::TableTooLarge`]
/// instead of reporting a truncated count.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::Transition;
/// use fsm_table::table::count_transitions;
///
/// let table = [
///     Transition::<()>::always(0, 1),
///     Transition::always(1, 0),
///     Transition::SENTINEL,
/// ];
/// assert_eq!(count_transitions(&table), Ok(2));
/// ```
pub fn count_transitions<C>(table: &[Transition<C>]) -> Result<usize, FsmError> {
    first_record(table)?;

    let count = table
        .iter()
        .take(MAX_TRANSITIONS + 1)
        .take_while(|t| !t.is_sentinel())
        .count();

    if count > MAX_TRANSITIONS {
        return Err(FsmError::TableTooLarge {
            max: MAX_TRANSITIONS,
        });
    }
    Ok(count)
}

/// Shape of one transition record, without its callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub origin: StateId,
    pub dest: StateId,
    /// Whether the record has a guard.
    pub guarded: bool,
    /// Whether the record has an action.
    pub has_action: bool,
}

impl<C> From<&Transition<C>> for Edge {
    fn from(transition: &Transition<C>) -> Self {
        Self {
            origin: transition.origin_state,
            dest: transition.dest_state,
            guarded: transition.guard.is_some(),
            has_action: transition.action.is_some(),
        }
    }
}

/// Describe every record before the first sentinel, in table order.
pub fn edges<C>(table: &[Transition<C>]) -> Vec<Edge> {
    table
        .iter()
        .take_while(|t| !t.is_sentinel())
        .map(Edge::from)
        .collect()
}
