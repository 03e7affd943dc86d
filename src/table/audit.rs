//! Full-table audit that reports every structural problem in one pass.
//!
//! Binding a machine only looks at the first record. `audit` walks the
//! whole table and accumulates issues with Stillwater's `Validation` instead
//! of stopping at the first one.

use super::MAX_TRANSITIONS;
use crate::core::{StateId, Transition, SENTINEL_STATE};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Structural problem found by [`audit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIssue {
    #[error("Transition table is empty")]
    MissingTable,

    #[error("Transition table starts with the end-of-table marker")]
    LeadingSentinel,

    #[error("Table holds {count} transitions, more than the {max} allowed")]
    TooManyTransitions { count: usize, max: usize },

    #[error("Table has no end-of-table marker")]
    Unterminated,

    #[error("Record {index} uses state {state}, below the end-of-table value")]
    NegativeState { index: usize, state: StateId },
}

/// Audit `table`, returning its transition count when no issue is found.
///
/// Unlike the bounded count used at initialization, the audit reads every
/// record up to the first sentinel.
///
/// A record with a state below `-1` is not a sentinel, so it is counted, yet
/// the fire scan stops at any negative origin. Such records are reported as
/// [`TableIssue::NegativeState`].
///
/// # Example
///
/// ```rust
/// use fsm_table::core::Transition;
/// use fsm_table::table::audit;
///
/// let table = [Transition::<()>::always(0, 1), Transition::SENTINEL];
/// assert!(audit(&table).is_success());
///
/// let unterminated = [Transition::<()>::always(-3, 1)];
/// assert!(audit(&unterminated).is_failure());
/// ```
pub fn audit<C>(table: &[Transition<C>]) -> Validation<usize, NonEmptyVec<TableIssue>> {
    let Some(first) = table.first() else {
        return Validation::fail(TableIssue::MissingTable);
    };
    if first.is_sentinel() {
        return Validation::fail(TableIssue::LeadingSentinel);
    }

    let records: Vec<&Transition<C>> = table.iter().take_while(|t| !t.is_sentinel()).collect();
    let count = records.len();
    let mut checks: Vec<Validation<(), NonEmptyVec<TableIssue>>> = Vec::new();

    if count > MAX_TRANSITIONS {
        checks.push(Validation::fail(TableIssue::TooManyTransitions {
            count,
            max: MAX_TRANSITIONS,
        }));
    }

    if count == table.len() {
        checks.push(Validation::fail(TableIssue::Unterminated));
    }

    for (index, record) in records.iter().enumerate() {
        for state in [record.origin_state, record.dest_state] {
            if state < SENTINEL_STATE {
                checks.push(Validation::fail(TableIssue::NegativeState { index, state }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| count)
}
