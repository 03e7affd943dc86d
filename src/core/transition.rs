//! Transition records, the rows of a transition table.

use super::guard::{Action, Guard};
use std::fmt;

/// Identifier of a machine state.
pub type StateId = i32;

/// State value reserved for the end-of-table marker.
pub const SENTINEL_STATE: StateId = -1;

/// One row of a transition table.
///
/// A table is an ordered slice of records closed by [`Transition::SENTINEL`].
/// Order matters: for a given origin state the first record whose guard
/// passes is the one that fires.
pub struct Transition<C = ()> {
    /// State the record applies to.
    pub origin_state: StateId,
    /// Optional predicate; `None` always passes.
    pub guard: Option<Guard<C>>,
    /// State entered when the record fires.
    pub dest_state: StateId,
    /// Optional output run after the state has changed.
    pub action: Option<Action<C>>,
}

impl<C> Transition<C> {
    /// End-of-table marker.
    pub const SENTINEL: Self = Self {
        origin_state: SENTINEL_STATE,
        guard: None,
        dest_state: SENTINEL_STATE,
        action: None,
    };

    /// Record with an optional guard and action.
    pub const fn new(
        origin_state: StateId,
        guard: Option<Guard<C>>,
        dest_state: StateId,
        action: Option<Action<C>>,
    ) -> Self {
        Self {
            origin_state,
            guard,
            dest_state,
            action,
        }
    }

    /// Unguarded record without an action.
    pub const fn always(origin_state: StateId, dest_state: StateId) -> Self {
        Self::new(origin_state, None, dest_state, None)
    }

    /// Whether this record marks the end of the table.
    ///
    /// Either state being [`SENTINEL_STATE`] is enough.
    pub const fn is_sentinel(&self) -> bool {
        self.origin_state == SENTINEL_STATE || self.dest_state == SENTINEL_STATE
    }
}

impl<C> Clone for Transition<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Transition<C> {}

impl<C> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("origin_state", &self.origin_state)
            .field("guard", &self.guard)
            .field("dest_state", &self.dest_state)
            .field("action", &self.action)
            .finish()
    }
}
