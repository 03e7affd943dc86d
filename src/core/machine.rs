//! State machine bound to a borrowed transition table.

use super::error::FsmError;
use super::transition::{StateId, Transition};
use crate::table;
use tracing::{debug, trace};

/// Outcome of a single [`Fsm::fire`] pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FireResult {
    /// No record in the table starts from the current state.
    NoTransition,

    /// Records exist for the current state but every guard declined.
    Blocked,

    /// A transition was applied.
    Fired,
}

impl FireResult {
    /// Numeric code: `-1`, `0` or `1`.
    pub fn code(self) -> i32 {
        match self {
            Self::NoTransition => -1,
            Self::Blocked => 0,
            Self::Fired => 1,
        }
    }

    /// Whether a transition was applied.
    pub fn fired(self) -> bool {
        matches!(self, Self::Fired)
    }
}

impl From<FireResult> for i32 {
    fn from(result: FireResult) -> Self {
        result.code()
    }
}

/// Finite state machine driven by a caller-owned transition table.
///
/// The machine borrows its table for `'t`, so the table always outlives it.
/// `C` is the caller's context: guards and actions receive the machine and
/// reach their data through [`Fsm::context`] / [`Fsm::context_mut`].
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{FireResult, Fsm, Transition};
///
/// let table = [Transition::<()>::always(0, 1), Transition::SENTINEL];
/// let mut fsm = Fsm::new(&table, ()).unwrap();
///
/// assert_eq!(fsm.fire(), FireResult::Fired);
/// assert_eq!(fsm.current_state(), 1);
/// assert_eq!(fsm.fire(), FireResult::NoTransition);
/// ```
#[derive(Debug)]
pub struct Fsm<'t, C = ()> {
    table: &'t [Transition<C>],
    current_state: StateId,
    context: C,
}

impl<'t, C> Fsm<'t, C> {
    /// Bind a new machine to `table`, starting in the origin state of the
    /// first record.
    ///
    /// Only the first record is checked; use [`Fsm::init`] or
    /// [`table::count_transitions`] for the bounded size check.
    pub fn new(table: &'t [Transition<C>], context: C) -> Result<Self, FsmError> {
        let first = table::first_record(table)?;
        Ok(Self {
            table,
            current_state: first.origin_state,
            context,
        })
    }

    /// Re-bind this machine to `table` and count its transitions.
    ///
    /// On an invalid first record the machine is left untouched. Otherwise it
    /// is bound and reset to the first origin state before counting, so an
    /// oversized table still leaves the machine bound to it even though
    /// [`FsmError::TableTooLarge`] is returned.
    pub fn init(&mut self, table: &'t [Transition<C>]) -> Result<usize, FsmError> {
        let first = table::first_record(table)?;
        self.table = table;
        self.current_state = first.origin_state;

        let count = table::count_transitions(table)?;
        debug!(state = self.current_state, transitions = count, "fsm initialized");
        Ok(count)
    }

    /// Evaluate the table once for the current state.
    ///
    /// Records are scanned in order until the first one whose origin is
    /// negative. The first record for the current state whose guard passes
    /// (or has no guard) fires: the state becomes its destination, then its
    /// action runs. At most one transition is applied per call.
    pub fn fire(&mut self) -> FireResult {
        let table = self.table;
        let mut matched = false;

        for transition in table.iter().take_while(|t| t.origin_state >= 0) {
            if transition.origin_state != self.current_state {
                continue;
            }
            matched = true;

            let passes = transition.guard.as_ref().is_none_or(|g| g.check(self));
            if !passes {
                continue;
            }

            let from = self.current_state;
            self.current_state = transition.dest_state;
            if let Some(action) = &transition.action {
                action.run(self);
            }
            debug!(from, to = transition.dest_state, "transition fired");
            return FireResult::Fired;
        }

        if matched {
            trace!(state = self.current_state, "all guards declined");
            FireResult::Blocked
        } else {
            trace!(state = self.current_state, "no transition for state");
            FireResult::NoTransition
        }
    }

    /// The state the machine is in.
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Overwrite the current state. The value is not checked against the
    /// table.
    pub fn set_state(&mut self, state: StateId) {
        self.current_state = state;
    }

    /// The table this machine is bound to.
    pub fn table(&self) -> &'t [Transition<C>] {
        self.table
    }

    /// Caller data shared with guards and actions.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable access to the caller data.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the machine, returning its caller data.
    pub fn into_context(self) -> C {
        self.context
    }
}
