//! Helpers for constructing transition tables.
//!
//! Static tables are written with [`transition_table!`](crate::transition_table)
//! or the `const` constructors on [`Transition`]. Tables assembled at runtime
//! go through [`TableBuilder`], which rejects anything a machine could not
//! be initialized with.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{Action, ActionFn, Guard, GuardFn, StateId, Transition};
use crate::table::MAX_TRANSITIONS;

/// Builder for heap-allocated transition tables with a fluent API.
///
/// # Example
///
/// ```
/// use fsm_table::builder::TableBuilder;
/// use fsm_table::core::{FireResult, Fsm};
///
/// let table = TableBuilder::<()>::new()
///     .always(0, 1)
///     .always(1, 0)
///     .build()
///     .unwrap();
///
/// let mut fsm = Fsm::new(&table, ()).unwrap();
/// assert_eq!(fsm.fire(), FireResult::Fired);
/// assert_eq!(fsm.current_state(), 1);
/// ```
pub struct TableBuilder<C> {
    records: Vec<Transition<C>>,
}

impl<C> TableBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add an unguarded transition without an action.
    pub fn always(self, origin: StateId, dest: StateId) -> Self {
        self.transition(Transition::always(origin, dest))
    }

    /// Add a guarded transition without an action.
    pub fn when(self, origin: StateId, guard: GuardFn<C>, dest: StateId) -> Self {
        self.transition(Transition::new(origin, Some(Guard::new(guard)), dest, None))
    }

    /// Add a transition with both a guard and an action.
    pub fn when_then(
        self,
        origin: StateId,
        guard: GuardFn<C>,
        dest: StateId,
        action: ActionFn<C>,
    ) -> Self {
        self.transition(Transition::new(
            origin,
            Some(Guard::new(guard)),
            dest,
            Some(Action::new(action)),
        ))
    }

    /// Add an unguarded transition with an action.
    pub fn then(self, origin: StateId, dest: StateId, action: ActionFn<C>) -> Self {
        self.transition(Transition::new(origin, None, dest, Some(Action::new(action))))
    }

    /// Add a pre-built record.
    pub fn transition(mut self, transition: Transition<C>) -> Self {
        self.records.push(transition);
        self
    }

    /// Build the table, appending the end-of-table marker.
    pub fn build(self) -> Result<Vec<Transition<C>>, BuildError> {
        if self.records.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Some(index) = self.records.iter().position(Transition::is_sentinel) {
            return Err(BuildError::SentinelRecord { index });
        }

        let count = self.records.len();
        if count > MAX_TRANSITIONS {
            return Err(BuildError::TooManyTransitions {
                count,
                max: MAX_TRANSITIONS,
            });
        }

        let mut records = self.records;
        records.push(Transition::SENTINEL);
        Ok(records)
    }
}

impl<C> Default for TableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
