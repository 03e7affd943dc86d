//! Guard predicates and output actions attached to transition records.
//!
//! Both wrap plain function pointers so that records stay `Copy` and can be
//! written into `static` tables. Each callback receives the machine itself,
//! which is how it reaches the caller's context.

use super::machine::Fsm;
use std::fmt;

/// Signature of a guard callback.
pub type GuardFn<C> = for<'a, 't> fn(&'a Fsm<'t, C>) -> bool;

/// Signature of an action callback.
pub type ActionFn<C> = for<'a, 't> fn(&'a mut Fsm<'t, C>);

/// Predicate that decides whether a matching transition fires.
///
/// A record without a guard behaves as if its guard always returned `true`.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{Fsm, Guard, Transition};
///
/// fn door_open(fsm: &Fsm<'_, bool>) -> bool {
///     *fsm.context()
/// }
///
/// let table = [
///     Transition::new(0, Some(Guard::new(door_open)), 1, None),
///     Transition::SENTINEL,
/// ];
/// let fsm = Fsm::new(&table, true).unwrap();
/// assert!(Guard::new(door_open).check(&fsm));
/// ```
pub struct Guard<C> {
    predicate: GuardFn<C>,
}

impl<C> Guard<C> {
    /// Wrap a guard function. Usable in `const` and `static` initializers.
    pub const fn new(predicate: GuardFn<C>) -> Self {
        Self { predicate }
    }

    /// Evaluate the guard against the machine.
    pub fn check(&self, fsm: &Fsm<'_, C>) -> bool {
        (self.predicate)(fsm)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Guard<C> {}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guard({:p})", self.predicate as *const ())
    }
}

/// Output function run once after a transition has been applied.
///
/// The action sees the machine already in the destination state and may
/// mutate the context (or even override the state).
pub struct Action<C> {
    output: ActionFn<C>,
}

impl<C> Action<C> {
    /// Wrap an action function. Usable in `const` and `static` initializers.
    pub const fn new(output: ActionFn<C>) -> Self {
        Self { output }
    }

    /// Run the action.
    pub fn run(&self, fsm: &mut Fsm<'_, C>) {
        (self.output)(fsm)
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Action<C> {}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action({:p})", self.output as *const ())
    }
}
