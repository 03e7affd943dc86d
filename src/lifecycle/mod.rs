//! Creation, in-place initialization and destruction of machines.
//!
//! Heap instances are created through an [`FsmManager`], which owns the
//! injected [`FsmAllocator`]. Machines embedded in caller-owned storage are
//! built with [`Fsm::new`] and re-bound with [`initialize`].

mod alloc;
mod handle;

pub use alloc::{FsmAllocator, SystemAllocator};
pub use handle::FsmBox;

use crate::core::{Fsm, FsmError, Transition};
use tracing::{debug, trace, warn};

/// Creates and destroys heap-allocated machines.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{FireResult, Transition};
/// use fsm_table::lifecycle::FsmManager;
///
/// static TABLE: [Transition; 2] = [Transition::always(0, 1), Transition::SENTINEL];
///
/// let manager = FsmManager::system();
/// let mut fsm = manager.create(&TABLE).unwrap();
/// assert_eq!(fsm.fire(), FireResult::Fired);
/// manager.destroy(Some(fsm));
/// ```
#[derive(Debug, Default, Clone)]
pub struct FsmManager<A: FsmAllocator = SystemAllocator> {
    allocator: A,
}

impl FsmManager {
    /// Manager backed by the global allocator.
    pub fn system() -> Self {
        Self::new(SystemAllocator)
    }
}

impl<A: FsmAllocator> FsmManager<A> {
    /// Manager that allocates through `allocator`.
    pub fn new(allocator: A) -> Self {
        Self { allocator }
    }

    /// The injected allocator.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Create a machine with a default context.
    pub fn create<'t, C: Default>(
        &self,
        table: &'t [Transition<C>],
    ) -> Result<FsmBox<'t, '_, C, A>, FsmError> {
        self.create_with_context(table, C::default())
    }

    /// Create a machine bound to `table`, starting in the origin state of
    /// its first record.
    ///
    /// Only the first record is validated. The allocator is not touched when
    /// the table is rejected.
    pub fn create_with_context<'t, C>(
        &self,
        table: &'t [Transition<C>],
        context: C,
    ) -> Result<FsmBox<'t, '_, C, A>, FsmError> {
        let fsm = Fsm::new(table, context).inspect_err(|err| {
            warn!(error = %err, "rejected transition table");
        })?;
        let state = fsm.current_state();

        let Some(boxed) = self.allocator.alloc(fsm) else {
            warn!("allocator refused fsm instance");
            return Err(FsmError::AllocationFailed);
        };

        debug!(state, "created fsm instance");
        Ok(FsmBox::new(boxed, &self.allocator))
    }

    /// Release a machine created by this manager. `None` is a no-op.
    pub fn destroy<C>(&self, fsm: Option<FsmBox<'_, '_, C, A>>) {
        match fsm {
            Some(fsm) => drop(fsm),
            None => trace!("destroy called without an instance"),
        }
    }
}

/// Initialize a machine living in caller-owned storage.
///
/// Fails with [`FsmError::MissingInstance`] when there is no instance, and
/// otherwise behaves like [`Fsm::init`]: the machine is bound to `table` and
/// the number of transitions is returned.
pub fn initialize<'t, C>(
    instance: Option<&mut Fsm<'t, C>>,
    table: &'t [Transition<C>],
) -> Result<usize, FsmError> {
    let Some(fsm) = instance else {
        warn!("initialize called without an instance");
        return Err(FsmError::MissingInstance);
    };
    fsm.init(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FireResult;
    use std::cell::Cell;

    #[derive(Default)]
    struct Tally {
        refuse: bool,
        allocs: Cell<usize>,
        deallocs: Cell<usize>,
    }

    impl FsmAllocator for Tally {
        fn alloc<T>(&self, value: T) -> Option<Box<T>> {
            self.allocs.set(self.allocs.get() + 1);
            if self.refuse {
                None
            } else {
                Some(Box::new(value))
            }
        }

        fn dealloc<T>(&self, boxed: Box<T>) {
            self.deallocs.set(self.deallocs.get() + 1);
            drop(boxed);
        }
    }

    static TABLE: [Transition; 3] = [
        Transition::always(0, 1),
        Transition::always(1, 0),
        Transition::SENTINEL,
    ];

    #[test]
    fn create_binds_to_first_origin_state() {
        let manager = FsmManager::system();
        let fsm = manager.create(&TABLE).unwrap();

        assert_eq!(fsm.current_state(), 0);
    }

    #[test]
    fn rejected_table_does_not_allocate() {
        let tally = Tally::default();
        let manager = FsmManager::new(&tally);
        let invalid: [Transition; 1] = [Transition::SENTINEL];

        assert_eq!(
            manager.create(&invalid).unwrap_err(),
            FsmError::LeadingSentinel
        );
        assert_eq!(manager.create::<()>(&[]).unwrap_err(), FsmError::MissingTable);
        assert_eq!(tally.allocs.get(), 0);
    }

    #[test]
    fn refused_allocation_fails_creation() {
        let tally = Tally {
            refuse: true,
            ..Tally::default()
        };
        let manager = FsmManager::new(&tally);

        assert_eq!(
            manager.create(&TABLE).unwrap_err(),
            FsmError::AllocationFailed
        );
        assert_eq!(tally.allocs.get(), 1);
        assert_eq!(tally.deallocs.get(), 0);
    }

    #[test]
    fn destroy_releases_once() {
        let tally = Tally::default();
        let manager = FsmManager::new(&tally);

        let fsm = manager.create(&TABLE).unwrap();
        manager.destroy(Some(fsm));
        manager.destroy::<()>(None);

        assert_eq!(tally.allocs.get(), 1);
        assert_eq!(tally.deallocs.get(), 1);
    }

    #[test]
    fn dropping_handle_releases() {
        let tally = Tally::default();
        let manager = FsmManager::new(&tally);

        {
            let mut fsm = manager.create(&TABLE).unwrap();
            assert_eq!(fsm.fire(), FireResult::Fired);
        }

        assert_eq!(tally.deallocs.get(), 1);
    }

    #[test]
    fn handle_exposes_machine_until_released() {
        let tally = Tally::default();
        let manager = FsmManager::new(&tally);
        let mut fsm = manager.create(&TABLE).unwrap();

        fsm.set_state(1);
        assert_eq!(fsm.fire(), FireResult::Fired);
        assert_eq!(fsm.current_state(), 0);
        assert!(format!("{fsm:?}").starts_with("FsmBox(Fsm {"));

        drop(fsm);
        assert_eq!(tally.allocs.get(), 1);
        assert_eq!(tally.deallocs.get(), 1);
    }

    #[test]
    fn create_with_context_keeps_context() {
        let table = [Transition::<&str>::always(3, 4), Transition::SENTINEL];
        let manager = FsmManager::system();

        let fsm = manager.create_with_context(&table, "pump").unwrap();

        assert_eq!(*fsm.context(), "pump");
        assert_eq!(fsm.current_state(), 3);
    }

    #[test]
    fn initialize_requires_instance() {
        assert_eq!(initialize(None, &TABLE), Err(FsmError::MissingInstance));
    }

    #[test]
    fn initialize_counts_transitions() {
        let other = [Transition::always(5, 6), Transition::SENTINEL];
        let mut fsm = Fsm::new(&other, ()).unwrap();

        assert_eq!(initialize(Some(&mut fsm), &TABLE), Ok(2));
        assert_eq!(fsm.current_state(), 0);
    }
}
