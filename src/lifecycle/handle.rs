//! Owning handle for heap-allocated machines.

use super::alloc::FsmAllocator;
use crate::core::Fsm;
use std::fmt;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// A machine living in storage obtained from an [`FsmAllocator`].
///
/// Dereferences to [`Fsm`]. The storage goes back to the allocator exactly
/// once, when the handle is dropped or passed to
/// [`FsmManager::destroy`](super::FsmManager::destroy). The transition table
/// is borrowed and never released.
pub struct FsmBox<'t, 'a, C, A: FsmAllocator> {
    // Taken only in `drop`, so always live while the handle is reachable.
    fsm: ManuallyDrop<Box<Fsm<'t, C>>>,
    allocator: &'a A,
}

impl<'t, 'a, C, A: FsmAllocator> FsmBox<'t, 'a, C, A> {
    pub(crate) fn new(fsm: Box<Fsm<'t, C>>, allocator: &'a A) -> Self {
        Self {
            fsm: ManuallyDrop::new(fsm),
            allocator,
        }
    }
}

impl<'t, C, A: FsmAllocator> Deref for FsmBox<'t, '_, C, A> {
    type Target = Fsm<'t, C>;

    fn deref(&self) -> &Self::Target {
        &self.fsm
    }
}

impl<C, A: FsmAllocator> DerefMut for FsmBox<'_, '_, C, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fsm
    }
}

impl<C, A: FsmAllocator> Drop for FsmBox<'_, '_, C, A> {
    fn drop(&mut self) {
        // SAFETY: `fsm` is never touched again after this point.
        let fsm = unsafe { ManuallyDrop::take(&mut self.fsm) };
        debug!(state = fsm.current_state(), "releasing fsm instance");
        self.allocator.dealloc(fsm);
    }
}

impl<C: fmt::Debug, A: FsmAllocator> fmt::Debug for FsmBox<'_, '_, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FsmBox").field(&**self.fsm).finish()
    }
}
