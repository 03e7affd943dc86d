//! Allocation strategy used by [`FsmManager`](super::FsmManager).

/// Source of storage for heap-allocated machines.
///
/// `alloc` may refuse by returning `None`; the manager reports that as
/// [`FsmError::AllocationFailed`](crate::core::FsmError::AllocationFailed)
/// without any other side effect.
pub trait FsmAllocator {
    /// Move `value` into storage owned by this allocator.
    fn alloc<T>(&self, value: T) -> Option<Box<T>>;

    /// Take storage back. Called exactly once per successful `alloc`.
    fn dealloc<T>(&self, boxed: Box<T>) {
        drop(boxed);
    }
}

/// Default strategy backed by the global allocator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl FsmAllocator for SystemAllocator {
    fn alloc<T>(&self, value: T) -> Option<Box<T>> {
        Some(Box::new(value))
    }
}

impl<A: FsmAllocator> FsmAllocator for &A {
    fn alloc<T>(&self, value: T) -> Option<Box<T>> {
        (**self).alloc(value)
    }

    fn dealloc<T>(&self, boxed: Box<T>) {
        (**self).dealloc(boxed)
    }
}
