//! Shared, immutable heap storage for values.
//!
//! `Heap<T>` wraps an `Arc<T>` with a crate-private constructor, so heap
//! allocations only happen through the `Value` factory methods and the
//! object builders in this crate.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted, immutable heap cell.
///
/// Cloning is cheap and shares the allocation. Equality compares the
/// contents; use [`Heap::ptr_eq`] when identity matters (prototype lookup,
/// object equality).
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate a new heap cell.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two cells share the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Mutable access when this is the only handle to the allocation.
    #[inline]
    pub(crate) fn get_mut(this: &mut Self) -> Option<&mut T> {
        Arc::get_mut(&mut this.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
