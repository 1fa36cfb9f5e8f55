//! Pointer-backed storage.

use crate::{
    access::{TryGetter, TrySetter},
    tag::Tag,
};

/// A slot that optionally borrows a value.
///
/// This is the pointer-shaped storage strategy: a fresh slot is unbound and
/// must be [`bind`]-ed before any access succeeds. Accordingly the slot
/// implements the fallible [`TryGetter`]/[`TrySetter`] contracts rather than
/// the infallible ones; an unbound slot answers `None` instead of invoking
/// undefined behavior. The slot never owns or drops its referent.
///
/// [`bind`]: PtrSlot::bind
pub struct PtrSlot<'a, T: ?Sized> {
    /// The optionally borrowed slot.
    target: Option<&'a mut T>,
}

impl<'a, T: ?Sized> PtrSlot<'a, T> {
    /// Creates a slot bound to `target`.
    #[inline]
    pub fn new(target: &'a mut T) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Creates an unbound slot.
    #[inline]
    pub const fn new_unbound() -> Self {
        Self { target: None }
    }

    /// Rebinds the slot to `target`, returning the previous binding.
    #[inline]
    pub fn bind(&mut self, target: &'a mut T) -> Option<&'a mut T> {
        self.target.replace(target)
    }

    /// Unbinds the slot, returning the binding if one was present.
    #[inline]
    pub fn release(&mut self) -> Option<&'a mut T> {
        self.target.take()
    }

    /// Returns `true` if the slot currently borrows a value.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }
}

impl<T: ?Sized> Default for PtrSlot<'_, T> {
    fn default() -> Self {
        Self::new_unbound()
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for PtrSlot<'a, T> {
    fn from(target: &'a mut T) -> Self {
        Self::new(target)
    }
}

impl<T: ?Sized> TryGetter<T> for PtrSlot<'_, T> {
    #[inline]
    fn try_get(&self, _tag: Tag<T>) -> Option<&T> {
        self.target.as_deref()
    }

    #[inline]
    fn try_get_mut(&mut self, _tag: Tag<T>) -> Option<&mut T> {
        self.target.as_deref_mut()
    }
}

impl<T> TrySetter<T> for PtrSlot<'_, T> {
    #[inline]
    fn try_set(&mut self, _tag: Tag<T>, value: T) -> Result<(), T> {
        match self.target.as_deref_mut() {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(value),
        }
    }
}

impl<T: ?Sized + core::fmt::Debug> core::fmt::Debug for PtrSlot<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("PtrSlot").field(&self.target).finish()
    }
}
