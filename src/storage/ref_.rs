//! Reference-backed storage.

use crate::{
    access::{Getter, Setter},
    tag::Tag,
};

/// A slot backed by a unique borrow of an existing value.
///
/// The slot must be bound at construction; a reference cannot be empty, so
/// no default-constructed state exists. Writes through [`Setter::set`] land
/// in the borrowed value and are visible through the original reference once
/// the slot is released. The slot never manages the referent's lifetime.
pub struct RefSlot<'a, T: ?Sized> {
    /// The borrowed slot.
    target: &'a mut T,
}

impl<'a, T: ?Sized> RefSlot<'a, T> {
    /// Binds a new slot to `target`.
    #[inline]
    pub fn new(target: &'a mut T) -> Self {
        Self { target }
    }

    /// Releases the slot, handing the borrow back.
    #[inline]
    pub fn into_target(self) -> &'a mut T {
        self.target
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for RefSlot<'a, T> {
    fn from(target: &'a mut T) -> Self {
        Self::new(target)
    }
}

impl<T: ?Sized> Getter<T> for RefSlot<'_, T> {
    #[inline]
    fn get(&self, _tag: Tag<T>) -> &T {
        self.target
    }

    #[inline]
    fn get_mut(&mut self, _tag: Tag<T>) -> &mut T {
        self.target
    }
}

impl<T> Setter<T> for RefSlot<'_, T> {
    #[inline]
    fn set(&mut self, _tag: Tag<T>, value: T) {
        *self.target = value;
    }
}

impl<T: ?Sized + core::fmt::Debug> core::fmt::Debug for RefSlot<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefSlot").field(&self.target).finish()
    }
}
