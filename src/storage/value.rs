//! Value-backed storage.

use crate::{
    access::{Getter, Setter},
    tag::Tag,
};

/// A slot that owns its value.
///
/// The value is moved in at construction (or defaulted, when `T: Default`)
/// and dropped with the slot. Because the slot owns a distinct instance,
/// writes through [`Setter::set`] are never visible to any external copy of
/// the original value; [`into_inner`] is the only way to move the value back
/// out.
///
/// [`into_inner`]: ValueSlot::into_inner
pub struct ValueSlot<T> {
    /// The owned slot.
    value: T,
}

impl<T> ValueSlot<T> {
    /// Creates a slot owning `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Consumes the slot and returns the owned value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Default> Default for ValueSlot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for ValueSlot<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Getter<T> for ValueSlot<T> {
    #[inline]
    fn get(&self, _tag: Tag<T>) -> &T {
        &self.value
    }

    #[inline]
    fn get_mut(&mut self, _tag: Tag<T>) -> &mut T {
        &mut self.value
    }
}

impl<T> Setter<T> for ValueSlot<T> {
    #[inline]
    fn set(&mut self, _tag: Tag<T>, value: T) {
        self.value = value;
    }
}

impl<T: Clone> Clone for ValueSlot<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ValueSlot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ValueSlot").field(&self.value).finish()
    }
}
