//! Compile-time type tokens used to select capability overloads.

use core::marker::PhantomData;

/// A zero-sized token selecting "the view of type `T`" at a call site.
///
/// Capability methods like [`Getter::get`] take a `Tag<T>` purely so the
/// compiler can pick the right impl when a provider exposes several views;
/// no runtime data is carried and no runtime decision is made. Requesting a
/// tag a provider was never composed for is a compile error, not a runtime
/// failure.
///
/// [`Getter::get`]: crate::access::Getter::get
///
/// # Examples
///
/// ```
/// use extview::{Extension, Getter, Tag};
///
/// let mut value = 5;
/// let extension = Extension::new(&mut value);
/// assert_eq!(*extension.get(Tag::new()), 5);
/// ```
pub struct Tag<T: ?Sized>(PhantomData<fn() -> T>);

impl<T: ?Sized> Tag<T> {
    /// Creates the token for the view of type `T`.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for Tag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Tag<T> {}

impl<T: ?Sized> Default for Tag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> core::fmt::Debug for Tag<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tag<{}>", core::any::type_name::<T>())
    }
}

impl<T: ?Sized> PartialEq for Tag<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for Tag<T> {}
