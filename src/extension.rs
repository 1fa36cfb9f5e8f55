//! The unit of composition: a reference-backed typed view.

use crate::{
    access::{Getter, Setter},
    storage::RefSlot,
    tag::Tag,
};

/// The canonical "give me the `T`-view of this object" capability.
///
/// An extension is always reference-backed: it is created from a live
/// `&mut T` and never owns, drops, or outlives the value it exposes. There
/// is no default-constructed extension; an unbound view is not
/// representable.
///
/// A shared borrow of an extension grants read access only; writing through
/// [`Setter::set`] or [`Getter::get_mut`] requires the unique borrow, which
/// is the Rust rendition of the const-view/mutable-view split.
///
/// Concrete types become extension providers by implementing [`Getter`] and
/// [`Setter`] for each view they expose — usually for projections of their
/// own fields, which the [`impl_views!`] macro can generate.
///
/// [`impl_views!`]: crate::impl_views
///
/// # Examples
///
/// ```
/// use extview::{Extension, Getter, Setter, Tag};
///
/// let mut value = 5;
/// let mut extension = Extension::new(&mut value);
/// extension.set(Tag::new(), 10);
/// assert_eq!(*extension.get(Tag::new()), 10);
/// drop(extension);
/// assert_eq!(value, 10);
/// ```
pub struct Extension<'a, T: ?Sized> {
    /// The reference-backed slot this extension proxies.
    slot: RefSlot<'a, T>,
}

impl<'a, T: ?Sized> Extension<'a, T> {
    /// Binds a new extension to `target`.
    #[inline]
    pub fn new(target: &'a mut T) -> Self {
        Self {
            slot: RefSlot::new(target),
        }
    }

    /// Creates a shorter-lived extension of the same target.
    #[inline]
    pub fn reborrow(&mut self) -> Extension<'_, T> {
        Extension::new(self.slot.get_mut(Tag::new()))
    }

    /// Releases the extension, handing the borrow back.
    #[inline]
    pub fn into_target(self) -> &'a mut T {
        self.slot.into_target()
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for Extension<'a, T> {
    fn from(target: &'a mut T) -> Self {
        Self::new(target)
    }
}

impl<T: ?Sized> Getter<T> for Extension<'_, T> {
    #[inline]
    fn get(&self, tag: Tag<T>) -> &T {
        self.slot.get(tag)
    }

    #[inline]
    fn get_mut(&mut self, tag: Tag<T>) -> &mut T {
        self.slot.get_mut(tag)
    }
}

impl<T> Setter<T> for Extension<'_, T> {
    #[inline]
    fn set(&mut self, tag: Tag<T>, value: T) {
        self.slot.set(tag, value);
    }
}

impl<T: ?Sized + core::fmt::Debug> core::fmt::Debug for Extension<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Extension").field(&self.slot).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_visible_through_original() {
        let mut value = 5i32;
        {
            let mut extension = Extension::new(&mut value);
            extension.set(Tag::new(), 10);
            assert_eq!(*extension.get(Tag::new()), 10);
        }
        assert_eq!(value, 10);
    }

    #[test]
    fn test_reborrow() {
        let mut value = 1i32;
        let mut extension = Extension::new(&mut value);
        {
            let mut inner = extension.reborrow();
            inner.set(Tag::new(), 2);
        }
        assert_eq!(*extension.get(Tag::new()), 2);
    }

    #[test]
    fn test_trait_object_target() {
        trait Speak {
            fn words(&self) -> &'static str;
        }
        struct Dog;
        impl Speak for Dog {
            fn words(&self) -> &'static str {
                "woof"
            }
        }
        let mut dog = Dog;
        let extension: Extension<'_, dyn Speak> = Extension::new(&mut dog);
        assert_eq!(extension.get(Tag::new()).words(), "woof");
    }
}
