//! Forwarding adapter: answer one view by routing through another.

use core::marker::PhantomData;

use crate::{
    access::{Getter, Setter},
    tag::Tag,
};

/// Answers the `T`-view by forwarding to the provider's `D`-view and asking
/// *it* for `T`.
///
/// The adapter stores nothing of its own: `get(Tag::<T>)` is implemented as
/// "obtain the `D`-view, then call `get(Tag::<T>)` on the result", and
/// `set` forwards symmetrically. This lets a provider expose a view that is
/// really implemented by one of its sub-views, without re-storing the value.
///
/// The `D`-view itself implementing [`Getter<T>`] (and [`Setter<T>`] for the
/// write path) is a compile-time requirement; there is nothing to check at
/// runtime.
///
/// The provider may be held by value or by mutable borrow; read-only
/// forwarding needs only the shared borrow of the adapter.
pub struct ExtensionDelegate<P, D: ?Sized, T: ?Sized> {
    /// The provider whose `D`-view answers the `T`-view.
    provider: P,
    /// Route marker: which intermediate and final view this adapter serves.
    _route: PhantomData<(fn() -> Tag<D>, fn() -> Tag<T>)>,
}

impl<P, D: ?Sized, T: ?Sized> ExtensionDelegate<P, D, T> {
    /// Creates a delegate forwarding through `provider`'s `D`-view.
    #[inline]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _route: PhantomData,
        }
    }

    /// Returns the wrapped provider.
    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the wrapped provider mutably.
    #[inline]
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Consumes the delegate and returns the provider.
    #[inline]
    pub fn into_provider(self) -> P {
        self.provider
    }
}

impl<P, D, T> Getter<T> for ExtensionDelegate<P, D, T>
where
    P: Getter<D>,
    D: Getter<T> + ?Sized,
    T: ?Sized,
{
    #[inline]
    fn get(&self, tag: Tag<T>) -> &T {
        self.provider.get(Tag::new()).get(tag)
    }

    #[inline]
    fn get_mut(&mut self, tag: Tag<T>) -> &mut T {
        self.provider.get_mut(Tag::new()).get_mut(tag)
    }
}

impl<P, D, T> Setter<T> for ExtensionDelegate<P, D, T>
where
    P: Getter<D>,
    D: Setter<T> + ?Sized,
{
    #[inline]
    fn set(&mut self, tag: Tag<T>, value: T) {
        self.provider.get_mut(Tag::new()).set(tag, value);
    }
}
