//! Capability contracts: the narrowest read and write access surfaces.
//!
//! A *capability contract* describes access to one logical slot holding a
//! value of type `T`, addressed by a [`Tag<T>`] token. A provider type can
//! implement the contracts for several different tag types at once, which is
//! what makes it an extension provider: each implemented tag is one typed
//! view the provider exposes.
//!
//! Two contract families exist:
//!
//! - [`Getter`]/[`Setter`]/[`GetterSetter`]: infallible access, implemented
//!   by reference-backed and value-backed storage ([`RefSlot`],
//!   [`ValueSlot`], [`Extension`]) and by the forwarding adapters.
//! - [`TryGetter`]/[`TrySetter`]: fallible access, implemented by
//!   pointer-backed storage ([`PtrSlot`]), whose slot may be unbound.
//!
//! The const-view/mutable-view duality maps onto Rust receivers: a shared
//! borrow of a provider only grants [`Getter::get`], while
//! [`Getter::get_mut`] and [`Setter::set`] require a unique borrow.
//!
//! [`RefSlot`]: crate::storage::RefSlot
//! [`ValueSlot`]: crate::storage::ValueSlot
//! [`PtrSlot`]: crate::storage::PtrSlot
//! [`Extension`]: crate::Extension

use crate::tag::Tag;

/// Read access to the view of type `T`.
///
/// `get` returns a shared borrow of the viewed value; `get_mut` a unique
/// one. Both are infallible: a provider only implements `Getter<T>` when the
/// `T`-view is always present.
pub trait Getter<T: ?Sized> {
    /// Returns the view of type `T`.
    fn get(&self, tag: Tag<T>) -> &T;

    /// Returns the view of type `T` mutably.
    fn get_mut(&mut self, tag: Tag<T>) -> &mut T;
}

/// Write access to the view of type `T`.
///
/// `set` overwrites the viewed slot in place. Where the slot borrows an
/// external value, the overwrite is visible through the original reference.
pub trait Setter<T> {
    /// Overwrites the slot behind the view of type `T`.
    fn set(&mut self, tag: Tag<T>, value: T);
}

/// Combined read and write access to the view of type `T`.
///
/// Blanket-implemented for every provider implementing both [`Getter`] and
/// [`Setter`]; useful as a single trait bound.
pub trait GetterSetter<T>: Getter<T> + Setter<T> {}

impl<T, X> GetterSetter<T> for X where X: Getter<T> + Setter<T> + ?Sized {}

/// Fallible read access to the view of type `T`.
///
/// Implemented by providers whose slot can be unbound, such as
/// pointer-backed storage. `None` means the slot currently points at
/// nothing; it never means a type mismatch (that is a compile-time
/// question).
pub trait TryGetter<T: ?Sized> {
    /// Returns the view of type `T`, or `None` if the slot is unbound.
    fn try_get(&self, tag: Tag<T>) -> Option<&T>;

    /// Returns the view of type `T` mutably, or `None` if the slot is
    /// unbound.
    fn try_get_mut(&mut self, tag: Tag<T>) -> Option<&mut T>;
}

/// Fallible write access to the view of type `T`.
pub trait TrySetter<T> {
    /// Overwrites the slot behind the view of type `T`.
    ///
    /// On an unbound slot the value is handed back unchanged as the error,
    /// so no write is ever silently dropped.
    fn try_set(&mut self, tag: Tag<T>, value: T) -> Result<(), T>;
}
