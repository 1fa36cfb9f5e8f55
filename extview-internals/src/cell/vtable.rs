//! Vtable for type-erased cell occupants.
//!
//! This module contains the [`CellVtable`] which enables dropping a cell
//! occupant and recovering its unsized view `P` when the occupant's concrete
//! type `V` has been erased. The vtable stores function pointers that
//! dispatch to the correct typed implementations.
//!
//! This module encapsulates the fields of [`CellVtable`] so they cannot be
//! accessed directly. This visibility restriction guarantees the safety
//! invariant: **the vtable's function pointers must match the concrete type
//! actually constructed in the cell buffer**.
//!
//! # Safety Invariant
//!
//! This invariant is maintained because vtables are created via
//! [`CellVtable::new`], which pairs the drop function with a specific type
//! `V` at compile time, and because [`RawCell`] replaces its vtable only
//! together with its occupant.
//!
//! [`RawCell`]: crate::cell::raw::RawCell

use core::ptr::NonNull;

/// Vtable for a type-erased cell occupant.
///
/// Contains function pointers for performing operations on the occupant
/// without knowing its concrete type at compile time.
///
/// # Safety Invariant
///
/// The field `drop_in_place` is guaranteed to point to the function defined
/// below instantiated with the occupant type `V` that was used to create this
/// [`CellVtable`]. The field `cast` is guaranteed to be the caller-supplied
/// function that recovers a `P` pointer from a pointer to the same `V`.
pub(crate) struct CellVtable<P: ?Sized> {
    /// Recovers the unsized view `P` from a pointer to the start of the
    /// buffer holding the occupant.
    cast: unsafe fn(NonNull<u8>) -> NonNull<P>,
    /// Drops the occupant in place, given a pointer to the start of the
    /// buffer holding it.
    drop_in_place: unsafe fn(NonNull<u8>),
    /// The [`core::any::type_name`] of the occupant.
    type_name: &'static str,
}

impl<P: ?Sized> Clone for CellVtable<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for CellVtable<P> {}

impl<P: ?Sized> CellVtable<P> {
    /// Creates a new [`CellVtable`] for the occupant type `V`.
    ///
    /// The `cast` function must recover a `P` pointer from a pointer to a
    /// `V` placed at the start of a cell buffer. It is stored verbatim; its
    /// contract is enforced at the call sites of [`CellVtable::cast`].
    pub(super) fn new<V>(cast: unsafe fn(NonNull<u8>) -> NonNull<P>) -> Self {
        Self {
            cast,
            drop_in_place: drop_occupant::<V>,
            type_name: core::any::type_name::<V>(),
        }
    }

    /// Recovers the unsized view `P` of the occupant.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to the start of the buffer in which the occupant `V`
    ///    used to create this [`CellVtable`] was constructed.
    /// 2. The occupant is currently initialized.
    #[inline]
    pub(super) unsafe fn cast(&self, ptr: NonNull<u8>) -> NonNull<P> {
        // SAFETY: We know that `self.cast` recovers a `P` pointer from a
        // pointer to the occupant `V`. Requirements 1 and 2 are guaranteed by
        // the caller.
        unsafe { (self.cast)(ptr) }
    }

    /// Drops the occupant in place.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to the start of the buffer in which the occupant `V`
    ///    used to create this [`CellVtable`] was constructed.
    /// 2. The occupant is currently initialized and is not used in any way
    ///    after this call. In particular, the occupant must not be dropped a
    ///    second time.
    #[inline]
    pub(super) unsafe fn drop_in_place(&self, ptr: NonNull<u8>) {
        // SAFETY: We know that `self.drop_in_place` points to the function
        // `drop_occupant::<V>` below. Its requirements are guaranteed by the
        // caller.
        unsafe { (self.drop_in_place)(ptr) }
    }

    /// Returns the [`core::any::type_name`] of the occupant type that was
    /// used to create this [`CellVtable`].
    #[inline]
    pub(super) fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Drops the occupant `V` stored at the start of a cell buffer.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `ptr` points to a properly aligned, initialized `V`.
/// 2. The `V` is not used in any way after this call.
unsafe fn drop_occupant<V>(ptr: NonNull<u8>) {
    let ptr: NonNull<V> = ptr.cast::<V>();
    // SAFETY: The pointer is aligned and points to an initialized `V` that
    // is never used again, as guaranteed by the caller.
    unsafe { core::ptr::drop_in_place(ptr.as_ptr()) }
}
