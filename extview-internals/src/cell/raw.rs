//! Type-erased inline storage cell.
//!
//! This module encapsulates the buffer and occupancy record of [`RawCell`],
//! ensuring they are only visible within this module. This visibility
//! restriction guarantees the safety invariant: **whenever a vtable is
//! present, the buffer holds an initialized occupant of the exact type the
//! vtable was created for**.
//!
//! # Safety Invariant
//!
//! Since the vtable can only be installed via [`RawCell::set_constructed`]
//! (whose contract requires that an occupant was just constructed at
//! [`RawCell::data_ptr`]), and since [`RawCell::clear`] removes the vtable
//! and the occupant together, the pairing remains valid throughout the
//! cell's lifetime.
//!
//! The [`Drop`] implementation relies on this invariant to run the
//! occupant's destructor at most once, and only if an occupant was actually
//! constructed.
//!
//! # Type Erasure
//!
//! The concrete occupant type `V` is erased after construction; the cell
//! only remembers how to drop it and how to recover the unsized view `P`
//! chosen by the embedding crate (typically a trait object type).

use core::{marker::PhantomData, mem::MaybeUninit, ptr::NonNull};

use crate::{MAX_ALIGN, cell::vtable::CellVtable};

/// An `N`-byte aligned buffer for in-place construction.
///
/// The alignment is fixed at [`MAX_ALIGN`] regardless of `N`, so occupant
/// types with any alignment up to that bound can be constructed at its start.
#[repr(C, align(16))]
struct CellBuf<const N: usize>(MaybeUninit<[u8; N]>);

/// The buffer alignment must stay in sync with [`MAX_ALIGN`].
const _: () = assert!(core::mem::align_of::<CellBuf<1>>() == MAX_ALIGN);

/// A fixed-capacity inline buffer that may hold exactly one in-place
/// constructed value at a time, accessed through the unsized view `P`.
///
/// A fresh cell is empty. The embedding crate constructs a concrete value
/// `V` directly inside the buffer obtained from [`RawCell::data_ptr`] and
/// then records the construction with [`RawCell::set_constructed`]. From
/// that point on, [`RawCell::get`] and [`RawCell::get_mut`] hand out the
/// occupant through the view `P`, and dropping (or [`clear`]ing) the cell
/// runs the occupant's destructor exactly once.
///
/// A cell that is never marked constructed never runs any destructor.
///
/// [`clear`]: RawCell::clear
pub struct RawCell<P: ?Sized, const N: usize> {
    /// Occupancy record of this cell.
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long
    /// as this struct exists:
    ///
    /// 1. If this is `Some`, the buffer holds an initialized occupant of the
    ///    exact concrete type `V` the vtable was created for, placed at the
    ///    start of the buffer.
    /// 2. If this is `None`, the buffer content is arbitrary and is never
    ///    read.
    vtable: Option<CellVtable<P>>,
    /// The inline storage in which occupants are constructed.
    buf: CellBuf<N>,
    /// Marker tying auto traits and drop checking to the view type, since
    /// the cell logically owns a value of some type implementing it.
    _owns: PhantomData<P>,
}

impl<P: ?Sized, const N: usize> RawCell<P, N> {
    /// Creates a new, empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self {
            vtable: None,
            buf: CellBuf(MaybeUninit::uninit()),
            _owns: PhantomData,
        }
    }

    /// Returns the number of bytes available for in-place construction.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if an occupant has been constructed and not yet
    /// cleared.
    #[inline]
    pub fn is_constructed(&self) -> bool {
        self.vtable.is_some()
    }

    /// Returns the [`core::any::type_name`] of the current occupant, if any.
    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        self.vtable.as_ref().map(CellVtable::type_name)
    }

    /// Exposes the raw storage for in-place construction.
    ///
    /// The returned pointer is valid for writes of up to `N` bytes and is
    /// aligned to [`MAX_ALIGN`]. Writing through it is only sound while the
    /// cell is empty; the embedding crate must construct a complete value at
    /// the start of the buffer and then call [`RawCell::set_constructed`].
    #[inline]
    pub fn data_ptr(&mut self) -> NonNull<u8> {
        NonNull::from(&mut self.buf.0).cast::<u8>()
    }

    /// Records that an occupant of type `V` has been constructed in the
    /// buffer.
    ///
    /// After this call the cell owns the occupant: it hands it out through
    /// [`RawCell::get`]/[`RawCell::get_mut`] and drops it when cleared or
    /// dropped itself.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. A fully initialized `V` was just written at [`RawCell::data_ptr`],
    ///    with `size_of::<V>() <= N` and `align_of::<V>() <= MAX_ALIGN`.
    /// 2. The cell was empty beforehand; marking a cell constructed twice
    ///    without an intervening [`RawCell::clear`] would leak the first
    ///    occupant.
    /// 3. `cast` recovers a `P` pointer to that same `V` when given a
    ///    pointer to the start of the buffer.
    /// 4. Ownership of the `V` is transferred to the cell; the caller must
    ///    not drop or otherwise use it afterwards except through the cell.
    #[inline]
    pub unsafe fn set_constructed<V>(&mut self, cast: unsafe fn(NonNull<u8>) -> NonNull<P>) {
        debug_assert!(
            self.vtable.is_none(),
            "cell marked constructed while already occupied"
        );
        self.vtable = Some(CellVtable::new::<V>(cast));
    }

    /// Returns the occupant through the view `P`, or `None` if nothing has
    /// been constructed yet.
    #[inline]
    pub fn get(&self) -> Option<&P> {
        let vtable = self.vtable.as_ref()?;
        let base = NonNull::from(&self.buf.0).cast::<u8>();
        // SAFETY: A vtable is present, so the buffer holds an initialized
        // occupant of the type the vtable was created for (type invariant 1),
        // and `base` points to the start of that buffer.
        let ptr = unsafe { vtable.cast(base) };
        // SAFETY: The occupant is initialized, properly aligned, and shared
        // access is tied to the shared borrow of `self`.
        Some(unsafe { ptr.as_ref() })
    }

    /// Returns the occupant mutably through the view `P`, or `None` if
    /// nothing has been constructed yet.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut P> {
        let vtable = self.vtable.as_ref()?;
        let base = NonNull::from(&mut self.buf.0).cast::<u8>();
        // SAFETY: A vtable is present, so the buffer holds an initialized
        // occupant of the type the vtable was created for (type invariant 1),
        // and `base` points to the start of that buffer.
        let mut ptr = unsafe { vtable.cast(base) };
        // SAFETY: The occupant is initialized, properly aligned, and unique
        // access is tied to the unique borrow of `self`.
        Some(unsafe { ptr.as_mut() })
    }

    /// Drops the occupant in place, if one has been constructed, and returns
    /// the cell to its empty state.
    ///
    /// Calling this on an empty cell does nothing.
    #[inline]
    pub fn clear(&mut self) {
        if let Some(vtable) = self.vtable.take() {
            let base = NonNull::from(&mut self.buf.0).cast::<u8>();
            // SAFETY: The vtable was present, so the buffer holds an
            // initialized occupant of the matching type. Taking the vtable
            // out first guarantees the destructor cannot run twice, and the
            // occupant is never accessed again.
            unsafe { vtable.drop_in_place(base) }
        }
    }
}

impl<P: ?Sized, const N: usize> Default for RawCell<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized, const N: usize> Drop for RawCell<P, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<P: ?Sized, const N: usize> core::fmt::Debug for RawCell<P, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawCell")
            .field("capacity", &N)
            .field("occupant", &self.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    /// Recovers a `dyn Debug` view of an `i32` occupant.
    unsafe fn cast_i32(ptr: NonNull<u8>) -> NonNull<dyn core::fmt::Debug> {
        let ptr: NonNull<i32> = ptr.cast::<i32>();
        let ptr: *mut dyn core::fmt::Debug = ptr.as_ptr() as *mut dyn core::fmt::Debug;
        // SAFETY: Casting a non-null pointer preserves non-nullness.
        unsafe { NonNull::new_unchecked(ptr) }
    }

    #[test]
    fn test_empty_cell() {
        let cell: RawCell<dyn core::fmt::Debug, 16> = RawCell::new();
        assert!(!cell.is_constructed());
        assert!(cell.get().is_none());
        assert_eq!(cell.type_name(), None);
        assert_eq!(cell.capacity(), 16);
        // Dropping a never-constructed cell must not run any destructor;
        // `dyn Debug` occupants have none here, so this just must not crash.
    }

    #[test]
    fn test_construct_and_read() {
        let mut cell: RawCell<dyn core::fmt::Debug, 16> = RawCell::new();
        let ptr = cell.data_ptr().cast::<i32>();
        // SAFETY: An `i32` fits in 16 bytes with alignment well below
        // `MAX_ALIGN`, and the cell is empty.
        unsafe { ptr.write(42) };
        // SAFETY: A fully initialized `i32` was just written at the data
        // pointer, the cell was empty, and `cast_i32` recovers it.
        unsafe { cell.set_constructed::<i32>(cast_i32) };

        assert!(cell.is_constructed());
        assert_eq!(cell.type_name(), Some(core::any::type_name::<i32>()));

        let occupant = cell.get().unwrap();
        let mut text = [0u8; 8];
        let mut cursor = Writer(&mut text, 0);
        core::fmt::write(&mut cursor, format_args!("{occupant:?}")).unwrap();
        assert_eq!(&text[..2], b"42");
    }

    /// Minimal `fmt::Write` sink over a byte array.
    struct Writer<'a>(&'a mut [u8; 8], usize);

    impl core::fmt::Write for Writer<'_> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            for b in s.bytes() {
                self.0[self.1] = b;
                self.1 += 1;
            }
            Ok(())
        }
    }

    /// A guard that counts its drops through a shared counter.
    struct Guard<'c>(&'c Cell<u32>);

    impl Drop for Guard<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl core::fmt::Debug for Guard<'_> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("Guard")
        }
    }

    /// Recovers a `dyn Debug` view of a `Guard` occupant.
    unsafe fn cast_guard<'c>(ptr: NonNull<u8>) -> NonNull<dyn core::fmt::Debug + 'c> {
        let ptr: NonNull<Guard<'c>> = ptr.cast::<Guard<'c>>();
        let ptr: *mut (dyn core::fmt::Debug + 'c) = ptr.as_ptr() as _;
        // SAFETY: Casting a non-null pointer preserves non-nullness.
        unsafe { NonNull::new_unchecked(ptr) }
    }

    #[test]
    fn test_drop_runs_exactly_once() {
        let drops = Cell::new(0);
        {
            let mut cell: RawCell<dyn core::fmt::Debug + '_, 16> = RawCell::new();
            let ptr = cell.data_ptr().cast::<Guard<'_>>();
            // SAFETY: A `Guard` fits in 16 bytes with pointer alignment, and
            // the cell is empty.
            unsafe { ptr.write(Guard(&drops)) };
            // SAFETY: A fully initialized `Guard` was just written at the
            // data pointer, the cell was empty, and `cast_guard` recovers it.
            unsafe { cell.set_constructed::<Guard<'_>>(cast_guard) };
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_clear_then_drop() {
        let drops = Cell::new(0);
        let mut cell: RawCell<dyn core::fmt::Debug + '_, 16> = RawCell::new();
        let ptr = cell.data_ptr().cast::<Guard<'_>>();
        // SAFETY: A `Guard` fits in 16 bytes with pointer alignment, and the
        // cell is empty.
        unsafe { ptr.write(Guard(&drops)) };
        // SAFETY: A fully initialized `Guard` was just written at the data
        // pointer, the cell was empty, and `cast_guard` recovers it.
        unsafe { cell.set_constructed::<Guard<'_>>(cast_guard) };

        cell.clear();
        assert_eq!(drops.get(), 1);
        assert!(!cell.is_constructed());
        assert!(cell.get().is_none());

        // Dropping the now-empty cell must not run the destructor again.
        drop(cell);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_send_sync() {
        static_assertions::assert_not_impl_any!(
            RawCell<dyn core::fmt::Debug, 8>: Send, Sync
        );
    }
}
