//! Integration tests for the extview-internals crate functionality.
//!
//! These exercise the full in-place construction protocol of [`RawCell`]
//! through a realistic unsized view, the way the `extview` crate drives it:
//! write an occupant at the data pointer, record the construction, access the
//! occupant through the view, and verify that the destructor runs exactly
//! once in every lifecycle variant.

use std::{cell::Cell, ptr::NonNull};

use extview_internals::{MAX_ALIGN, RawCell};

/// The unsized view used throughout these tests.
trait Counter {
    fn value(&self) -> u32;
    fn bump(&mut self);
}

/// A counting occupant that also tracks its own destruction.
struct TrackedCounter<'c> {
    count: u32,
    drops: &'c Cell<u32>,
}

impl Counter for TrackedCounter<'_> {
    fn value(&self) -> u32 {
        self.count
    }

    fn bump(&mut self) {
        self.count += 1;
    }
}

impl Drop for TrackedCounter<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Recovers the `dyn Counter` view of a `TrackedCounter` occupant.
unsafe fn cast_tracked<'c>(ptr: NonNull<u8>) -> NonNull<dyn Counter + 'c> {
    let ptr: NonNull<TrackedCounter<'c>> = ptr.cast::<TrackedCounter<'c>>();
    let ptr: *mut (dyn Counter + 'c) = ptr.as_ptr() as _;
    // SAFETY: Casting a non-null pointer preserves non-nullness.
    unsafe { NonNull::new_unchecked(ptr) }
}

/// Runs the full construction protocol for a `TrackedCounter`.
fn emplace<'c, const N: usize>(
    cell: &mut RawCell<dyn Counter + 'c, N>,
    count: u32,
    drops: &'c Cell<u32>,
) {
    assert!(size_of::<TrackedCounter>() <= N);
    assert!(align_of::<TrackedCounter>() <= MAX_ALIGN);
    let ptr = cell.data_ptr().cast::<TrackedCounter<'c>>();
    // SAFETY: The occupant fits (asserted above) and the cell is required to
    // be empty by the callers of this helper.
    unsafe { ptr.write(TrackedCounter { count, drops }) };
    // SAFETY: A fully initialized occupant was just written at the data
    // pointer and `cast_tracked` recovers it.
    unsafe { cell.set_constructed::<TrackedCounter<'c>>(cast_tracked) };
}

#[test]
fn test_protocol_and_view_access() {
    let drops = Cell::new(0);
    let mut cell: RawCell<dyn Counter + '_, 32> = RawCell::new();

    assert!(cell.get().is_none());
    emplace(&mut cell, 7, &drops);

    let view = cell.get().expect("cell should be occupied");
    assert_eq!(view.value(), 7);

    let view = cell.get_mut().expect("cell should be occupied");
    view.bump();
    view.bump();
    assert_eq!(cell.get().unwrap().value(), 9);

    assert_eq!(
        cell.type_name(),
        Some(std::any::type_name::<TrackedCounter>())
    );
    assert_eq!(drops.get(), 0);
}

#[test]
fn test_destructor_on_drop() {
    let drops = Cell::new(0);
    {
        let mut cell: RawCell<dyn Counter + '_, 32> = RawCell::new();
        emplace(&mut cell, 0, &drops);
    }
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_no_destructor_without_construction() {
    let drops = Cell::new(0);
    {
        let _cell: RawCell<dyn Counter + '_, 32> = RawCell::new();
        // Never constructed; the drop counter must stay untouched because no
        // occupant exists to destroy.
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 0);
}

#[test]
fn test_clear_and_reuse() {
    let drops = Cell::new(0);
    let mut cell: RawCell<dyn Counter + '_, 32> = RawCell::new();

    emplace(&mut cell, 1, &drops);
    cell.clear();
    assert_eq!(drops.get(), 1);
    assert!(!cell.is_constructed());

    emplace(&mut cell, 2, &drops);
    assert_eq!(cell.get().unwrap().value(), 2);

    drop(cell);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_occupant_identity() {
    let drops = Cell::new(0);
    let mut cell: RawCell<dyn Counter + '_, 32> = RawCell::new();
    let base = cell.data_ptr().as_ptr() as usize;
    emplace(&mut cell, 3, &drops);

    // The view must refer to the object constructed inside the buffer, not a
    // copy of it anywhere else.
    let view_addr = cell.get().unwrap() as *const dyn Counter as *const u8 as usize;
    assert_eq!(view_addr, base);
}
