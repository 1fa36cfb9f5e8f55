#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`extview`].
//!
//! # Overview
//!
//! This crate contains the low-level, type-erased inline storage that powers
//! the [`extview`] capability-extension library. It provides the foundation
//! for heap-free runtime dispatch: a fixed-capacity byte buffer that can host
//! exactly one in-place-constructed object of a statically unknown concrete
//! type, hand it out through a caller-chosen unsized view, and run its
//! destructor exactly when required.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`extview`] crate, not
//! this one.
//!
//! # Architecture
//!
//! The crate is organized around a single type family:
//!
//! - **[`cell`]**: Inline type-erased storage
//!   - [`RawCell`]: Fixed-capacity buffer plus occupancy bookkeeping
//!   - [`CellVtable`]: Function pointers for type-erased dispatch (occupant
//!     drop and recovery of the unsized view)
//!
//! # Safety Strategy
//!
//! When a concrete type `V` is constructed inside the buffer and then
//! accessed as some unsized view `P`, the function pointers recorded at
//! construction time must match the concrete type actually stored in the
//! buffer. This crate maintains that property through:
//!
//! - **Module-based encapsulation**: the buffer and its occupancy record are
//!   module-private, so the pairing of occupant and vtable cannot be broken
//!   from outside
//! - **A single unsafe entry point**: [`RawCell::set_constructed`] is the
//!   only way to mark the cell occupied, and its contract pins down exactly
//!   what the caller must have done beforehand
//! - **Documented vtable contracts**: each vtable function specifies when it
//!   can be safely called
//!
//! [`extview`]: https://docs.rs/extview/latest/extview/
//! [`CellVtable`]: cell::vtable::CellVtable

mod cell;

pub use cell::RawCell;

/// The strictest occupant alignment supported by [`RawCell`].
///
/// The inline buffer is aligned to this value regardless of its capacity, so
/// any type whose alignment does not exceed it can be constructed in place.
/// Callers must reject types with a stricter alignment before constructing
/// them inside a cell.
pub const MAX_ALIGN: usize = 16;
