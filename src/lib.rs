#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A capability-extension framework for composing typed views of objects.
//!
//! ## Overview
//!
//! This crate provides a structured way to hand out *views* of an object:
//! typed windows through which a caller reads or writes one facet of a
//! larger whole. Views are described by capability traits, selected at the
//! call site with a zero-sized type token, and composed through adapters
//! that forward, reinterpret, or downcast without heap allocation.
//!
//! Unlike a trait-object-per-facet design, views here compose statically:
//! asking a provider for a view it was never built to expose is a compile
//! error, not a runtime failure. The only operations that can fail at
//! runtime are the explicitly checked downcasts, and those return a
//! [`CastError`] instead of panicking or reinterpreting memory.
//!
//! ## Quick Example
//!
//! ```
//! use extview::prelude::*;
//!
//! let mut value = 5;
//! {
//!     let mut extension = Extension::new(&mut value);
//!     extension.set(Tag::new(), 10);
//!     assert_eq!(*extension.get(Tag::new()), 10);
//! }
//! assert_eq!(value, 10);
//! ```
//!
//! ## Core Concepts
//!
//! The building blocks layer on top of each other:
//!
//! - **Access traits** ([`Getter`], [`Setter`], [`TryGetter`],
//!   [`TrySetter`]) are the capability vocabulary. A provider implements
//!   `Getter<T>` for each view `T` it exposes; the [`Tag<T>`] argument
//!   selects the view when a provider exposes several.
//! - **Storage slots** ([`storage`]) supply the three backing strategies
//!   behind a view: a live reference, a rebindable pointer, or an owned
//!   value.
//! - **[`Extension`]** is the canonical reference-backed view and the unit
//!   everything else composes with.
//! - **Adapters** ([`adapters`]) derive new views from existing providers:
//!   [`ExtensionDelegate`] forwards a view through an intermediate view,
//!   [`ExtensionOverload`] reinterprets a view statically, and
//!   [`ExtensionBaseCast`] recovers a derived view from a base view with a
//!   runtime check.
//! - **Dispatch** ([`dispatch`]) groups views sharing a base into a family
//!   discriminated by a user-chosen type, erasable to
//!   [`dyn Dispatch`](Dispatch) and storable inline in a
//!   [`DelegateHolder`] whose buffer capacity is checked at compile time.
//!
//! For the unsafe inline-storage core, see the [`extview-internals`] crate.
//!
//! [`extview-internals`]: extview_internals
//!
//! ## Project Goals
//!
//! - **Allocation-free**: No view, adapter, or holder in this crate touches
//!   the heap; the whole library is `no_std` without `alloc`.
//! - **Compile-time composition**: Which views a provider exposes is part
//!   of its type. Missing capabilities are compile errors.
//! - **Honest failure**: The checked casts are the only fallible surface,
//!   and they fail with an inspectable [`CastError`] naming both types.
//! - **Borrow-respecting**: Shared borrows of a provider grant read access
//!   only; writes require the unique borrow. No interior mutability is
//!   smuggled in.
//! - **Move-safe erasure**: A [`DelegateHolder`] can be moved freely; the
//!   erased occupant is re-located from the buffer address on every access
//!   rather than through a stored self-reference.

#[macro_use]
mod macros;

pub mod adapters;
pub mod dispatch;
pub mod prelude;
pub mod storage;

mod access;
mod error;
mod extension;
mod tag;

pub use self::{
    access::{Getter, GetterSetter, Setter, TryGetter, TrySetter},
    adapters::{AsAny, ExtensionBaseCast, ExtensionDelegate, ExtensionOverload},
    dispatch::{DelegateHolder, Dispatch, DispatchDelegate, DispatchSpecialization},
    error::CastError,
    extension::Extension,
    tag::Tag,
};
