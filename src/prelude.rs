//! Commonly used items for convenient importing.
//!
//! The prelude module re-exports the most frequently used types, traits, and
//! macros from the extview library. This allows you to import everything you
//! need with a single use statement.
//!
//! # Usage
//!
//! ```rust
//! use extview::prelude::*;
//!
//! struct Player {
//!     health: u32,
//! }
//!
//! impl_views! {
//!     Player {
//!         health: u32,
//!     }
//! }
//!
//! let mut player = Player { health: 100 };
//! player.set(Tag::new(), 80u32);
//! assert_eq!(*player.get(Tag::new()), 80u32);
//! ```
//!
//! # What's Included
//!
//! This prelude includes:
//!
//! - **[`Extension`]**: The reference-backed typed view
//! - **[`Getter`]**, **[`Setter`]**, **[`GetterSetter`]**: The access
//!   capability traits
//! - **[`TryGetter`]**, **[`TrySetter`]**: Their fallible counterparts for
//!   storage that may be unbound
//! - **[`Tag`]**: The type token selecting a view at a call site
//! - **[`AsAny`]**: The supertrait that makes base views downcastable
//! - **[`impl_views!`]**: Macro deriving view capabilities from struct
//!   fields
//! - **[`Any`]**: Re-exported from `core::any` for dynamic typing
//!
//! # When to Use the Prelude
//!
//! Use the prelude when composing and consuming views without writing
//! multiple import statements. The adapter and dispatch types are
//! deliberately not included; import them from [`adapters`] and [`dispatch`]
//! where they are used.
//!
//! [`impl_views!`]: crate::impl_views
//! [`adapters`]: crate::adapters
//! [`dispatch`]: crate::dispatch

pub use core::any::Any;

pub use crate::{
    Extension, Tag,
    access::{Getter, GetterSetter, Setter, TryGetter, TrySetter},
    adapters::AsAny,
    impl_views,
};
