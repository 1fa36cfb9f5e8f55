//! Storage strategies backing the capability contracts.
//!
//! All three strategies expose the same logical slot shape and differ only
//! in how the slot is initialized, defaulted, and released:
//!
//! - [`RefSlot`]: borrows an existing value; no empty state is
//!   representable, so there is no default construction.
//! - [`PtrSlot`]: optionally borrows a value; defaults to unbound and uses
//!   the fallible [`TryGetter`]/[`TrySetter`] contracts.
//! - [`ValueSlot`]: owns a moved-in value; default construction exists
//!   exactly when the value type has a default.
//!
//! Reference- and pointer-backed slots never own, drop, or extend the
//! lifetime of their referent.
//!
//! [`TryGetter`]: crate::access::TryGetter
//! [`TrySetter`]: crate::access::TrySetter

mod ptr;
mod ref_;
mod value;

pub use self::{ptr::PtrSlot, ref_::RefSlot, value::ValueSlot};
