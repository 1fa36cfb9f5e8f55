//! Adapters that reshape or forward existing views.
//!
//! Three adapter families exist, mirroring the three ways one view can be
//! answered in terms of another:
//!
//! - [`ExtensionDelegate`]: answers the `T`-view by asking the provider's
//!   `D`-view for it (adapter chaining without duplicated storage).
//! - [`ExtensionOverload`]: presents the `D`-view under tag `T` where the
//!   compatibility is statically known (`D: AsRef<T> + AsMut<T>`); no
//!   runtime check is performed.
//! - [`ExtensionBaseCast`]: the derived-seeking direction — requests the
//!   more specific `D`-view from a provider that only statically offers the
//!   more general base view, with a runtime-checked downcast that fails
//!   loudly on a type mismatch.

mod base_cast;
mod delegate;
mod overload;

pub use self::{
    base_cast::{AsAny, ExtensionBaseCast},
    delegate::ExtensionDelegate,
    overload::ExtensionOverload,
};

pub(crate) use self::base_cast::{downcast_mut, downcast_ref};
