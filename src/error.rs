//! Error types for the one runtime-checkable failure in the framework.

use core::any::TypeId;

/// The error returned when a checked base cast finds an object of a
/// different concrete type than the one requested.
///
/// This is raised by [`ExtensionBaseCast`] and by the cast-back methods of
/// [`DispatchSpecialization`]. It is the only runtime failure the framework
/// produces; every other misuse is rejected at compile time. A failed cast
/// never hands out a reinterpreted reference — the caller gets this error
/// and the underlying object stays untouched.
///
/// [`ExtensionBaseCast`]: crate::adapters::ExtensionBaseCast
/// [`DispatchSpecialization`]: crate::dispatch::DispatchSpecialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastError {
    /// Type name of the derived type the caller asked for.
    expected_name: &'static str,
    /// [`TypeId`] of the derived type the caller asked for.
    expected_id: TypeId,
    /// Type name of the concrete type actually present.
    actual_name: &'static str,
    /// [`TypeId`] of the concrete type actually present.
    actual_id: TypeId,
}

impl CastError {
    /// Creates a new error for a failed cast to `D`.
    pub(crate) fn new<D: 'static>(actual_name: &'static str, actual_id: TypeId) -> Self {
        Self {
            expected_name: core::any::type_name::<D>(),
            expected_id: TypeId::of::<D>(),
            actual_name,
            actual_id,
        }
    }

    /// Returns the type name of the requested derived type.
    pub fn expected_type_name(&self) -> &'static str {
        self.expected_name
    }

    /// Returns the [`TypeId`] of the requested derived type.
    pub fn expected_type_id(&self) -> TypeId {
        self.expected_id
    }

    /// Returns the type name of the concrete type actually present.
    pub fn actual_type_name(&self) -> &'static str {
        self.actual_name
    }

    /// Returns the [`TypeId`] of the concrete type actually present.
    pub fn actual_type_id(&self) -> TypeId {
        self.actual_id
    }
}

impl core::fmt::Display for CastError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "type mismatch in checked base cast: expected `{}`, found `{}`",
            self.expected_name, self.actual_name
        )
    }
}

impl core::error::Error for CastError {}
