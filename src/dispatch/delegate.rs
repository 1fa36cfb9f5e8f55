//! Dispatch members: base-view delegates and typed specializations.

use core::any::Any;
use core::marker::PhantomData;

use crate::{
    access::Getter,
    adapters::{AsAny, downcast_mut, downcast_ref},
    error::CastError,
    extension::Extension,
    tag::Tag,
};

/// A member of a dispatch family with base view `B`, discriminated by `K`.
///
/// This trait is dyn-compatible: holders and routing code handle members as
/// `dyn Dispatch<B, K>` without knowing the concrete delegate type. The
/// discriminator identifies the member within its family; what the values
/// mean is up to the embedding code.
pub trait Dispatch<B: ?Sized, K> {
    /// Returns the discriminator of this member.
    fn dispatch_type(&self) -> &K;

    /// Returns the base view of the delegated object.
    fn base(&self) -> &B;

    /// Returns the base view of the delegated object mutably.
    fn base_mut(&mut self) -> &mut B;
}

/// A dispatch member exposing an object through its base view only.
///
/// Pairs an [`Extension`] of the base with the discriminator value. Use
/// [`DispatchSpecialization`] instead when the concrete derived type must
/// be recoverable on the receiving side.
pub struct DispatchDelegate<'a, B: ?Sized, K> {
    /// The base view of the delegated object.
    extension: Extension<'a, B>,
    /// Discriminator identifying this member within its family.
    kind: K,
}

impl<'a, B: ?Sized, K> DispatchDelegate<'a, B, K> {
    /// Creates a member delegating `base` under the discriminator `kind`.
    #[inline]
    pub fn new(base: &'a mut B, kind: K) -> Self {
        Self {
            extension: Extension::new(base),
            kind,
        }
    }
}

impl<B: ?Sized, K> Dispatch<B, K> for DispatchDelegate<'_, B, K> {
    #[inline]
    fn dispatch_type(&self) -> &K {
        &self.kind
    }

    #[inline]
    fn base(&self) -> &B {
        self.extension.get(Tag::new())
    }

    #[inline]
    fn base_mut(&mut self) -> &mut B {
        self.extension.get_mut(Tag::new())
    }
}

impl<B: ?Sized, K> Getter<B> for DispatchDelegate<'_, B, K> {
    #[inline]
    fn get(&self, tag: Tag<B>) -> &B {
        self.extension.get(tag)
    }

    #[inline]
    fn get_mut(&mut self, tag: Tag<B>) -> &mut B {
        self.extension.get_mut(tag)
    }
}

impl<B: ?Sized + core::fmt::Debug, K: core::fmt::Debug> core::fmt::Debug
    for DispatchDelegate<'_, B, K>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DispatchDelegate")
            .field("kind", &self.kind)
            .field("base", &self.extension)
            .finish()
    }
}

/// A dispatch member that remembers the concrete derived type `D` behind
/// its base view.
///
/// Through `dyn Dispatch<B, K>` it behaves exactly like a
/// [`DispatchDelegate`]; code that knows (or has verified via the
/// discriminator) the concrete member type additionally gets [`derived`]
/// and [`derived_mut`], which perform a checked downcast from the base
/// view. A specialization whose object is not actually a `D` yields a
/// [`CastError`] rather than a misinterpreted reference.
///
/// [`derived`]: DispatchSpecialization::derived
/// [`derived_mut`]: DispatchSpecialization::derived_mut
pub struct DispatchSpecialization<'a, D, B: ?Sized, K> {
    /// The untyped member this specialization wraps.
    delegate: DispatchDelegate<'a, B, K>,
    /// Marker for the derived type recoverable from the base view.
    _derived: PhantomData<fn() -> D>,
}

impl<'a, D, B: ?Sized, K> DispatchSpecialization<'a, D, B, K> {
    /// Creates a specialized member delegating `base` under `kind`.
    #[inline]
    pub fn new(base: &'a mut B, kind: K) -> Self {
        Self {
            delegate: DispatchDelegate::new(base, kind),
            _derived: PhantomData,
        }
    }
}

impl<D, B, K> DispatchSpecialization<'_, D, B, K>
where
    B: AsAny + ?Sized,
    D: Any,
{
    /// Returns the derived view, or a [`CastError`] if the delegated object
    /// is not a `D`.
    pub fn derived(&self) -> Result<&D, CastError> {
        downcast_ref(self.delegate.base())
    }

    /// Returns the derived view mutably, or a [`CastError`] if the
    /// delegated object is not a `D`.
    pub fn derived_mut(&mut self) -> Result<&mut D, CastError> {
        downcast_mut(self.delegate.base_mut())
    }
}

impl<D, B: ?Sized, K> Dispatch<B, K> for DispatchSpecialization<'_, D, B, K> {
    #[inline]
    fn dispatch_type(&self) -> &K {
        self.delegate.dispatch_type()
    }

    #[inline]
    fn base(&self) -> &B {
        self.delegate.base()
    }

    #[inline]
    fn base_mut(&mut self) -> &mut B {
        self.delegate.base_mut()
    }
}

impl<D, B: ?Sized, K> Getter<B> for DispatchSpecialization<'_, D, B, K> {
    #[inline]
    fn get(&self, tag: Tag<B>) -> &B {
        self.delegate.get(tag)
    }

    #[inline]
    fn get_mut(&mut self, tag: Tag<B>) -> &mut B {
        self.delegate.get_mut(tag)
    }
}

impl<D, B: ?Sized + core::fmt::Debug, K: core::fmt::Debug> core::fmt::Debug
    for DispatchSpecialization<'_, D, B, K>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DispatchSpecialization")
            .field("delegate", &self.delegate)
            .finish()
    }
}
