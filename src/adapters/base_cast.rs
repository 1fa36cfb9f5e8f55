//! Derived-seeking checked cast adapter.
//!
//! This module holds the runtime-checked half of the casting story: given a
//! provider that statically offers only a general base view, recover the
//! more specific derived view, validating at runtime that the underlying
//! object really is of the requested concrete type. A mismatch surfaces as
//! a [`CastError`]; it never degrades into a reinterpreted reference.

use core::any::Any;
use core::marker::PhantomData;

use crate::{
    access::{Getter, Setter},
    error::CastError,
    tag::Tag,
};

/// Object-safe bridge from a base view to [`dyn Any`].
///
/// A checked downcast needs access to the concrete type behind a base view.
/// Concrete `'static` types get this trait for free through the blanket
/// impl; trait-object base types opt in by listing `AsAny` as a supertrait:
///
/// ```
/// use extview::AsAny;
///
/// trait Shape: AsAny {
///     fn area(&self) -> f64;
/// }
/// ```
///
/// With that bound in place, `dyn Shape` satisfies `AsAny` and can serve as
/// the base type of an [`ExtensionBaseCast`] or a dispatch family.
///
/// [`dyn Any`]: core::any::Any
pub trait AsAny: Any {
    /// Returns the concrete object as [`dyn Any`].
    ///
    /// [`dyn Any`]: core::any::Any
    fn as_any(&self) -> &dyn Any;

    /// Returns the concrete object as [`dyn Any`] mutably.
    ///
    /// [`dyn Any`]: core::any::Any
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the [`core::any::type_name`] of the concrete object.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// Performs the checked downcast of a base view to the derived type `D`.
pub(crate) fn downcast_ref<B, D>(base: &B) -> Result<&D, CastError>
where
    B: AsAny + ?Sized,
    D: Any,
{
    let actual_name = base.type_name();
    let actual_id = base.as_any().type_id();
    base.as_any()
        .downcast_ref::<D>()
        .ok_or_else(|| CastError::new::<D>(actual_name, actual_id))
}

/// Performs the checked downcast of a mutable base view to the derived type
/// `D`.
pub(crate) fn downcast_mut<B, D>(base: &mut B) -> Result<&mut D, CastError>
where
    B: AsAny + ?Sized,
    D: Any,
{
    let actual_name = AsAny::type_name(&*base);
    let actual_id = AsAny::as_any(&*base).type_id();
    base.as_any_mut()
        .downcast_mut::<D>()
        .ok_or_else(move || CastError::new::<D>(actual_name, actual_id))
}

/// Requests the more specific `D`-view from a provider that statically
/// offers only the base view `B`, with a runtime type check.
///
/// The read path performs a checked downcast: [`get`] and [`get_mut`]
/// return a [`CastError`] when the object behind the base view is not
/// actually a `D`. Because the accessors are fallible, this adapter
/// deliberately does not implement [`Getter<D>`]; the mismatch must stay
/// visible in the signature.
///
/// The write path narrows `D` back to the base: [`set`] converts the value
/// with `D: Into<B>` and writes it through the provider's base setter. That
/// base setter stays private inside the adapter — the `D`-facing surface
/// never re-exposes it, so callers cannot write through the base shape and
/// bypass derived invariants.
///
/// [`get`]: ExtensionBaseCast::get
/// [`get_mut`]: ExtensionBaseCast::get_mut
/// [`set`]: ExtensionBaseCast::set
pub struct ExtensionBaseCast<P, B: ?Sized, D> {
    /// The provider whose base view is downcast.
    provider: P,
    /// Marker for the base-to-derived direction of this adapter.
    _cast: PhantomData<(fn() -> Tag<B>, fn() -> Tag<D>)>,
}

impl<P, B: ?Sized, D> ExtensionBaseCast<P, B, D> {
    /// Creates a base-cast adapter over `provider`'s `B`-view.
    #[inline]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _cast: PhantomData,
        }
    }

    /// Consumes the adapter and returns the provider.
    #[inline]
    pub fn into_provider(self) -> P {
        self.provider
    }
}

impl<P, B, D> ExtensionBaseCast<P, B, D>
where
    P: Getter<B>,
    B: AsAny + ?Sized,
    D: Any,
{
    /// Returns the `D`-view, or a [`CastError`] if the underlying object is
    /// not a `D`.
    pub fn get(&self, _tag: Tag<D>) -> Result<&D, CastError> {
        downcast_ref(self.provider.get(Tag::new()))
    }

    /// Returns the `D`-view mutably, or a [`CastError`] if the underlying
    /// object is not a `D`.
    pub fn get_mut(&mut self, _tag: Tag<D>) -> Result<&mut D, CastError> {
        downcast_mut(self.provider.get_mut(Tag::new()))
    }
}

impl<P, B, D> ExtensionBaseCast<P, B, D>
where
    P: Setter<B>,
    D: Into<B>,
{
    /// Overwrites the base slot with `value` narrowed to `B`.
    ///
    /// Only available when the base is a sized type the derived value can
    /// be converted into; for trait-object bases the write path does not
    /// exist.
    pub fn set(&mut self, _tag: Tag<D>, value: D) {
        self.provider.set(Tag::new(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::*;
    use crate::Extension;

    trait Animal: AsAny {
        fn legs(&self) -> u32;
    }

    #[derive(Debug)]
    struct Spider;
    struct Snake;

    impl Animal for Spider {
        fn legs(&self) -> u32 {
            8
        }
    }

    impl Animal for Snake {
        fn legs(&self) -> u32 {
            0
        }
    }

    #[test]
    fn test_successful_downcast() {
        let mut spider = Spider;
        let extension: Extension<'_, dyn Animal> = Extension::new(&mut spider);
        let cast: ExtensionBaseCast<_, dyn Animal, Spider> = ExtensionBaseCast::new(extension);
        let derived = cast.get(Tag::new()).expect("spider should downcast");
        assert_eq!(derived.legs(), 8);
    }

    #[test]
    fn test_mismatched_downcast_fails_loudly() {
        let mut snake = Snake;
        let extension: Extension<'_, dyn Animal> = Extension::new(&mut snake);
        let cast: ExtensionBaseCast<_, dyn Animal, Spider> = ExtensionBaseCast::new(extension);
        let error = cast.get(Tag::new()).expect_err("snake is not a spider");
        assert_eq!(error.expected_type_id(), TypeId::of::<Spider>());
        assert_eq!(error.actual_type_id(), TypeId::of::<Snake>());
        assert!(error.actual_type_name().ends_with("Snake"));
    }

    #[test]
    fn test_identity_preserved_through_cast() {
        let mut spider = Spider;
        let spider_addr = &raw const spider as usize;
        let extension: Extension<'_, dyn Animal> = Extension::new(&mut spider);
        let cast: ExtensionBaseCast<_, dyn Animal, Spider> = ExtensionBaseCast::new(extension);
        let derived = cast.get(Tag::new()).unwrap();
        assert_eq!(&raw const *derived as usize, spider_addr);
    }

    #[test]
    fn test_set_narrows_to_base() {
        #[derive(Clone, Copy, PartialEq, Debug)]
        struct Base(u32);
        struct Derived(u32);

        impl From<Derived> for Base {
            fn from(derived: Derived) -> Self {
                Base(derived.0)
            }
        }

        let mut slot = Base(0);
        {
            let extension = Extension::new(&mut slot);
            let mut cast: ExtensionBaseCast<_, Base, Derived> = ExtensionBaseCast::new(extension);
            cast.set(Tag::new(), Derived(77));
        }
        assert_eq!(slot, Base(77));
    }
}
