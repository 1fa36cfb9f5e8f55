//! Same-level reinterpretation adapter.

use core::marker::PhantomData;

use crate::{access::Getter, tag::Tag};

/// Presents the provider's `D`-view under the tag `T`.
///
/// This is the statically-checked reinterpretation direction: it is only
/// available when `D` declares itself compatible with `T` through
/// `AsRef<T>`/`AsMut<T>`, so no runtime check is performed and none is
/// needed. Like its down-casting sibling [`ExtensionBaseCast`], the adapter
/// is read-only on the reinterpreted tag; writes must go through the
/// provider's own contracts.
///
/// [`ExtensionBaseCast`]: crate::adapters::ExtensionBaseCast
///
/// # Examples
///
/// ```
/// use extview::{Extension, ExtensionOverload, Getter, Tag};
///
/// struct Celsius(f64);
///
/// impl AsRef<f64> for Celsius {
///     fn as_ref(&self) -> &f64 {
///         &self.0
///     }
/// }
/// impl AsMut<f64> for Celsius {
///     fn as_mut(&mut self) -> &mut f64 {
///         &mut self.0
///     }
/// }
///
/// let mut reading = Celsius(21.5);
/// let overload: ExtensionOverload<_, Celsius, f64> =
///     ExtensionOverload::new(Extension::new(&mut reading));
/// assert_eq!(*overload.get(Tag::new()), 21.5);
/// ```
pub struct ExtensionOverload<P, D: ?Sized, T: ?Sized> {
    /// The provider whose `D`-view is reinterpreted.
    provider: P,
    /// Marker for the reinterpretation this adapter performs.
    _cast: PhantomData<(fn() -> Tag<D>, fn() -> Tag<T>)>,
}

impl<P, D: ?Sized, T: ?Sized> ExtensionOverload<P, D, T> {
    /// Creates an overload over `provider`'s `D`-view.
    #[inline]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _cast: PhantomData,
        }
    }

    /// Consumes the overload and returns the provider.
    #[inline]
    pub fn into_provider(self) -> P {
        self.provider
    }
}

impl<P, D, T> Getter<T> for ExtensionOverload<P, D, T>
where
    P: Getter<D>,
    D: AsRef<T> + AsMut<T> + ?Sized,
    T: ?Sized,
{
    #[inline]
    fn get(&self, _tag: Tag<T>) -> &T {
        self.provider.get(Tag::new()).as_ref()
    }

    #[inline]
    fn get_mut(&mut self, _tag: Tag<T>) -> &mut T {
        self.provider.get_mut(Tag::new()).as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Extension;

    struct Wrapper([u8; 4]);

    impl AsRef<[u8]> for Wrapper {
        fn as_ref(&self) -> &[u8] {
            &self.0
        }
    }

    impl AsMut<[u8]> for Wrapper {
        fn as_mut(&mut self) -> &mut [u8] {
            &mut self.0
        }
    }

    #[test]
    fn test_reinterpreted_view() {
        let mut wrapper = Wrapper([1, 2, 3, 4]);
        let mut overload: ExtensionOverload<_, Wrapper, [u8]> =
            ExtensionOverload::new(Extension::new(&mut wrapper));
        assert_eq!(overload.get(Tag::<[u8]>::new()), &[1, 2, 3, 4][..]);
        overload.get_mut(Tag::<[u8]>::new())[0] = 9;
        assert_eq!(wrapper.0, [9, 2, 3, 4]);
    }

    #[test]
    fn test_mutation_via_provider_visible_in_overload() {
        let mut wrapper = Wrapper([0; 4]);
        let overload: ExtensionOverload<_, Wrapper, [u8]> =
            ExtensionOverload::new(Extension::new(&mut wrapper));
        overload.into_provider().get_mut(Tag::new()).0[3] = 7;
        assert_eq!(wrapper.0[3], 7);
    }
}
