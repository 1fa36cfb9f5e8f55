/// Macro to expose struct fields as typed views.
///
/// For each listed `field: Type` pair, this generates [`Getter`] and
/// [`Setter`] impls projecting that field, turning the struct into an
/// extension provider without hand-written forwarding. Each view type can
/// appear at most once per provider; two fields of the same type would
/// produce conflicting impls, and the compiler will say so.
///
/// [`Getter`]: crate::Getter
/// [`Setter`]: crate::Setter
///
/// # Examples
///
/// ```
/// use extview::{Getter, Setter, Tag, impl_views};
///
/// struct Probe {
///     id: u32,
///     reading: f64,
/// }
///
/// impl_views! {
///     Probe {
///         id: u32,
///         reading: f64,
///     }
/// }
///
/// let mut probe = Probe { id: 7, reading: 0.5 };
/// probe.set(Tag::new(), 1.25f64);
/// assert_eq!(*probe.get(Tag::<u32>::new()), 7);
/// assert_eq!(*probe.get(Tag::<f64>::new()), 1.25);
/// ```
#[macro_export]
macro_rules! impl_views {
    ($owner:ty { $($field:ident: $view:ty),+ $(,)? }) => {
        $(
            impl $crate::Getter<$view> for $owner {
                fn get(&self, _tag: $crate::Tag<$view>) -> &$view {
                    &self.$field
                }

                fn get_mut(&mut self, _tag: $crate::Tag<$view>) -> &mut $view {
                    &mut self.$field
                }
            }

            impl $crate::Setter<$view> for $owner {
                fn set(&mut self, _tag: $crate::Tag<$view>, value: $view) {
                    self.$field = value;
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use crate::{Getter, Setter, Tag};

    struct Pair {
        left: u8,
        right: i64,
    }

    impl_views! {
        Pair {
            left: u8,
            right: i64,
        }
    }

    #[test]
    fn test_generated_views() {
        let mut pair = Pair { left: 1, right: -1 };
        assert_eq!(*pair.get(Tag::<u8>::new()), 1);
        pair.set(Tag::new(), -5i64);
        assert_eq!(*pair.get(Tag::<i64>::new()), -5);
        assert_eq!(pair.left, 1);
        assert_eq!(pair.right, -5);
    }
}
