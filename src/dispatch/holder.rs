//! Inline, allocation-free storage for an erased dispatch member.

use core::ptr::NonNull;

use extview_internals::{MAX_ALIGN, RawCell};

use crate::dispatch::Dispatch;

/// Recovers the erased member view from the start of a holder's buffer.
///
/// # Safety
///
/// `ptr` must point to an initialized `V` for the lifetime of the returned
/// pointer's referent.
unsafe fn unsize_in_cell<'a, V, B, K>(ptr: NonNull<u8>) -> NonNull<dyn Dispatch<B, K> + 'a>
where
    V: Dispatch<B, K> + 'a,
    B: ?Sized + 'a,
    K: 'a,
{
    let ptr: NonNull<V> = ptr.cast::<V>();
    let ptr: *mut (dyn Dispatch<B, K> + 'a) = ptr.as_ptr() as _;
    // SAFETY: Casting a non-null pointer preserves non-nullness.
    unsafe { NonNull::new_unchecked(ptr) }
}

/// Owns at most one dispatch member inline, erased to `dyn Dispatch<B, K>`.
///
/// The member is constructed directly inside an `N`-byte buffer embedded in
/// the holder, so storing and routing a member never touches the heap.
/// [`emplace`] checks at compile time that the concrete member type fits in
/// `N` bytes and respects the buffer alignment of [`MAX_ALIGN`]; an
/// oversized member is a compile error, not a runtime failure.
///
/// The holder owns its occupant: re-emplacing, [`clear`]ing, or dropping
/// the holder runs the occupant's destructor exactly once. A holder that
/// never received a member never runs any destructor.
///
/// # Examples
///
/// ```
/// use extview::{AsAny, DelegateHolder, DispatchDelegate};
///
/// trait Shape: AsAny {
///     fn area(&self) -> f64;
/// }
///
/// struct Circle {
///     radius: f64,
/// }
///
/// impl Shape for Circle {
///     fn area(&self) -> f64 {
///         core::f64::consts::PI * self.radius * self.radius
///     }
/// }
///
/// let mut circle = Circle { radius: 1.0 };
/// let mut holder: DelegateHolder<'_, dyn Shape, u32, 64> = DelegateHolder::new();
/// holder.emplace(DispatchDelegate::new(&mut circle as &mut dyn Shape, 42));
/// assert_eq!(holder.dispatch_type(), Some(&42));
/// ```
///
/// [`emplace`]: DelegateHolder::emplace
/// [`clear`]: DelegateHolder::clear
pub struct DelegateHolder<'a, B: ?Sized, K, const N: usize> {
    /// The erased inline cell holding the current member, if any.
    cell: RawCell<dyn Dispatch<B, K> + 'a, N>,
}

impl<'a, B: ?Sized + 'a, K: 'a, const N: usize> DelegateHolder<'a, B, K, N> {
    /// Creates a new, empty holder.
    #[inline]
    pub const fn new() -> Self {
        Self {
            cell: RawCell::new(),
        }
    }

    /// Returns the number of bytes available for member storage.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the holder currently owns a member.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.cell.is_constructed()
    }

    /// Returns the [`core::any::type_name`] of the current member, if any.
    #[inline]
    pub fn delegate_type_name(&self) -> Option<&'static str> {
        self.cell.type_name()
    }

    /// Moves `delegate` into the holder's buffer, dropping any previous
    /// member first, and returns the erased view of the new occupant.
    ///
    /// The size and alignment of the concrete member type are checked at
    /// compile time against `N` and [`MAX_ALIGN`].
    pub fn emplace<V>(&mut self, delegate: V) -> &mut (dyn Dispatch<B, K> + 'a)
    where
        V: Dispatch<B, K> + 'a,
    {
        const {
            assert!(
                core::mem::size_of::<V>() <= N,
                "dispatch member does not fit in the holder's buffer"
            );
            assert!(
                core::mem::align_of::<V>() <= MAX_ALIGN,
                "dispatch member alignment exceeds the holder's buffer alignment"
            );
        }
        self.cell.clear();
        let ptr = self.cell.data_ptr().cast::<V>();
        // SAFETY: The buffer is large enough and sufficiently aligned for a
        // `V` per the compile-time checks above, and the cell is empty after
        // the clear.
        unsafe { ptr.write(delegate) };
        // SAFETY: A fully initialized `V` was just written at the data
        // pointer, the cell was empty, ownership transfers to the cell, and
        // `unsize_in_cell::<V>` recovers the erased view from the buffer
        // start.
        unsafe { self.cell.set_constructed::<V>(unsize_in_cell::<V, B, K>) };
        match self.cell.get_mut() {
            Some(member) => member,
            // The cell was marked constructed on the previous line.
            None => unreachable!(),
        }
    }

    /// Returns the current member through the erased view, if any.
    #[inline]
    pub fn delegate(&self) -> Option<&(dyn Dispatch<B, K> + 'a)> {
        self.cell.get()
    }

    /// Returns the current member through the erased view mutably, if any.
    #[inline]
    pub fn delegate_mut(&mut self) -> Option<&mut (dyn Dispatch<B, K> + 'a)> {
        self.cell.get_mut()
    }

    /// Returns the discriminator of the current member, if any.
    #[inline]
    pub fn dispatch_type(&self) -> Option<&K> {
        self.delegate().map(Dispatch::dispatch_type)
    }

    /// Drops the current member, if any, returning the holder to its empty
    /// state.
    #[inline]
    pub fn clear(&mut self) {
        self.cell.clear();
    }
}

impl<'a, B: ?Sized + 'a, K: 'a, const N: usize> Default for DelegateHolder<'a, B, K, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized, K, const N: usize> core::fmt::Debug for DelegateHolder<'_, B, K, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DelegateHolder")
            .field("capacity", &N)
            .field("occupant", &self.cell.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::dispatch::DispatchDelegate;

    trait Machine {
        fn label(&self) -> &'static str;
    }

    struct Pump;

    impl Machine for Pump {
        fn label(&self) -> &'static str {
            "pump"
        }
    }

    /// A dispatch member that counts its drops through a shared counter.
    struct CountingMember<'a, 'c> {
        delegate: DispatchDelegate<'a, dyn Machine, u8>,
        drops: &'c Cell<u32>,
    }

    impl Drop for CountingMember<'_, '_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl Dispatch<dyn Machine, u8> for CountingMember<'_, '_> {
        fn dispatch_type(&self) -> &u8 {
            self.delegate.dispatch_type()
        }

        fn base(&self) -> &(dyn Machine + 'static) {
            self.delegate.base()
        }

        fn base_mut(&mut self) -> &mut (dyn Machine + 'static) {
            self.delegate.base_mut()
        }
    }

    #[test]
    fn test_empty_holder() {
        let holder: DelegateHolder<'_, dyn Machine, u8, 64> = DelegateHolder::new();
        assert!(!holder.is_occupied());
        assert!(holder.delegate().is_none());
        assert_eq!(holder.dispatch_type(), None);
        assert_eq!(holder.delegate_type_name(), None);
        assert_eq!(holder.capacity(), 64);
    }

    #[test]
    fn test_emplace_and_access() {
        let mut pump = Pump;
        let mut holder: DelegateHolder<'_, dyn Machine, u8, 64> = DelegateHolder::new();
        let member = holder.emplace(DispatchDelegate::new(&mut pump as &mut dyn Machine, 3));
        assert_eq!(*member.dispatch_type(), 3);
        assert_eq!(member.base().label(), "pump");

        assert!(holder.is_occupied());
        assert_eq!(holder.dispatch_type(), Some(&3));
        assert_eq!(
            holder.delegate_type_name(),
            Some(core::any::type_name::<DispatchDelegate<'_, dyn Machine, u8>>())
        );
    }

    #[test]
    fn test_destructor_on_drop() {
        let drops = Cell::new(0);
        let mut pump = Pump;
        {
            let mut holder: DelegateHolder<'_, dyn Machine, u8, 64> = DelegateHolder::new();
            holder.emplace(CountingMember {
                delegate: DispatchDelegate::new(&mut pump, 1),
                drops: &drops,
            });
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_reemplace_drops_previous_member() {
        let drops = Cell::new(0);
        let mut first = Pump;
        let mut second = Pump;
        let mut holder: DelegateHolder<'_, dyn Machine, u8, 64> = DelegateHolder::new();
        holder.emplace(CountingMember {
            delegate: DispatchDelegate::new(&mut first, 1),
            drops: &drops,
        });
        holder.emplace(CountingMember {
            delegate: DispatchDelegate::new(&mut second, 2),
            drops: &drops,
        });
        assert_eq!(drops.get(), 1);
        assert_eq!(holder.dispatch_type(), Some(&2));
        drop(holder);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_clear_then_drop() {
        let drops = Cell::new(0);
        let mut pump = Pump;
        let mut holder: DelegateHolder<'_, dyn Machine, u8, 64> = DelegateHolder::new();
        holder.emplace(CountingMember {
            delegate: DispatchDelegate::new(&mut pump, 1),
            drops: &drops,
        });
        holder.clear();
        assert_eq!(drops.get(), 1);
        assert!(!holder.is_occupied());
        drop(holder);
        assert_eq!(drops.get(), 1);
    }
}
