//! Capability traits the checks are written against
//!
//! Checks never name a concrete type. They are written once against one of
//! these capabilities and every type with the capability gets the check:
//!
//! - [`Numeric`] - has a zero and is ordered (sign checks)
//! - [`SizedContainer`] - reports how many elements it holds (emptiness checks)
//! - [`Cursor`] - reports whether a next element is available (one-shot cursors)
//!
//! `Numeric` is sealed and covers the primitive numeric types. The container
//! capabilities are open so callers can plug in their own collections.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::Debug;
use std::iter::Peekable;
use std::rc::Rc;
use std::sync::Arc;

use smallvec::{Array, SmallVec};

// ============================================================================
// Sealed module - prevents external implementations
// ============================================================================

mod sealed {
    pub trait Sealed {}
}

// ============================================================================
// NUMERIC
// ============================================================================

/// A numeric representation that has a zero and is ordered.
///
/// The four sign checks are defined once against this trait. Comparisons use
/// `PartialOrd`, so for floats `-0.0 == 0.0` and `NaN` compares false against
/// zero in every direction.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Numeric: PartialOrd + Copy + Debug + sealed::Sealed {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($zero:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);

// ============================================================================
// SIZED CONTAINER
// ============================================================================

/// Anything that can report how many elements it holds.
///
/// Text counts as a container of bytes here: a string has size zero exactly
/// when it has no characters.
pub trait SizedContainer {
    /// Number of elements currently held.
    fn size(&self) -> usize;

    /// Returns `true` when [`size`](Self::size) is zero.
    fn has_no_elements(&self) -> bool {
        self.size() == 0
    }
}

macro_rules! impl_sized_container {
    ($(impl[$($gen:tt)*] for $ty:ty;)+) => {
        $(
            impl<$($gen)*> SizedContainer for $ty {
                #[inline]
                fn size(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

impl_sized_container! {
    impl[] for str;
    impl[] for String;
    impl[T] for [T];
    impl[T, const N: usize] for [T; N];
    impl[T] for Vec<T>;
    impl[T] for VecDeque<T>;
    impl[T] for LinkedList<T>;
    impl[T] for BinaryHeap<T>;
    impl[T, S] for HashSet<T, S>;
    impl[T] for BTreeSet<T>;
    impl[K, V, S] for HashMap<K, V, S>;
    impl[K, V] for BTreeMap<K, V>;
}

impl<A: Array> SizedContainer for SmallVec<A> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<C: SizedContainer + ?Sized> SizedContainer for &C {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<C: SizedContainer + ?Sized> SizedContainer for &mut C {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<C: SizedContainer + ?Sized> SizedContainer for Box<C> {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<C: SizedContainer + ?Sized> SizedContainer for Rc<C> {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<C: SizedContainer + ?Sized> SizedContainer for Arc<C> {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<C> SizedContainer for Cow<'_, C>
where
    C: SizedContainer + ToOwned + ?Sized,
{
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

// ============================================================================
// CURSOR
// ============================================================================

/// A forward-only cursor that can tell whether another element is available.
///
/// Asking must not lose an element: implementations either look ahead into a
/// buffer (`Peekable`) or inspect what remains without advancing.
pub trait Cursor {
    /// Returns `true` if the next call to advance would yield an element.
    fn has_next(&mut self) -> bool;
}

impl<I: Iterator> Cursor for Peekable<I> {
    fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }
}

impl<T> Cursor for std::slice::Iter<'_, T> {
    fn has_next(&mut self) -> bool {
        !self.as_slice().is_empty()
    }
}

impl<T> Cursor for std::vec::IntoIter<T> {
    fn has_next(&mut self) -> bool {
        !self.as_slice().is_empty()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_of<N: Numeric>() -> N {
        N::ZERO
    }

    #[test]
    fn test_numeric_zero() {
        assert_eq!(zero_of::<i32>(), 0);
        assert_eq!(zero_of::<u64>(), 0);
        assert_eq!(zero_of::<f64>(), 0.0);
        assert!(-0.0_f32 == zero_of::<f32>());
    }

    #[test]
    fn test_sizes() {
        assert_eq!("héllo".size(), 6);
        assert_eq!(vec![1, 2, 3].size(), 3);
        assert_eq!([0u8; 4].size(), 4);
        assert_eq!(HashMap::<u8, u8>::new().size(), 0);
        assert_eq!(Cow::Borrowed("ab").size(), 2);
        assert_eq!(Arc::<[i64]>::from(vec![1, 2]).size(), 2);
        assert!(String::new().has_no_elements());
    }

    #[test]
    fn test_smallvec_size() {
        let v: SmallVec<[u32; 4]> = smallvec::smallvec![1, 2];
        assert_eq!(v.size(), 2);
    }

    #[test]
    fn test_peekable_does_not_consume() {
        let mut cursor = [1, 2].into_iter().peekable();
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Some(1));
    }

    #[test]
    fn test_slice_iter_cursor() {
        let data = [7];
        let mut iter = data.iter();
        assert!(iter.has_next());
        iter.next();
        assert!(!iter.has_next());
    }
}
