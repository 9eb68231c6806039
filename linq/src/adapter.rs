//! Entry points that lift external data into a [`Seq`].
//!
//! [`from`] is the head of every query chain. It accepts anything
//! implementing [`IntoSeq`]:
//!
//! | Source | Behavior |
//! |--------|----------|
//! | `Vec<T>`, `[T; N]`, `VecDeque<T>`, `Box<[T]>` | elements are moved |
//! | `&Vec<T>`, `&[T]`, `&[T; N]` | elements are cloned in order |
//! | `Seq<T>` | passed through unchanged |
//! | `&Seq<T>` | an independent clone |
//!
//! [`from_raw_parts`] covers a pointer plus an element count.

use std::collections::VecDeque;

use crate::seq::Seq;

/// A data source that can be turned into a [`Seq`].
///
/// Implement this for your own containers to make them usable with [`from`].
pub trait IntoSeq {
    /// Element type of the resulting sequence.
    type Item;

    /// Converts the source into an owned sequence.
    fn into_seq(self) -> Seq<Self::Item>;
}

impl<T> IntoSeq for Vec<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from(self)
    }
}

impl<T: Clone> IntoSeq for &Vec<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from(self.clone())
    }
}

impl<T: Clone> IntoSeq for &[T] {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from(self.to_vec())
    }
}

impl<T, const N: usize> IntoSeq for [T; N] {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from(self)
    }
}

impl<T: Clone, const N: usize> IntoSeq for &[T; N] {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from(self.to_vec())
    }
}

impl<T> IntoSeq for VecDeque<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from(Vec::from(self))
    }
}

impl<T> IntoSeq for Box<[T]> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from(self.into_vec())
    }
}

impl<T> IntoSeq for Seq<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        self
    }
}

impl<T: Clone> IntoSeq for &Seq<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        self.clone()
    }
}

/// Lifts a container, slice, array or sequence into a [`Seq`].
///
/// # Examples
///
/// ```rust
/// use linq::from;
///
/// let nums = vec![1, 2, 3, 4];
/// let odds = from(&nums).filter(|n| n % 2 == 1);
///
/// assert_eq!(odds.to_vec(), vec![1, 3]);
/// assert_eq!(nums.len(), 4);
/// ```
pub fn from<S: IntoSeq>(source: S) -> Seq<S::Item> {
    source.into_seq()
}

/// Copies `len` elements starting at `ptr` into a new [`Seq`].
///
/// The buffer only has to be valid for the duration of the call. When `len`
/// is zero, `ptr` is never read and may be null. Prefer [`from`] with a slice
/// when one is available.
///
/// # Safety
///
/// When `len > 0`, `ptr` must satisfy the requirements of
/// [`std::slice::from_raw_parts`]: it must be non-null, aligned, and point to
/// `len` consecutive initialized values of `T` that are not mutated during
/// the call.
///
/// # Examples
///
/// ```rust
/// let nums = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
///
/// // SAFETY: `nums` holds 10 initialized `i32`s and outlives the call.
/// let seq = unsafe { linq::from_raw_parts(nums.as_ptr(), nums.len()) };
/// assert_eq!(seq.len(), 10);
///
/// // SAFETY: a zero-length read never touches the pointer.
/// let empty = unsafe { linq::from_raw_parts(std::ptr::null::<i32>(), 0) };
/// assert!(empty.is_empty());
/// ```
pub unsafe fn from_raw_parts<T: Clone>(ptr: *const T, len: usize) -> Seq<T> {
    if len == 0 {
        return Seq::new();
    }
    // SAFETY: `len > 0` here, and the caller guarantees `ptr` addresses `len`
    // initialized, unaliased-for-writes values of `T`.
    let items = unsafe { std::slice::from_raw_parts(ptr, len) };
    Seq::from(items.to_vec())
}
