//! The sequence container that every query operates on.
//!
//! [`Seq<T>`] is an ordered, finite, index-addressable collection that owns its
//! elements. It is deliberately opaque: it wraps a `Vec<T>` but does not
//! dereference to one, so callers go through the query surface or take an
//! explicit copy with [`Seq::to_vec`].
//!
//! Operators live in sibling modules as further `impl` blocks:
//!
//! - [`query`](crate::query) - select, filter, accessors, reductions
//! - [`order`](crate::order) - in-place ordering
//! - [`join`](crate::join) - pair, merge and key joins
//! - [`group`](crate::group) - grouping by key

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// An ordered, finite sequence of `T` with a fluent query surface.
///
/// Every operator that produces a sequence returns a new, independent `Seq`.
/// The only in-place operator is [`order_by`](Seq::order_by).
///
/// # Examples
///
/// ```rust
/// use linq::{seq, DESCENDING};
///
/// let evens = seq![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
///     .filter(|n| n % 2 == 0)
///     .ordered_by(DESCENDING);
///
/// assert_eq!(evens.to_vec(), vec![10, 8, 6, 4, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seq<T> {
    items: Vec<T>,
}

impl<T> Seq<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a sequence of `len` default-initialized elements.
    ///
    /// ```rust
    /// use linq::Seq;
    ///
    /// let zeros: Seq<u32> = Seq::with_len(3);
    /// assert_eq!(zeros.to_vec(), vec![0, 0, 0]);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        Self { items }
    }

    /// Wraps an already-built vector. Used by operators that size their
    /// output up front.
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Consumes the sequence and returns its storage without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns an independent copy of the elements, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Returns the sequence in reverse index order.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.items.reverse();
        self
    }

    /// Builds a map from `key_selector(e)` to a copy of each element `e`.
    ///
    /// When two elements yield the same key, the later one wins. Key order in
    /// the returned map is unspecified.
    ///
    /// ```rust
    /// use linq::seq;
    ///
    /// let words = seq!["apple", "avocado", "banana"];
    /// let by_initial = words.to_map(|w| w.chars().next());
    ///
    /// assert_eq!(by_initial[&Some('a')], "avocado");
    /// assert_eq!(by_initial[&Some('b')], "banana");
    /// ```
    pub fn to_map<K, F>(&self, key_selector: F) -> HashMap<K, T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
        T: Clone,
    {
        self.to_map_with(key_selector, T::clone)
    }

    /// Builds a map from `key_selector(e)` to `value_selector(e)` for each
    /// element `e`.
    ///
    /// Elements are visited in index order, so on a key collision the entry
    /// of the higher-index element replaces the earlier one.
    pub fn to_map_with<K, V, FK, FV>(
        &self,
        mut key_selector: FK,
        mut value_selector: FV,
    ) -> HashMap<K, V>
    where
        K: Eq + Hash,
        FK: FnMut(&T) -> K,
        FV: FnMut(&T) -> V,
    {
        let mut map = HashMap::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let key = key_selector(item);
            let value = value_selector(item);
            if map.insert(key, value).is_some() {
                trace!(index, "to_map: later element replaced an existing key");
            }
        }
        map
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T> From<Seq<T>> for Vec<T> {
    fn from(seq: Seq<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for Seq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for Seq<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

/// Creates a [`Seq`] from a list of elements, like `vec!`.
///
/// ```rust
/// use linq::seq;
///
/// let nums = seq![1, 2, 3];
/// assert_eq!(nums.len(), 3);
///
/// let blanks = seq![""; 2];
/// assert_eq!(blanks.to_vec(), vec!["", ""]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Seq::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Seq::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Seq::from(::std::vec![$($x),+])
    };
}
