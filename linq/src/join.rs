//! Joins between two sequences.
//!
//! Every join enumerates qualifying `(left, right)` pairs in left-major,
//! right-minor order: the left sequence advances slowest, and pairs that
//! share a left element follow the order of the right sequence.
//!
//! - [`Seq::join`] emits a [`Pair`] per qualifying pair.
//! - [`Seq::merge_join`] emits `merge(left, right)` per qualifying pair.
//! - [`Seq::join_by_key`] and [`Seq::merge_join_by_key`] are equality joins
//!   answered through a hash index over the right side. Their output is
//!   identical to the nested-loop joins with `left_key(l) == right_key(r)`.
//!
//! The nested-loop forms evaluate `on` for every element of the cross
//! product, so they cost `O(|left| * |right|)`.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::seq::Seq;

/// One matched pair produced by [`Seq::join`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pair<L, R> {
    /// Element from the left (outer) sequence.
    pub left: L,
    /// Element from the right (inner) sequence.
    pub right: R,
}

impl<L, R> Pair<L, R> {
    /// Creates a pair.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Splits the pair into a tuple.
    pub fn into_tuple(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Self { left, right }
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_tuple()
    }
}

impl<T> Seq<T> {
    /// Pairs every `l` in `self` with every `r` in `other` for which
    /// `on(l, r)` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linq::seq;
    ///
    /// let orders = seq![(1, "tea"), (2, "cake"), (1, "scone")];
    /// let customers = seq![(1, "Ann"), (2, "Bo")];
    ///
    /// let joined = orders.join(&customers, |o, c| o.0 == c.0);
    /// let names = joined.select(|p| (p.left.1, p.right.1));
    ///
    /// assert_eq!(
    ///     names.to_vec(),
    ///     vec![("tea", "Ann"), ("cake", "Bo"), ("scone", "Ann")]
    /// );
    /// ```
    pub fn join<U, F>(&self, other: &Seq<U>, on: F) -> Seq<Pair<T, U>>
    where
        T: Clone,
        U: Clone,
        F: FnMut(&T, &U) -> bool,
    {
        self.merge_join(
            other,
            |left, right| Pair::new(left.clone(), right.clone()),
            on,
        )
    }

    /// Joins `self` with `other` and builds one `merge(l, r)` per pair for
    /// which `on(l, r)` holds.
    ///
    /// Equivalent to [`join`](Seq::join) followed by
    /// [`select`](Seq::select), without the intermediate pairs.
    pub fn merge_join<U, V, M, F>(&self, other: &Seq<U>, mut merge: M, mut on: F) -> Seq<V>
    where
        M: FnMut(&T, &U) -> V,
        F: FnMut(&T, &U) -> bool,
    {
        let mut merged = Vec::new();
        for left in self {
            for right in other {
                if on(left, right) {
                    merged.push(merge(left, right));
                }
            }
        }

        trace!(
            left = self.len(),
            right = other.len(),
            emitted = merged.len(),
            "merge_join"
        );
        Seq::from_vec(merged)
    }

    /// Equality join through a hash index over `other`.
    ///
    /// Produces exactly what `self.join(other, |l, r| left_key(l) ==
    /// right_key(r))` produces, in the same order, while evaluating each key
    /// selector once per element.
    pub fn join_by_key<U, K, LK, RK>(
        &self,
        other: &Seq<U>,
        left_key: LK,
        right_key: RK,
    ) -> Seq<Pair<T, U>>
    where
        T: Clone,
        U: Clone,
        K: Eq + Hash,
        LK: FnMut(&T) -> K,
        RK: FnMut(&U) -> K,
    {
        self.merge_join_by_key(other, left_key, right_key, |left, right| {
            Pair::new(left.clone(), right.clone())
        })
    }

    /// Equality join through a hash index over `other`, merging each match.
    ///
    /// ```rust
    /// use linq::seq;
    ///
    /// let employees = seq![("Joe", 0), ("Jane", 1), ("Alex", 1)];
    /// let projects = seq![(0, "Financial Inc."), (1, "Contracts R Us")];
    ///
    /// let staffing = employees.merge_join_by_key(
    ///     &projects,
    ///     |e| e.1,
    ///     |p| p.0,
    ///     |e, p| format!("{} -> {}", e.0, p.1),
    /// );
    ///
    /// assert_eq!(staffing[2], "Alex -> Contracts R Us");
    /// ```
    pub fn merge_join_by_key<U, K, V, LK, RK, M>(
        &self,
        other: &Seq<U>,
        mut left_key: LK,
        mut right_key: RK,
        mut merge: M,
    ) -> Seq<V>
    where
        K: Eq + Hash,
        LK: FnMut(&T) -> K,
        RK: FnMut(&U) -> K,
        M: FnMut(&T, &U) -> V,
    {
        let right = other.as_slice();

        // Buckets hold right-side indices in ascending order, which keeps the
        // right-minor ordering of the nested loop.
        let mut buckets: HashMap<K, Vec<usize>> = HashMap::new();
        for (index, item) in right.iter().enumerate() {
            buckets.entry(right_key(item)).or_default().push(index);
        }
        debug!(
            right = right.len(),
            distinct_keys = buckets.len(),
            "merge_join_by_key: built right-side index"
        );

        let mut merged = Vec::new();
        for left in self {
            if let Some(indices) = buckets.get(&left_key(left)) {
                for &index in indices {
                    merged.push(merge(left, &right[index]));
                }
            }
        }

        trace!(left = self.len(), emitted = merged.len(), "merge_join_by_key");
        Seq::from_vec(merged)
    }
}
