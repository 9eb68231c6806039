//! Core query operators: projection, filtering, element access and reductions.
//!
//! All operators are eager. Each one walks the sequence in index order,
//! calls the supplied closure exactly as often as documented, and returns
//! either a new [`Seq`] or a scalar. Closures may capture their environment.
//!
//! # Failure model
//!
//! The accessors ([`Seq::first`], [`Seq::last`] and their `_where` forms)
//! report a missing element as [`QueryError`] through the crate
//! [`Result`]. The `_or_default` forms turn exactly those errors into the
//! caller's default.
//!
//! Nothing else is caught. A panic in a selector or predicate unwinds through
//! the operator untouched, and the `try_*` operators hand the closure's own
//! error back unchanged.
//!
//! # Example
//!
//! ```rust
//! use linq::{from, QueryError, LinqError};
//!
//! let nums = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//!
//! assert_eq!(from(&nums).first_or_default(0, |n| *n == 11), 0);
//! assert_eq!(from(&nums).first_or_default(0, |n| *n > 5), 6);
//! assert_eq!(
//!     from(&nums).last_where(|n| *n > 10),
//!     Err(LinqError::Query(QueryError::NoMatch))
//! );
//! ```

use std::iter::Sum;

use crate::error::{QueryError, Result};
use crate::seq::Seq;

impl<T> Seq<T> {
    /// Projects every element through `selector`.
    ///
    /// The result has the same length as `self` and its `i`-th element is
    /// `selector(&self[i])`. The selector runs once per element, in index
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linq::seq;
    ///
    /// let labels = seq![2, 4, 6].select(|n| format!("#{n}"));
    /// assert_eq!(labels.to_vec(), vec!["#2", "#4", "#6"]);
    /// ```
    pub fn select<U, F>(&self, mut selector: F) -> Seq<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut out = Vec::with_capacity(self.len());
        for item in self {
            out.push(selector(item));
        }
        Seq::from_vec(out)
    }

    /// Fallible form of [`select`](Seq::select).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `selector`, unchanged. Elements
    /// after the failing one are not visited.
    pub fn try_select<U, E, F>(&self, mut selector: F) -> std::result::Result<Seq<U>, E>
    where
        F: FnMut(&T) -> std::result::Result<U, E>,
    {
        let mut out = Vec::with_capacity(self.len());
        for item in self {
            out.push(selector(item)?);
        }
        Ok(Seq::from_vec(out))
    }

    /// Keeps the elements for which `condition` holds, in their original
    /// relative order.
    ///
    /// This is the `where` operator; `where` is reserved in Rust. The
    /// condition runs once per element in index order. Survivors are
    /// recorded by index first, so the result is allocated at its exact
    /// final length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linq::seq;
    ///
    /// let evens = seq![1, 2, 3, 4, 5].filter(|n| n % 2 == 0);
    /// assert_eq!(evens.to_vec(), vec![2, 4]);
    /// ```
    #[doc(alias = "where")]
    pub fn filter<F>(&self, mut condition: F) -> Seq<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut keep = Vec::new();
        for (index, item) in self.iter().enumerate() {
            if condition(item) {
                keep.push(index);
            }
        }
        self.gather(&keep)
    }

    /// Fallible form of [`filter`](Seq::filter).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `condition`, unchanged.
    pub fn try_filter<E, F>(&self, mut condition: F) -> std::result::Result<Seq<T>, E>
    where
        T: Clone,
        F: FnMut(&T) -> std::result::Result<bool, E>,
    {
        let mut keep = Vec::new();
        for (index, item) in self.iter().enumerate() {
            if condition(item)? {
                keep.push(index);
            }
        }
        Ok(self.gather(&keep))
    }

    /// Copies the elements at the given ascending indices into a new sequence.
    fn gather(&self, keep: &[usize]) -> Seq<T>
    where
        T: Clone,
    {
        let items = self.as_slice();
        let mut out = Vec::with_capacity(keep.len());
        out.extend(keep.iter().map(|&index| items[index].clone()));
        Seq::from_vec(out)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if the sequence is empty.
    pub fn first(&self) -> Result<&T> {
        self.get(0).ok_or_else(|| QueryError::EmptySequence.into())
    }

    /// Returns the first element, in index order, that satisfies `condition`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoMatch`] if no element qualifies, including
    /// when the sequence is empty.
    pub fn first_where<F>(&self, mut condition: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .find(|&item| condition(item))
            .ok_or_else(|| QueryError::NoMatch.into())
    }

    /// Like [`first_where`](Seq::first_where), but returns `default` when no
    /// element qualifies.
    pub fn first_or_default<F>(&self, default: T, condition: F) -> T
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        or_default(self.first_where(condition), default)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if the sequence is empty.
    pub fn last(&self) -> Result<&T> {
        self.as_slice()
            .last()
            .ok_or_else(|| QueryError::EmptySequence.into())
    }

    /// Returns the last element that satisfies `condition`.
    ///
    /// Scans from the end and stops at the first hit, so `condition` is not
    /// called for elements before the returned one.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoMatch`] if no element qualifies.
    pub fn last_where<F>(&self, mut condition: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .rev()
            .find(|&item| condition(item))
            .ok_or_else(|| QueryError::NoMatch.into())
    }

    /// Like [`last_where`](Seq::last_where), but returns `default` when no
    /// element qualifies.
    pub fn last_or_default<F>(&self, default: T, condition: F) -> T
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        or_default(self.last_where(condition), default)
    }

    /// Returns `true` if the sequence has at least one element.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if some element satisfies `condition`. Stops at the
    /// first hit.
    pub fn any_where<F>(&self, condition: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(condition)
    }

    /// Returns `true` if every element satisfies `condition`. An empty
    /// sequence trivially does.
    pub fn all<F>(&self, condition: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(condition)
    }

    /// Counts the elements that satisfy `condition`.
    pub fn count_where<F>(&self, mut condition: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|&item| condition(item)).count()
    }

    /// Sums `project(e)` over all elements in index order.
    ///
    /// An empty sequence sums to the additive identity of `N`.
    ///
    /// ```rust
    /// use linq::seq;
    ///
    /// let prices = seq![("tea", 3), ("cake", 5)];
    /// assert_eq!(prices.sum(|(_, p)| *p), 8);
    /// ```
    pub fn sum<N, F>(&self, project: F) -> N
    where
        N: Sum<N>,
        F: FnMut(&T) -> N,
    {
        self.iter().map(project).sum()
    }
}

fn or_default<T: Clone>(found: Result<&T>, default: T) -> T {
    match found {
        Ok(item) => item.clone(),
        Err(err) => {
            debug_assert!(err.is_absent_element(), "accessor raised {err}");
            default
        }
    }
}
