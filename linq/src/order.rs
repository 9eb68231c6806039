//! Ordering of sequences.
//!
//! [`Seq::order_by`] accepts anything implementing [`OrderPredicate`]: the
//! [`ASCENDING`] and [`DESCENDING`] tokens, or any closure
//! `FnMut(&T, &T) -> bool` that answers "does left come before right?".
//! The predicate must be a strict weak order.
//!
//! Closures go through the [`OrderPredicate`] trait rather than a plain
//! `FnMut` bound, so their parameter types must be written out:
//! `|a: &Task, b: &Task| a.priority > b.priority`.
//!
//! Sorting is not stable. Elements that compare as equivalent may come out in
//! any relative order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{LinqError, SortOrderError};
use crate::seq::Seq;

/// A named, stateless ordering over comparable elements.
///
/// `SortOrder` can be deserialized or parsed from a string, so the direction
/// of a query can come from configuration:
///
/// ```rust
/// use linq::{seq, SortOrder};
///
/// let order: SortOrder = "desc".parse()?;
/// assert_eq!(seq![3, 1, 2].ordered_by(order).to_vec(), vec![3, 2, 1]);
/// # Ok::<(), linq::LinqError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Left precedes right iff `left < right`.
    #[default]
    Ascending,

    /// Left precedes right iff `left > right`.
    Descending,
}

/// Sorts comparable elements smallest first.
pub const ASCENDING: SortOrder = SortOrder::Ascending;

/// Sorts comparable elements largest first.
pub const DESCENDING: SortOrder = SortOrder::Descending;

impl SortOrder {
    /// Returns the display name of this order.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Returns the opposite order.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = LinqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(SortOrderError::Unknown {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

/// A binary "left comes first" predicate used by [`Seq::order_by`].
pub trait OrderPredicate<T> {
    /// Returns `true` if `left` must be placed before `right`.
    fn precedes(&mut self, left: &T, right: &T) -> bool;
}

impl<T: PartialOrd> OrderPredicate<T> for SortOrder {
    fn precedes(&mut self, left: &T, right: &T) -> bool {
        match self {
            Self::Ascending => left < right,
            Self::Descending => left > right,
        }
    }
}

impl<T, F> OrderPredicate<T> for F
where
    F: FnMut(&T, &T) -> bool,
{
    fn precedes(&mut self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

impl<T> Seq<T> {
    /// Sorts the sequence in place and returns it for chaining.
    ///
    /// `pred` is [`ASCENDING`], [`DESCENDING`] or a closure returning `true`
    /// when its left argument comes first. The sort is unstable and needs no
    /// allocation.
    ///
    /// A predicate that is not a strict weak order (for example `<` over
    /// floats containing NaN) leaves the result order unspecified and may
    /// make the standard library sort panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linq::{seq, ASCENDING};
    ///
    /// let mut words = seq!["pear", "fig", "banana"];
    /// words.order_by(|a: &&str, b: &&str| a.len() < b.len());
    /// assert_eq!(words.to_vec(), vec!["fig", "pear", "banana"]);
    ///
    /// words.order_by(ASCENDING);
    /// assert_eq!(words.to_vec(), vec!["banana", "fig", "pear"]);
    /// ```
    pub fn order_by<P>(&mut self, mut pred: P) -> &mut Self
    where
        P: OrderPredicate<T>,
    {
        trace!(len = self.len(), "order_by");
        self.as_mut_slice().sort_unstable_by(|left, right| {
            if pred.precedes(left, right) {
                Ordering::Less
            } else if pred.precedes(right, left) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        self
    }

    /// By-value form of [`order_by`](Seq::order_by), for owned chains.
    ///
    /// ```rust
    /// use linq::{seq, DESCENDING};
    ///
    /// let top = seq![4, 9, 1].ordered_by(DESCENDING);
    /// assert_eq!(top.first(), Ok(&9));
    /// ```
    #[must_use]
    pub fn ordered_by<P>(mut self, pred: P) -> Self
    where
        P: OrderPredicate<T>,
    {
        self.order_by(pred);
        self
    }
}
