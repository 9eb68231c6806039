//! # linq
//!
//! Fluent, eager queries over in-memory sequences.
//!
//! linq lifts a container, slice or raw buffer into a [`Seq<T>`] and exposes
//! a chainable set of operators on it: projection, filtering, ordering,
//! joins, grouping, element access and reductions. Every operator runs to
//! completion on the calling thread and returns a new, independently owned
//! value. There is no lazy evaluation, I/O or shared state.
//!
//! ## Quick Start
//!
//! ```rust
//! use linq::{from, DESCENDING};
//!
//! let nums = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//!
//! let evens = from(&nums)
//!     .filter(|n| n % 2 == 0)
//!     .ordered_by(DESCENDING);
//! assert_eq!(evens.to_vec(), vec![10, 8, 6, 4, 2]);
//!
//! let first_big = from(&nums).first_or_default(0, |n| *n > 5);
//! assert_eq!(first_big, 6);
//! ```
//!
//! ## Joining
//!
//! ```rust
//! use linq::from;
//!
//! struct Employee { id: u32, proj_id: u32, name: &'static str }
//! struct Project { id: u32, name: &'static str }
//!
//! let employees = from(vec![
//!     Employee { id: 0, proj_id: 0, name: "Joe" },
//!     Employee { id: 1, proj_id: 1, name: "Jane" },
//!     Employee { id: 2, proj_id: 1, name: "Alex" },
//! ]);
//! let projects = from(vec![
//!     Project { id: 0, name: "Financial Inc." },
//!     Project { id: 1, name: "Contracts R Us" },
//! ]);
//!
//! let staffing = employees.merge_join(
//!     &projects,
//!     |e, p| (e.id, e.name, p.name),
//!     |e, p| e.proj_id == p.id,
//! );
//! assert_eq!(staffing[2], (2, "Alex", "Contracts R Us"));
//! ```
//!
//! ## Architecture
//!
//! - [`Seq`] - Owning, ordered sequence; all operators are methods on it
//! - [`from`] / [`from_raw_parts`] - Adapters that start a query
//! - [`Pair`] - Element type of the pair-form join
//! - [`Group`] - Element type of [`Seq::group_by`]
//! - [`ASCENDING`] / [`DESCENDING`] - Sort-order tokens
//!
//! ## Modules
//!
//! - [`seq`] - The container, construction and conversions
//! - [`query`] - Select, filter, accessors and reductions
//! - [`order`] - Sort-order tokens and in-place ordering
//! - [`join`] - Pair, merge and key joins
//! - [`group`] - Grouping by key
//! - [`adapter`] - Entry points
//! - [`error`] - Error types
//!
//! ## Logging
//!
//! Operators emit `tracing` events at `trace`/`debug` level (join sizes, key
//! collisions in [`Seq::to_map`], group counts). The library never installs a
//! subscriber.

pub mod adapter;
pub mod error;
pub mod group;
pub mod join;
pub mod order;
pub mod query;
pub mod seq;

// Re-export primary API types at crate root for convenience.
pub use adapter::{IntoSeq, from, from_raw_parts};
pub use error::{LinqError, QueryError, Result, SortOrderError};
pub use group::Group;
pub use join::Pair;
pub use order::{ASCENDING, DESCENDING, OrderPredicate, SortOrder};
pub use seq::Seq;
