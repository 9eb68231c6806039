//! Grouping elements by a derived key.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::seq::Seq;

/// Elements of a sequence that share one key, as produced by
/// [`Seq::group_by`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group<K, T> {
    /// The key every item in this group maps to.
    pub key: K,
    /// The items, in their original relative order.
    pub items: Seq<T>,
}

impl<K, T> Group<K, T> {
    /// Returns the number of items in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group has no items.
    ///
    /// Groups built by [`Seq::group_by`] always hold at least one item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Seq<T> {
    /// Partitions the sequence into groups of elements sharing
    /// `key_selector(e)`.
    ///
    /// Groups appear in the order their key is first seen. Inside a group,
    /// items keep their original relative order. The key selector runs once
    /// per element, in index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linq::seq;
    ///
    /// let words = seq!["bee", "ant", "bat", "cow", "asp"];
    /// let groups = words.group_by(|w| w.as_bytes()[0]);
    ///
    /// let keys = groups.select(|g| g.key as char);
    /// assert_eq!(keys.to_vec(), vec!['b', 'a', 'c']);
    /// assert_eq!(groups[1].items.to_vec(), vec!["ant", "asp"]);
    /// ```
    pub fn group_by<K, F>(&self, mut key_selector: F) -> Seq<Group<K, T>>
    where
        K: Eq + Hash + Clone,
        T: Clone,
        F: FnMut(&T) -> K,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<Group<K, T>> = Vec::new();

        for item in self {
            let key = key_selector(item);
            let slot = *slots.entry(key.clone()).or_insert_with(|| {
                groups.push(Group {
                    key,
                    items: Seq::new(),
                });
                groups.len() - 1
            });
            groups[slot].items.extend([item.clone()]);
        }

        trace!(len = self.len(), groups = groups.len(), "group_by");
        Seq::from_vec(groups)
    }
}
