//! Property-based tests for the query operators using proptest.

use std::collections::HashMap;

use linq::{ASCENDING, DESCENDING, LinqError, QueryError, Seq, from};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..64)
}

/// Returns `true` if `sub` is an order-preserving subsequence of `full`.
fn is_subsequence(sub: &[i32], full: &[i32]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|item| item == wanted))
}

fn sorted_copy(items: &[i32]) -> Vec<i32> {
    let mut copy = items.to_vec();
    copy.sort_unstable();
    copy
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Select keeps the length of its input.
    #[test]
    fn select_preserves_length(items in small_ints()) {
        let seq = from(&items);
        prop_assert_eq!(seq.select(|n| i64::from(*n) * 3).len(), items.len());
    }

    /// Select keeps positional correspondence.
    #[test]
    fn select_is_positional(items in small_ints()) {
        let projected = from(&items).select(|n| n.to_string());
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(&projected[i], &item.to_string());
        }
    }

    /// Filter yields an order-preserving subsequence of exactly the matching elements.
    #[test]
    fn filter_is_matching_subsequence(items in small_ints(), threshold in -50i32..50) {
        let kept = from(&items).filter(|n| *n > threshold).into_vec();
        prop_assert!(is_subsequence(&kept, &items));
        prop_assert!(kept.iter().all(|n| *n > threshold));
        prop_assert_eq!(kept.len(), items.iter().filter(|n| **n > threshold).count());
    }

    /// Chained filters equal one filter over the conjunction.
    #[test]
    fn filter_composes(items in small_ints(), a in -50i32..50, m in 1i32..5) {
        let seq = from(&items);
        let chained = seq.filter(|n| *n > a).filter(|n| n % m == 0);
        let combined = seq.filter(|n| *n > a && n % m == 0);
        prop_assert_eq!(chained, combined);
    }

    /// Ordering permutes without adding or dropping elements.
    #[test]
    fn order_by_is_permutation(items in small_ints()) {
        let ordered = from(&items).ordered_by(DESCENDING).into_vec();
        prop_assert_eq!(sorted_copy(&ordered), sorted_copy(&items));
        prop_assert!(ordered.windows(2).all(|w| w[0] >= w[1]));
    }

    /// Re-sorting with the same predicate changes nothing.
    #[test]
    fn order_by_is_idempotent(items in small_ints()) {
        let once = from(&items).ordered_by(ASCENDING);
        let twice = once.clone().ordered_by(ASCENDING);
        prop_assert_eq!(once, twice);
    }

    /// Join output is lexicographic by (left index, right index).
    #[test]
    fn join_is_left_major(left in small_ints(), right in small_ints()) {
        let l = from(left.iter().copied().enumerate().collect::<Vec<_>>());
        let r = from(right.iter().copied().enumerate().collect::<Vec<_>>());

        let indices = l
            .join(&r, |a, b| (a.1 + b.1) % 3 == 0)
            .select(|p| (p.left.0, p.right.0))
            .into_vec();

        let mut expected = Vec::new();
        for (i, a) in left.iter().enumerate() {
            for (j, b) in right.iter().enumerate() {
                if (a + b) % 3 == 0 {
                    expected.push((i, j));
                }
            }
        }
        prop_assert_eq!(indices, expected);
    }

    /// Merge-join equals pair-join followed by select.
    #[test]
    fn merge_join_is_join_then_select(left in small_ints(), right in small_ints()) {
        let l = from(&left);
        let r = from(&right);
        let merged = l.merge_join(&r, |a, b| a * 1000 + b, |a, b| a < b);
        let via_pairs = l.join(&r, |a, b| a < b).select(|p| p.left * 1000 + p.right);
        prop_assert_eq!(merged, via_pairs);
    }

    /// The hash key-join is indistinguishable from the nested-loop join.
    #[test]
    fn key_join_matches_nested_loop(left in small_ints(), right in small_ints()) {
        let l = from(&left);
        let r = from(&right);
        let fast = l.join_by_key(&r, |a| a.rem_euclid(7), |b| b.rem_euclid(7));
        let slow = l.join(&r, |a, b| a.rem_euclid(7) == b.rem_euclid(7));
        prop_assert_eq!(fast, slow);
    }

    /// `last_where` on a sequence equals `first_where` on its reverse.
    #[test]
    fn first_last_duality(items in small_ints(), threshold in -50i32..50) {
        let seq = from(&items);
        let reversed = seq.clone().reversed();
        let last = seq.last_where(|n| *n > threshold).copied();
        let first_of_reverse = reversed.first_where(|n| *n > threshold).copied();
        prop_assert_eq!(last, first_of_reverse);
    }

    /// Predicated accessors fail with NoMatch exactly when nothing qualifies.
    #[test]
    fn no_match_iff_nothing_qualifies(items in small_ints(), threshold in -50i32..50) {
        let seq = from(&items);
        let any = items.iter().any(|n| *n > threshold);
        let first = seq.first_where(|n| *n > threshold);
        prop_assert_eq!(first.is_err(), !any);
        if let Err(err) = first {
            prop_assert_eq!(err, LinqError::Query(QueryError::NoMatch));
        }
        prop_assert_eq!(seq.any_where(|n| *n > threshold), any);
    }

    /// Converting to a vector and back reproduces the sequence.
    #[test]
    fn to_vec_round_trip(items in small_ints()) {
        let seq = from(&items);
        prop_assert_eq!(from(seq.to_vec()), seq);
    }

    /// On key collisions the highest-index contributor wins.
    #[test]
    fn to_map_keeps_last_contributor(items in small_ints()) {
        let indexed = from(items.iter().copied().enumerate().collect::<Vec<_>>());
        let map = indexed.to_map_with(|(_, n)| n.rem_euclid(5), |(i, _)| *i);

        let mut expected = HashMap::new();
        for (i, n) in items.iter().enumerate() {
            expected.insert(n.rem_euclid(5), i);
        }
        prop_assert_eq!(map, expected);
    }

    /// Sum matches the host arithmetic, and any() matches non-emptiness.
    #[test]
    fn sum_and_any(items in small_ints()) {
        let seq = from(&items);
        prop_assert_eq!(seq.sum(|n| i64::from(*n)), items.iter().map(|n| i64::from(*n)).sum::<i64>());
        prop_assert_eq!(seq.any(), !items.is_empty());
    }

    /// Group items concatenated are a permutation, and each group is a subsequence.
    #[test]
    fn group_by_partitions(items in small_ints()) {
        let groups = from(&items).group_by(|n| n.rem_euclid(4));

        let mut all = Vec::new();
        for group in &groups {
            prop_assert!(is_subsequence(group.items.as_slice(), &items));
            prop_assert!(group.items.all(|n| n.rem_euclid(4) == group.key));
            all.extend(group.items.iter().copied());
        }
        prop_assert_eq!(sorted_copy(&all), sorted_copy(&items));
    }
}

#[test]
fn sum_of_empty_is_additive_identity() {
    let empty: Seq<i32> = Seq::new();
    assert_eq!(empty.sum(|n| *n), 0);
    assert_eq!(empty.sum(|n| f64::from(*n)), 0.0);
}
