//! Integration tests for the query operators, driven through the public API.

use std::panic::{self, AssertUnwindSafe};

use linq::{DESCENDING, LinqError, QueryError, Result, Seq, from, seq};

#[derive(Debug, Clone, PartialEq)]
struct Description {
    i: i32,
    desc: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    id: u32,
    proj_id: u32,
    name: String,
}

fn employees() -> Seq<Employee> {
    seq![
        Employee {
            id: 0,
            proj_id: 0,
            name: "Joe".to_string()
        },
        Employee {
            id: 1,
            proj_id: 1,
            name: "Jane".to_string()
        },
        Employee {
            id: 2,
            proj_id: 1,
            name: "Alex".to_string()
        },
    ]
}

const NUMS: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

#[test]
fn test_even_filter_descending() {
    let evens = from(&NUMS)
        .filter(|n| n % 2 == 0)
        .ordered_by(DESCENDING);
    assert_eq!(evens.to_vec(), vec![10, 8, 6, 4, 2]);

    // In-place form on a named sequence.
    let mut odds = from(&NUMS).filter(|n| n % 2 == 1);
    odds.order_by(DESCENDING);
    assert_eq!(odds.to_vec(), vec![9, 7, 5, 3, 1]);
}

#[test]
fn test_projection_to_record() {
    let described = seq![2, 4, 6].select(|n| Description {
        i: *n,
        desc: "even".to_string(),
    });

    assert_eq!(described.len(), 3);
    for (item, expected) in described.iter().zip([2, 4, 6]) {
        assert_eq!(item.i, expected);
        assert_eq!(item.desc, "even");
    }
}

#[test]
fn test_first_or_default_hit_and_miss() {
    let nums = from(&NUMS);
    assert_eq!(nums.first_or_default(0, |n| *n == 11), 0);
    assert_eq!(nums.first_or_default(0, |n| *n > 5), 6);
}

#[test]
fn test_last_no_match_and_default() {
    let nums = from(&NUMS);
    assert_eq!(
        nums.last_where(|n| *n > 10),
        Err(LinqError::Query(QueryError::NoMatch))
    );
    assert_eq!(nums.last_or_default(0, |n| *n > 10), 0);
}

#[test]
fn test_accessors_over_raw_buffer() -> Result<()> {
    // SAFETY: NUMS is a 10-element static array.
    let nums = unsafe { linq::from_raw_parts(NUMS.as_ptr(), NUMS.len()) };

    assert_eq!(*nums.first()?, 1);
    assert_eq!(*nums.first_where(|n| n % 2 == 0)?, 2);
    assert_eq!(*nums.last()?, 10);
    assert_eq!(*nums.last_where(|n| *n < 10)?, 9);
    Ok(())
}

#[test]
fn test_empty_accessors_fail_cleanly() {
    let empty: Seq<i32> = Seq::new();

    let err = empty.last().unwrap_err();
    assert_eq!(err, LinqError::Query(QueryError::EmptySequence));
    assert!(err.is_absent_element());
    assert_eq!(err.to_string(), "query error: sequence contains no elements");
}

#[test]
fn test_to_map_employee_names_by_id() {
    let names = employees().to_map_with(|e| e.id, |e| e.name.clone());

    assert_eq!(names.len(), 3);
    assert_eq!(names[&0], "Joe");
    assert_eq!(names[&1], "Jane");
    assert_eq!(names[&2], "Alex");
}

#[test]
fn test_to_map_collision_keeps_last_contributor() {
    let by_project = employees().to_map(|e| e.proj_id);

    assert_eq!(by_project.len(), 2);
    assert_eq!(by_project[&0].name, "Joe");
    assert_eq!(by_project[&1].name, "Alex");
}

#[test]
fn test_to_vector_round_trip() {
    let odds = from(&NUMS).filter(|n| n % 2 == 1);
    let vec = odds.to_vec();
    assert_eq!(vec, vec![1, 3, 5, 7, 9]);
    assert_eq!(from(vec), odds);
}

#[test]
fn test_sum_and_any() {
    let staff = employees();
    assert_eq!(staff.sum(|e| e.id), 3);
    assert!(staff.any());
    assert!(staff.any_where(|e| e.name == "Jane"));
    assert!(!staff.any_where(|e| e.name == "Bob"));

    let nobody: Seq<Employee> = Seq::new();
    assert_eq!(nobody.sum(|e| e.id), 0);
    assert!(!nobody.any());
}

#[test]
fn test_or_default_does_not_mask_predicate_panic() {
    let nums = from(&NUMS);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        nums.first_or_default(0, |n| {
            assert!(*n < 3, "predicate failure at {n}");
            false
        })
    }));
    assert!(outcome.is_err());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        nums.last_or_default(0, |_| panic!("predicate failure"))
    }));
    assert!(outcome.is_err());
}

#[test]
fn test_selector_error_propagates_unchanged() {
    let raw = seq!["1", "2", "three"];
    let err = raw.try_select(|s| s.parse::<i32>()).unwrap_err();
    assert_eq!(err, "three".parse::<i32>().unwrap_err());
}

#[test]
fn test_chained_pipeline() {
    let staff = employees();
    let names = staff
        .filter(|e| e.proj_id == 1)
        .select(|e| e.name.clone())
        .ordered_by(linq::ASCENDING);

    assert_eq!(names.to_vec(), vec!["Alex".to_string(), "Jane".to_string()]);
    assert_eq!(staff.len(), 3);
}
