//! Integration tests for cursor navigation and the lower-bound/find
//! contract.

#![expect(clippy::unwrap_used, reason = "fail fast in tests")]

use aaset::AaSet;

mod common;

/// Odd multiplier scramble, so insertion order is unlike sorted order.
const MULTIPLIER: u64 = 0x517c_c1b7_2722_0a95;

fn scrambled_set(n: u64) -> AaSet<u64> {
    (0..n).map(|i| i.wrapping_mul(MULTIPLIER)).collect()
}

#[test]
fn lower_bound_and_find_contract() {
    common::init_tracing();

    let set: AaSet<u32> = [1, 3, 5, 7].into();

    assert_eq!(set.lower_bound(&4).get(), Some(&5));
    assert_eq!(set.lower_bound(&7).get(), Some(&7));
    assert!(set.lower_bound(&8).is_end());
    assert_eq!(set.find(&5).get(), Some(&5));
    assert!(set.find(&4).is_end());
}

#[test]
fn lower_bound_below_minimum_is_front() {
    let set: AaSet<u32> = [10, 20, 30].into();
    assert_eq!(set.lower_bound(&1), set.cursor_front());
}

#[test]
fn find_on_empty_set_returns_end() {
    let set: AaSet<u32> = AaSet::new();
    assert!(set.find(&42).is_end());
    assert_eq!(set.find(&42), set.cursor_end());
}

#[test]
fn full_forward_walk_visits_sorted_order() {
    let set = scrambled_set(500);

    let mut cur = set.cursor_front();
    let mut seen: Vec<u64> = Vec::with_capacity(500);
    while let Some(&v) = cur.get() {
        seen.push(v);
        cur.move_next();
    }

    assert_eq!(seen.len(), 500);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert!(cur.is_end());
}

#[test]
fn full_backward_walk_from_end() {
    let set = scrambled_set(500);

    let mut cur = set.cursor_end();
    let mut seen: Vec<u64> = Vec::with_capacity(500);
    for _ in 0..set.len() {
        cur.move_prev();
        seen.push(*cur.get().unwrap());
    }

    assert_eq!(seen.len(), 500);
    assert!(seen.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(cur, set.cursor_front());
}

#[test]
fn bidirectional_symmetry() {
    let set = scrambled_set(100);

    // For any non-end cursor not at the minimum: prev(next(it)) == it and
    // next(prev(it)) == it.
    let mut it = set.cursor_front();
    it.move_next();
    while !it.is_end() {
        let here = it;

        let mut roundtrip = it;
        roundtrip.move_next();
        roundtrip.move_prev();
        assert_eq!(roundtrip, here);

        let mut other = it;
        other.move_prev();
        other.move_next();
        assert_eq!(other, here);

        it.move_next();
    }
}

#[test]
fn cursor_survives_neighbor_queries() {
    // Read-only operations never move or invalidate a cursor.
    let set: AaSet<u32> = [1, 2, 3, 4, 5].into();

    let cur = set.find(&3);
    assert!(set.contains(&1));
    let _ = set.lower_bound(&4);
    let _ = set.iter().count();

    assert_eq!(cur.get(), Some(&3));
}

#[test]
fn find_after_removal_misses() {
    let mut set: AaSet<u32> = [1, 2, 3].into();
    set.remove(&2);

    assert!(set.find(&2).is_end());
    assert_eq!(set.find(&3).get(), Some(&3));
}

#[test]
fn iterator_and_cursor_agree() {
    let set = scrambled_set(200);

    let via_iter: Vec<u64> = set.iter().copied().collect();

    let mut via_cursor: Vec<u64> = Vec::new();
    let mut cur = set.cursor_front();
    while let Some(&v) = cur.get() {
        via_cursor.push(v);
        cur.move_next();
    }

    assert_eq!(via_iter, via_cursor);
}

#[test]
fn double_ended_iterator_partition() {
    let set: AaSet<u32> = (0..10).collect();
    let mut iter = set.iter();

    let mut front: Vec<u32> = Vec::new();
    let mut back: Vec<u32> = Vec::new();
    loop {
        match iter.next() {
            Some(&v) => front.push(v),
            None => break,
        }
        match iter.next_back() {
            Some(&v) => back.push(v),
            None => break,
        }
    }
    back.reverse();
    front.extend(back);

    assert_eq!(front, (0..10).collect::<Vec<_>>());
}

#[test]
fn singleton_cursor_boundaries() {
    let set: AaSet<u32> = [42].into();

    let mut cur = set.cursor_front();
    assert_eq!(cur.get(), Some(&42));

    cur.move_next();
    assert!(cur.is_end());

    cur.move_prev();
    assert_eq!(cur.get(), Some(&42));
    assert_eq!(cur, set.cursor_front());
}
