//! Debug binary: phased single-threaded workload with invariant checks.
//!
//! Exercises the full public surface (insert, remove, lookup, cursor
//! navigation, deep copy) over a scrambled key sequence and validates the
//! tree between phases. Useful for eyeballing shape metrics and for
//! running the engine under a tracing subscriber.
//!
//! Run with:
//! ```bash
//! cargo run --release
//! RUST_LOG=aaset=debug cargo run --features tracing
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use std::time::Instant;

use aaset::AaSet;

/// Odd multiplier for a bijective scramble of the key space.
///
/// Insertion order is then maximally unlike sorted order, which is the
/// interesting case for a balancing tree.
const MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

/// Keys to insert per run.
const KEYS: usize = 100_000;

fn scrambled_keys(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| i.wrapping_mul(MULTIPLIER)).collect()
}

fn validate(set: &AaSet<u64>, phase: &str) {
    if let Err(err) = set.check_invariants() {
        eprintln!("FAIL [{phase}]: {err}");
        std::process::exit(1);
    }
    let stats = set.stats();
    println!(
        "  [{phase}] nodes={} height={} root_level={}",
        stats.nodes, stats.height, stats.root_level
    );
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let keys = scrambled_keys(KEYS);
    let mut set: AaSet<u64> = AaSet::new();

    // Phase 1: scrambled insertion.
    let start = Instant::now();
    for &k in &keys {
        set.insert(k);
    }
    println!("insert {} keys: {:?}", KEYS, start.elapsed());
    assert_eq!(set.len(), KEYS);
    validate(&set, "insert");

    // Phase 2: membership probes, half hits and half misses.
    let start = Instant::now();
    let mut hits = 0usize;
    for &k in &keys {
        if set.contains(&k) {
            hits += 1;
        }
        if set.contains(&k.wrapping_add(1)) {
            hits += 1;
        }
    }
    println!("probe {} keys: {:?} ({hits} hits)", KEYS * 2, start.elapsed());

    // Phase 3: remove every other key.
    let start = Instant::now();
    for &k in keys.iter().step_by(2) {
        assert!(set.remove(&k));
    }
    println!("remove {} keys: {:?}", KEYS / 2, start.elapsed());
    assert_eq!(set.len(), KEYS - KEYS.div_ceil(2));
    validate(&set, "remove");

    // Phase 4: full cursor sweep, both directions.
    let start = Instant::now();
    let forward = set.iter().count();
    let backward = set.iter().rev().count();
    assert_eq!(forward, set.len());
    assert_eq!(backward, set.len());
    println!("sweep {forward} elements twice: {:?}", start.elapsed());

    // Phase 5: lower-bound walk across the whole key space.
    let start = Instant::now();
    let mut found = 0usize;
    for i in 0..KEYS as u64 {
        if !set.lower_bound(&i.wrapping_mul(MULTIPLIER)).is_end() {
            found += 1;
        }
    }
    println!("lower_bound {} probes: {:?} ({found} bounded)", KEYS, start.elapsed());

    // Phase 6: deep copy isolation.
    let copy = set.clone();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(copy.len(), KEYS - KEYS.div_ceil(2));
    validate(&copy, "copy");

    println!("ok");
}
