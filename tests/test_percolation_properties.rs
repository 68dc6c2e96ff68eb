//! Property-based tests for the percolation model
//!
//! Random open sequences are checked against a breadth-first flood fill over
//! the open sites, which is the definition of "full" and "percolates".
use percolation::{Percolation, VIRTUAL_TOP};
use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};

/// Flood fill from the open sites of the top row
fn reference_full(n: i64, open: &HashSet<(i64, i64)>) -> HashSet<(i64, i64)> {
    let mut full = HashSet::new();
    let mut queue: VecDeque<(i64, i64)> = (1..=n)
        .map(|col| (1, col))
        .filter(|site| open.contains(site))
        .collect();
    full.extend(queue.iter().copied());

    while let Some((row, col)) = queue.pop_front() {
        for next in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)] {
            if open.contains(&next) && full.insert(next) {
                queue.push_back(next);
            }
        }
    }
    full
}

fn grid_and_sites() -> impl Strategy<Value = (i64, Vec<(i64, i64)>)> {
    (1i64..8).prop_flat_map(|n| (Just(n), prop::collection::vec((1..=n, 1..=n), 0..80)))
}

/// Property: site ids are a bijection onto 1..=N², disjoint from both sentinels
#[test]
fn prop_site_ids_never_collide() {
    proptest!(|(n in 1i64..40)| {
        let p = Percolation::new(n).unwrap();
        let bottom = p.virtual_bottom();
        let mut seen = HashSet::new();

        for row in 1..=n {
            for col in 1..=n {
                let id = p.site_id(row, col).unwrap();
                prop_assert!(id != VIRTUAL_TOP && id != bottom);
                prop_assert!((1..=(n * n) as usize).contains(&id));
                prop_assert!(seen.insert(id), "duplicate id {} for ({}, {})", id, row, col);
                prop_assert_eq!(p.site_coordinates(id), Some((row, col)));
            }
        }
        prop_assert_eq!(seen.len(), (n * n) as usize);
    });
}

/// Property: full sites and percolation agree with a flood fill after every open
#[test]
fn prop_matches_flood_fill() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut p = Percolation::new(n).unwrap();
        let mut open = HashSet::new();

        for (row, col) in sites {
            p.open(row, col).unwrap();
            open.insert((row, col));

            let full = reference_full(n, &open);
            for r in 1..=n {
                for c in 1..=n {
                    prop_assert_eq!(p.is_open(r, c).unwrap(), open.contains(&(r, c)));
                    prop_assert_eq!(p.is_full(r, c).unwrap(), full.contains(&(r, c)),
                        "is_full({}, {}) disagrees with flood fill", r, c);
                }
            }
            let reaches_bottom = (1..=n).any(|c| full.contains(&(n, c)));
            prop_assert_eq!(p.percolates(), reaches_bottom);
            prop_assert_eq!(p.number_of_open_sites(), open.len());
        }
    });
}

/// Property: a full site is always open
#[test]
fn prop_full_implies_open() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut p = Percolation::new(n).unwrap();
        for (row, col) in sites {
            p.open(row, col).unwrap();
        }
        for r in 1..=n {
            for c in 1..=n {
                if p.is_full(r, c).unwrap() {
                    prop_assert!(p.is_open(r, c).unwrap());
                }
            }
        }
    });
}

/// Property: once the system percolates it keeps percolating
#[test]
fn prop_percolation_is_monotonic() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut p = Percolation::new(n).unwrap();
        let mut percolated = false;
        for (row, col) in sites {
            p.open(row, col).unwrap();
            if percolated {
                prop_assert!(p.percolates());
            }
            percolated = p.percolates();
        }
    });
}

/// Property: opening every site twice leaves the same state as opening it once
#[test]
fn prop_open_is_idempotent() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut once = Percolation::new(n).unwrap();
        let mut twice = Percolation::new(n).unwrap();
        for &(row, col) in &sites {
            once.open(row, col).unwrap();
            twice.open(row, col).unwrap();
            twice.open(row, col).unwrap();
        }

        prop_assert_eq!(once.number_of_open_sites(), twice.number_of_open_sites());
        prop_assert_eq!(once.percolates(), twice.percolates());
        for r in 1..=n {
            for c in 1..=n {
                prop_assert_eq!(once.is_full(r, c).unwrap(), twice.is_full(r, c).unwrap());
            }
        }
    });
}

/// Property: the threshold is the open fraction of the grid
#[test]
fn prop_threshold_in_unit_interval() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut p = Percolation::new(n).unwrap();
        for (row, col) in sites {
            p.open(row, col).unwrap();
        }
        let t = p.threshold();
        prop_assert!((0.0..=1.0).contains(&t));
        prop_assert!((t - p.number_of_open_sites() as f64 / (n * n) as f64).abs() < 1e-12);
    });
}
