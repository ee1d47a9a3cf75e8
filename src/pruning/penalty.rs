//! Penalty-aware tour pruning.
//!
//! Dropping a city saves its detour but costs the skip penalty. Every pass
//! here proposes removals and commits them only when the penalty-inclusive
//! total of the whole tour actually drops — the detour arithmetic is a
//! gate, never the ground truth.

use crate::distance::DistanceOracle;
use crate::models::tour_cost;

/// Removes single cities while doing so lowers the total cost.
///
/// Scans interior positions, commits the first improving removal, and
/// restarts until a full scan removes nothing.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::{tour_cost, City};
/// use penalty_tsp::distance::DistanceOracle;
/// use penalty_tsp::pruning::prune_single;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 0.5, 100.0), // a long detour for a cheap penalty
/// ];
/// let oracle = DistanceOracle::dense(&cities);
/// let pruned = prune_single(&[0, 1, 2, 0], &oracle, 10);
/// assert_eq!(pruned, vec![0, 1, 0]);
/// ```
pub fn prune_single(tour: &[usize], oracle: &DistanceOracle, penalty: i64) -> Vec<usize> {
    let mut current = tour.to_vec();
    let mut improved = true;

    while improved {
        improved = false;
        if current.len() < 3 {
            break;
        }
        let current_cost = tour_cost(&current, oracle, penalty);
        for idx in 1..current.len() - 1 {
            let mut test = current.clone();
            test.remove(idx);
            if tour_cost(&test, oracle, penalty) < current_cost {
                current = test;
                improved = true;
                break;
            }
        }
    }
    current
}

/// Two-phase pruning: detour-gated single removals, then contiguous runs.
///
/// Phase one mirrors [`prune_single`] but only proposes cities whose
/// penalty is below their local detour cost. Phase two tries removing runs
/// of 2 up to min(5, len/3) consecutive cities whose combined penalty is
/// below the distance the bridge edge saves. Both phases commit on the
/// penalty-inclusive total.
pub fn prune_advanced(tour: &[usize], oracle: &DistanceOracle, penalty: i64) -> Vec<usize> {
    let mut current = tour.to_vec();

    // Phase 1: single cities, gated by local detour.
    let mut improved = true;
    while improved {
        improved = false;
        if current.len() < 3 {
            break;
        }
        let closed = current[0] == current[current.len() - 1];
        let end = if closed {
            current.len() - 2
        } else {
            current.len() - 1
        };
        let current_cost = tour_cost(&current, oracle, penalty);
        for i in 1..end {
            let prev = current[i - 1];
            let city = current[i];
            let next = current[i + 1];
            let detour = oracle.distance(prev, city) + oracle.distance(city, next)
                - oracle.distance(prev, next);
            if penalty < detour {
                let mut candidate = current.clone();
                candidate.remove(i);
                if tour_cost(&candidate, oracle, penalty) < current_cost {
                    current = candidate;
                    improved = true;
                    break;
                }
            }
        }
    }

    // Phase 2: contiguous runs.
    improved = true;
    while improved {
        improved = false;
        let max_run = 5.min(current.len() / 3);
        'runs: for run in 2..=max_run {
            if current.len() < run + 3 {
                continue;
            }
            for start in 1..current.len() - run - 1 {
                let bridge = oracle.distance(current[start - 1], current[start + run]);
                let savings: i64 = (start..start + run)
                    .map(|i| oracle.distance(current[i], current[i + 1]))
                    .sum::<i64>()
                    - bridge;
                if (run as i64) * penalty < savings {
                    let mut candidate = current.clone();
                    candidate.drain(start..start + run);
                    if tour_cost(&candidate, oracle, penalty)
                        < tour_cost(&current, oracle, penalty)
                    {
                        current = candidate;
                        improved = true;
                        break 'runs;
                    }
                }
            }
        }
    }

    current
}

/// Hybrid-path pruning: unconditional single removals, then runs of 2–3.
///
/// Used on very large instances where the detour gate's extra oracle
/// lookups are not worth it; proposals go straight to the total-cost
/// check.
pub fn prune_aggressive(tour: &[usize], oracle: &DistanceOracle, penalty: i64) -> Vec<usize> {
    let mut current = tour.to_vec();
    let mut improved = true;

    while improved {
        improved = false;
        if current.len() < 3 {
            break;
        }
        let current_cost = tour_cost(&current, oracle, penalty);
        for i in 1..current.len() - 1 {
            let mut test = current.clone();
            test.remove(i);
            if tour_cost(&test, oracle, penalty) < current_cost {
                current = test;
                improved = true;
                break;
            }
        }

        if !improved {
            'runs: for run in 2..=3usize {
                if current.len() < run + 2 {
                    continue;
                }
                for start in 1..current.len() - run {
                    let mut test = current.clone();
                    test.drain(start..start + run);
                    if tour_cost(&test, oracle, penalty) < current_cost {
                        current = test;
                        improved = true;
                        break 'runs;
                    }
                }
            }
        }
    }
    current
}
