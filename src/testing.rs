//! Helpers shared by unit tests.

use crate::model::CostMatrix;
use rand::Rng;

/// Random `rows`×`columns` matrix of integers drawn from `low..high`.
pub fn random_integers<R: Rng>(rng: &mut R, rows: usize, columns: usize, low: i32, high: i32) -> CostMatrix {
    CostMatrix::from_fn(rows, columns, |_, _| f64::from(rng.random_range(low..high))).unwrap()
}

/// Random `rows`×`columns` matrix of reals drawn from `low..high`.
pub fn random_reals<R: Rng>(rng: &mut R, rows: usize, columns: usize, low: f64, high: f64) -> CostMatrix {
    CostMatrix::from_fn(rows, columns, |_, _| rng.random_range(low..high)).unwrap()
}

/// Minimum total cost over every permutation of a square matrix.
pub fn brute_force_min(cost: &CostMatrix) -> f64 {
    fn go(cost: &CostMatrix, row: usize, used: &mut [bool], acc: f64, best: &mut f64) {
        if row == cost.rows() {
            *best = best.min(acc);
            return;
        }
        for column in 0..cost.columns() {
            if !used[column] {
                used[column] = true;
                go(cost, row + 1, used, acc + cost[(row, column)], best);
                used[column] = false;
            }
        }
    }
    let mut best = f64::INFINITY;
    go(cost, 0, &mut vec![false; cost.columns()], 0.0, &mut best);
    if cost.rows() == 0 { 0.0 } else { best }
}

/// Check that `columns` is a permutation of `0..columns.len()`.
pub fn is_permutation(columns: &[usize]) -> bool {
    let mut seen = vec![false; columns.len()];
    columns
        .iter()
        .all(|&c| c < seen.len() && !std::mem::replace(&mut seen[c], true))
}

pub fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs())), "{a} != {b}");
}
