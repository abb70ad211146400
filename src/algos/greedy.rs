use super::Algo;
use crate::error::SolveError;
use crate::model::{Assignment, CostMatrix, Objective};
use eyre::{Error, eyre};
use tracing::trace;

/// Low-cost method: repeatedly take the cheapest cell whose row and column
/// are both still free. Fast but not optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Algo for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn assign(&self, cost: &CostMatrix, objective: Objective) -> Result<Assignment, Error> {
        if !cost.is_square() {
            return Err(SolveError::NotSquare {
                rows: cost.rows(),
                columns: cost.columns(),
            }
            .into());
        }
        let sign = if objective.is_maximize() { -1.0 } else { 1.0 };
        let n = cost.rows();
        let mut row_used = vec![false; n];
        let mut column_used = vec![false; n];
        let mut columns = vec![0; n];
        for _ in 0..n {
            let mut best: Option<(f64, usize, usize)> = None;
            for i in (0..n).filter(|&i| !row_used[i]) {
                for j in (0..n).filter(|&j| !column_used[j]) {
                    let c = sign * cost[(i, j)];
                    if best.is_none_or(|(b, _, _)| c < b) {
                        best = Some((c, i, j));
                    }
                }
            }
            let (_, i, j) = best.ok_or_else(|| eyre!("no free cell left in a {n}x{n} matrix"))?;
            trace!(row = i, column = j, "Greedy pick");
            row_used[i] = true;
            column_used[j] = true;
            columns[i] = j;
        }
        Ok(Assignment::from_columns(cost, columns))
    }
}
