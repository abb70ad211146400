use super::Algo;
use crate::error::SolveError;
use crate::model::{Assignment, CostMatrix, Objective};
use eyre::{Error, bail, eyre};
use pathfinding::prelude::{Matrix, kuhn_munkres, kuhn_munkres_min};

/// Largest magnitude an `f64` holds without losing integer precision.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// Kuhn-Munkres implementation of the `pathfinding` crate, used as an
/// independent reference. Only integer costs are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

fn to_weights(cost: &CostMatrix) -> Result<Matrix<i64>, Error> {
    let mut values = Vec::with_capacity(cost.rows() * cost.columns());
    for (i, row) in cost.iter_rows().enumerate() {
        for (j, &c) in row.iter().enumerate() {
            if c.fract() != 0.0 || c.abs() > MAX_EXACT {
                bail!("entry at row {i}, column {j} is not an integer ({c})");
            }
            values.push(c as i64);
        }
    }
    Matrix::from_vec(cost.rows(), cost.columns(), values)
        .map_err(|e| eyre!("cannot build weights matrix: {e:?}"))
}

impl Algo for Reference {
    fn name(&self) -> &'static str {
        "pathfinding"
    }

    fn assign(&self, cost: &CostMatrix, objective: Objective) -> Result<Assignment, Error> {
        if !cost.is_square() {
            return Err(SolveError::NotSquare {
                rows: cost.rows(),
                columns: cost.columns(),
            }
            .into());
        }
        if cost.is_empty() {
            return Ok(Assignment::empty());
        }
        let weights = to_weights(cost)?;
        let (_, columns) = if objective.is_maximize() {
            kuhn_munkres(&weights)
        } else {
            kuhn_munkres_min(&weights)
        };
        Ok(Assignment::from_columns(cost, columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference() {
        let cost = CostMatrix::from_rows([[4i32, 1, 3], [2, 0, 5], [3, 2, 2]]).unwrap();
        let a = Reference.assign(&cost, Objective::Minimize).unwrap();
        assert_eq!(a.total_cost(), 5.0);
        let a = Reference.assign(&cost, Objective::Maximize).unwrap();
        assert_eq!(a.total_cost(), 11.0);
    }

    #[test]
    fn test_reference_rejects_fractions() {
        let cost = CostMatrix::from_rows([[0.5, 1.0], [1.0, 0.0]]).unwrap();
        let err = Reference.assign(&cost, Objective::Minimize).unwrap_err();
        assert!(err.to_string().contains("row 0, column 0"));
    }
}
