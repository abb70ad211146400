//! Rectangular problems, solved by padding them to a square matrix.
//!
//! The missing rows or columns are filled with a sentinel cost one above the
//! largest absolute entry. Every padding line is matched exactly once, so the
//! sentinel adds the same constant to every complete assignment and the real
//! pairs are still optimal.

use crate::error::SolveError;
use crate::hungarian::Hungarian;
use crate::model::CostMatrix;
use tracing::debug;

/// Result of a possibly rectangular problem: for every row, the column it
/// got, or `None` when it was matched with a padding column.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularAssignment {
    rows: Vec<Option<usize>>,
    columns: usize,
    total_cost: f64,
}

impl RectangularAssignment {
    pub fn columns(&self) -> &[Option<usize>] {
        &self.rows
    }

    /// Number of columns of the original problem.
    pub fn width(&self) -> usize {
        self.columns
    }

    /// Total cost of the real pairs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows assigned to a real column.
    pub fn matched(&self) -> usize {
        self.rows.iter().flatten().count()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(row, column)| column.map(|c| (row, c)))
    }

    /// Flattened rows×columns 0/1 matrix with a 1 on every assigned cell.
    pub fn indicator(&self) -> Vec<u8> {
        let mut flags = vec![0; self.rows.len() * self.columns];
        for (row, column) in self.pairs() {
            flags[row * self.columns + column] = 1;
        }
        flags
    }
}

/// Cost given to padding cells.
pub fn sentinel(cost: &CostMatrix) -> f64 {
    cost.max_abs() + 1.0
}

/// Minimize the total cost of a matrix of any shape.
pub fn solve(cost: &CostMatrix) -> Result<RectangularAssignment, SolveError> {
    solve_with(&Hungarian::default(), cost)
}

/// Solve a matrix of any shape with the given solver settings.
pub fn solve_with(solver: &Hungarian, cost: &CostMatrix) -> Result<RectangularAssignment, SolveError> {
    let columns = if cost.is_square() {
        solver.solve(cost)?.into_columns()
    } else {
        let sentinel = sentinel(cost);
        debug!(
            rows = cost.rows(),
            columns = cost.columns(),
            sentinel,
            "Padding rectangular matrix"
        );
        let mut columns = solver.solve(&cost.padded(sentinel))?.into_columns();
        columns.truncate(cost.rows());
        columns
    };
    let rows = columns
        .into_iter()
        .map(|c| (c < cost.columns()).then_some(c))
        .collect::<Vec<_>>();
    let total_cost = rows
        .iter()
        .enumerate()
        .filter_map(|(row, column)| column.map(|c| cost[(row, c)]))
        .sum();
    Ok(RectangularAssignment {
        rows,
        columns: cost.columns(),
        total_cost,
    })
}
