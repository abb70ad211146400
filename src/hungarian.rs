//! Hungarian method (Kuhn-Munkres) for square assignment problems.
//!
//! Rows are inserted one at a time. For every row, a shortest augmenting
//! path is searched over the reduced costs `cost[i][j] - u[i] - v[j]`,
//! Dijkstra style, while the potentials `u` and `v` are adjusted so that
//! reduced costs never become negative. The whole procedure runs in O(n³).

use crate::error::SolveError;
use crate::model::{Assignment, CostMatrix, Objective};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument, trace};

const UNMATCHED: usize = usize::MAX;

/// Exact solver for square assignment problems.
///
/// ```rust
/// # use rassign::{CostMatrix, Objective, hungarian::Hungarian};
/// let cost = CostMatrix::from_rows([[4.0, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0]]).unwrap();
/// let assignment = Hungarian::new(Objective::Minimize).solve(&cost).unwrap();
/// assert_eq!(assignment.columns(), &[1, 0, 2]);
/// assert_eq!(assignment.total_cost(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hungarian<'a> {
    objective: Objective,
    stop_flag: Option<&'a AtomicBool>,
}

/// Row and column potentials at the end of a run.
#[derive(Debug)]
pub(crate) struct Duals {
    pub rows: Vec<f64>,
    pub columns: Vec<f64>,
}

impl<'a> Hungarian<'a> {
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            stop_flag: None,
        }
    }

    /// Check `flag` before every row and give up with
    /// [`SolveError::Interrupted`] once it is set.
    #[must_use]
    pub fn with_stop_flag(self, flag: &'a AtomicBool) -> Self {
        Self {
            stop_flag: Some(flag),
            ..self
        }
    }

    #[must_use]
    pub fn with_objective(self, objective: Objective) -> Self {
        Self { objective, ..self }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Compute an optimal assignment. The total cost is expressed in the
    /// units of `cost`, whatever the objective.
    #[instrument(skip_all, fields(size = cost.rows(), objective = %self.objective))]
    pub fn solve(&self, cost: &CostMatrix) -> Result<Assignment, SolveError> {
        let (columns, _) = self.solve_with_duals(cost)?;
        let assignment = Assignment::from_columns(cost, columns);
        debug!(total_cost = assignment.total_cost(), "Assignment found");
        Ok(assignment)
    }

    pub(crate) fn solve_with_duals(&self, cost: &CostMatrix) -> Result<(Vec<usize>, Duals), SolveError> {
        if !cost.is_square() {
            return Err(SolveError::NotSquare {
                rows: cost.rows(),
                columns: cost.columns(),
            });
        }
        if self.objective.is_maximize() {
            shortest_augmenting_paths(&cost.negated(), self.stop_flag)
        } else {
            shortest_augmenting_paths(cost, self.stop_flag)
        }
    }
}

/// Minimize the total cost of a square matrix.
pub fn solve(cost: &CostMatrix) -> Result<Assignment, SolveError> {
    Hungarian::new(Objective::Minimize).solve(cost)
}

/// Maximize the total cost of a square matrix.
pub fn maximize(cost: &CostMatrix) -> Result<Assignment, SolveError> {
    Hungarian::new(Objective::Maximize).solve(cost)
}

/// Core minimization. Column `n` is a virtual column used as the root of
/// every alternating tree.
fn shortest_augmenting_paths(
    cost: &CostMatrix,
    stop_flag: Option<&AtomicBool>,
) -> Result<(Vec<usize>, Duals), SolveError> {
    let n = cost.rows();
    let root = n;
    let mut u = cost
        .iter_rows()
        .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
        .collect::<Vec<_>>();
    let mut v = vec![0.0; n + 1];
    // Row matched to each column, and the previous column on the current
    // alternating path.
    let mut row_of = vec![UNMATCHED; n + 1];
    let mut way = vec![root; n + 1];
    let mut slack = vec![f64::INFINITY; n + 1];
    let mut visited = vec![false; n + 1];

    for row in 0..n {
        if stop_flag.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            debug!(completed = row, "Stop flag raised");
            return Err(SolveError::Interrupted {
                completed: row,
                total: n,
            });
        }
        row_of[root] = row;
        slack.fill(f64::INFINITY);
        visited.fill(false);
        let mut current = root;
        loop {
            visited[current] = true;
            let i = row_of[current];
            let costs = cost.row(i);
            let mut delta = f64::INFINITY;
            let mut next = root;
            for j in 0..n {
                if !visited[j] {
                    let reduced = costs[j] - u[i] - v[j];
                    if reduced < slack[j] {
                        slack[j] = reduced;
                        way[j] = current;
                    }
                    if slack[j] < delta {
                        delta = slack[j];
                        next = j;
                    }
                }
            }
            if !delta.is_finite() {
                debug!(row, "Reduced costs overflowed");
                return Err(SolveError::Overflow { row });
            }
            for j in 0..=n {
                if visited[j] {
                    u[row_of[j]] += delta;
                    v[j] -= delta;
                } else {
                    slack[j] -= delta;
                }
            }
            current = next;
            if row_of[current] == UNMATCHED {
                break;
            }
        }
        // Flip the alternating path back to the root.
        while current != root {
            let previous = way[current];
            row_of[current] = row_of[previous];
            current = previous;
        }
        trace!(row, "Row inserted");
    }

    let mut columns = vec![0; n];
    for (column, &row) in row_of[..n].iter().enumerate() {
        columns[row] = column;
    }
    v.truncate(n);
    Ok((columns, Duals { rows: u, columns: v }))
}
