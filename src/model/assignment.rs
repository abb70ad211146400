use super::CostMatrix;

/// A complete row to column assignment together with its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    columns: Vec<usize>,
    total_cost: f64,
}

impl Assignment {
    /// Build an assignment from the column chosen for every row, summing the
    /// corresponding entries of `cost`.
    ///
    /// # Panics
    ///
    /// Panics if a column does not index into `cost`.
    pub fn from_columns(cost: &CostMatrix, columns: Vec<usize>) -> Self {
        let total_cost = columns
            .iter()
            .enumerate()
            .map(|(row, &column)| cost[(row, column)])
            .sum();
        Self {
            columns,
            total_cost,
        }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// Column assigned to every row, indexed by row.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over the `(row, column)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().copied().enumerate()
    }

    /// Flattened n×n 0/1 matrix with a 1 on every assigned cell.
    pub fn indicator(&self) -> Vec<u8> {
        let n = self.columns.len();
        let mut flags = vec![0; n * n];
        for (row, column) in self.pairs() {
            flags[row * n + column] = 1;
        }
        flags
    }

    pub fn into_columns(self) -> Vec<usize> {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns() {
        let cost = CostMatrix::from_rows([[4.0, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0]]).unwrap();
        let a = Assignment::from_columns(&cost, vec![1, 0, 2]);
        assert_eq!(a.total_cost(), 5.0);
        assert_eq!(a.columns()[1], 0);
        assert_eq!(a.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (2, 2)]);
        assert_eq!(a.indicator(), vec![0, 1, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_empty() {
        let a = Assignment::empty();
        assert!(a.is_empty());
        assert_eq!(a.total_cost(), 0.0);
        assert!(a.indicator().is_empty());
    }
}
