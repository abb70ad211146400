use crate::error::SolveError;
use std::ops::Index;

/// A dense, row-major matrix of finite costs. `cost[(i, j)]` is the cost of
/// assigning row `i` to column `j`.
///
/// A `CostMatrix` may be rectangular; the Hungarian solver itself only
/// accepts square ones, see [`crate::rectangular`] for the padding wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Build a matrix from its rows. Every row must have the same length as
    /// the first one and every entry must be finite.
    ///
    /// ```rust
    /// # use rassign::CostMatrix;
    /// let m = CostMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows<I, R, T>(rows: I) -> Result<Self, SolveError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let mut data = Vec::new();
        let mut columns = None;
        let mut nrows = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *columns.get_or_insert(row.len());
            if row.len() != expected {
                return Err(SolveError::RaggedRow {
                    row: i,
                    found: row.len(),
                    expected,
                });
            }
            data.extend(row.iter().map(|&c| c.into()));
            nrows += 1;
        }
        let matrix = Self {
            rows: nrows,
            columns: columns.unwrap_or(0),
            data,
        };
        matrix.check_finite()?;
        Ok(matrix)
    }

    /// Build a `rows`×`columns` matrix by calling `f(row, column)` for every
    /// cell.
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self, SolveError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let data = (0..rows)
            .flat_map(|i| (0..columns).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        let matrix = Self {
            rows,
            columns,
            data,
        };
        matrix.check_finite()?;
        Ok(matrix)
    }

    /// Every entry must be finite, and so must the difference between the
    /// largest and the smallest one.
    fn check_finite(&self) -> Result<(), SolveError> {
        let invalid = |pos: usize| SolveError::InvalidValue {
            row: pos / self.columns,
            column: pos % self.columns,
            value: self.data[pos],
        };
        if let Some(pos) = self.data.iter().position(|c| !c.is_finite()) {
            return Err(invalid(pos));
        }
        let (mut low, mut high) = (0, 0);
        for (pos, &c) in self.data.iter().enumerate() {
            if c < self.data[low] {
                low = pos;
            }
            if c > self.data[high] {
                high = pos;
            }
        }
        if !self.data.is_empty() && !(self.data[high] - self.data[low]).is_finite() {
            return Err(invalid(high));
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the costs of row `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.columns..(i + 1) * self.columns]
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        (row < self.rows && column < self.columns).then(|| self.data[row * self.columns + column])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(|i| self.row(i))
    }

    /// Matrix with every cost negated, used to turn a maximization into a
    /// minimization.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            data: self.data.iter().map(|c| -c).collect(),
            ..self.clone()
        }
    }

    /// Largest absolute cost, or 0 for an empty matrix.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |m, c| m.max(c.abs()))
    }

    /// Square matrix of side `max(rows, columns)` where the added cells hold
    /// `sentinel`.
    #[must_use]
    pub fn padded(&self, sentinel: f64) -> Self {
        let size = self.rows.max(self.columns);
        let mut data = vec![sentinel; size * size];
        for (i, row) in self.iter_rows().enumerate() {
            data[i * size..i * size + self.columns].copy_from_slice(row);
        }
        Self {
            rows: size,
            columns: size,
            data,
        }
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for a {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.data[row * self.columns + column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = CostMatrix::from_rows(vec![vec![1u16, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!((m.rows(), m.columns()), (2, 3));
        assert!(!m.is_square());
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_empty() {
        let m = CostMatrix::from_rows(Vec::<Vec<f64>>::new()).unwrap();
        assert!(m.is_empty());
        assert!(m.is_square());
        assert_eq!(m.max_abs(), 0.0);
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(SolveError::RaggedRow {
                row: 1,
                found: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_non_finite() {
        let err = CostMatrix::from_rows([[1.0, 2.0], [f64::INFINITY, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidValue {
                row: 1,
                column: 0,
                ..
            }
        ));
        let err = CostMatrix::from_fn(2, 2, |i, j| if i == j { f64::NAN } else { 0.0 }).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidValue {
                row: 0,
                column: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_range_too_wide() {
        let err = CostMatrix::from_rows([[1e308, -1e308], [1e308, -1e308]]).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidValue {
                row: 0,
                column: 0,
                value: 1e308
            }
        );
        assert!(CostMatrix::from_rows([[1e308, 0.0], [-7e307, 1.0]]).is_ok());
    }

    #[test]
    fn test_negated_and_max_abs() {
        let m = CostMatrix::from_rows([[1.0, -7.5], [3.0, 0.0]]).unwrap();
        assert_eq!(m.max_abs(), 7.5);
        assert_eq!(m.negated().row(0), &[-1.0, 7.5]);
    }

    #[test]
    fn test_padded() {
        let m = CostMatrix::from_rows([[1.0, 2.0, 3.0]]).unwrap();
        let p = m.padded(9.0);
        assert!(p.is_square());
        assert_eq!(p.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(p.row(2), &[9.0, 9.0, 9.0]);
        let m = CostMatrix::from_rows([[1.0], [2.0]]).unwrap();
        assert_eq!(m.padded(0.5).row(1), &[2.0, 0.5]);
    }
}
