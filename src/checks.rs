use crate::model::{Assignment, CostMatrix};
use eyre::{Error, bail, ensure, eyre};

/// Check that every row of an n×n problem got a distinct column.
pub fn ensure_permutation(a: &Assignment, n: usize) -> Result<(), Error> {
    ensure!(
        a.len() == n,
        "plan is invalid, expected {n} rows, got {}",
        a.len()
    );
    let mut seen = vec![false; n];
    for (row, column) in a.pairs() {
        if column >= n {
            bail!("plan is invalid, row {row} assigned to column {column} out of {n}");
        }
        if std::mem::replace(&mut seen[column], true) {
            bail!("plan is invalid, column {column} assigned twice");
        }
    }
    Ok(())
}

/// Check that the reported total matches the sum of the chosen cells.
pub fn ensure_consistent_cost(cost: &CostMatrix, a: &Assignment) -> Result<(), Error> {
    let sum = a
        .pairs()
        .map(|(i, j)| {
            cost.get(i, j)
                .ok_or_else(|| eyre!("plan is invalid, cell ({i}, {j}) is outside the matrix"))
        })
        .sum::<Result<f64, Error>>()?;
    ensure!(
        (sum - a.total_cost()).abs() <= 1e-9 * (1.0 + sum.abs()),
        "reported total cost {} differs from the assigned cells sum {sum}",
        a.total_cost()
    );
    Ok(())
}

pub fn check_plan(cost: &CostMatrix, a: &Assignment) -> Result<(), Error> {
    ensure_permutation(a, cost.rows())?;
    ensure_consistent_cost(cost, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost() -> CostMatrix {
        CostMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    #[test]
    fn test_valid_plan() {
        let a = Assignment::from_columns(&cost(), vec![1, 0]);
        assert!(check_plan(&cost(), &a).is_ok());
    }

    #[test]
    fn test_duplicate_column() {
        let a = Assignment::from_columns(&cost(), vec![1, 1]);
        let err = check_plan(&cost(), &a).unwrap_err();
        assert!(err.to_string().contains("column 1 assigned twice"));
    }

    #[test]
    fn test_wrong_length() {
        let a = Assignment::from_columns(&cost(), vec![0]);
        assert!(ensure_permutation(&a, 2).is_err());
    }

    #[test]
    fn test_cell_outside_matrix() {
        let larger = CostMatrix::from_rows([[4.0, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0]]).unwrap();
        let a = Assignment::from_columns(&larger, vec![1, 0, 2]);
        let err = ensure_consistent_cost(&cost(), &a).unwrap_err();
        assert!(err.to_string().contains("cell (2, 2) is outside the matrix"));
    }
}
