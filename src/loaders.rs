use crate::model::CostMatrix;
use eyre::{Error, WrapErr, bail, ensure, eyre};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a cost matrix from a file, see [`parse`] for the format.
pub fn load(path: &Path) -> Result<CostMatrix, Error> {
    let text = fs::read_to_string(path).wrap_err_with(|| format!("cannot read {}", path.display()))?;
    parse(&text).wrap_err_with(|| format!("cannot load cost matrix from {}", path.display()))
}

/// Parse a cost matrix.
///
/// The first line holds either a single dimension `n` for a square matrix,
/// or `rows columns`, possibly followed by the first values. Values follow
/// in row-major order, separated by any whitespace.
pub fn parse(text: &str) -> Result<CostMatrix, Error> {
    let mut lines = text.lines().skip_while(|l| l.trim().is_empty());
    let header = lines.next().ok_or_else(|| eyre!("missing header line"))?;
    let mut header_tokens = header.split_whitespace();
    let mut dimension = || -> Result<Option<usize>, Error> {
        header_tokens
            .next()
            .map(|t| t.parse::<usize>().wrap_err_with(|| format!("invalid dimension {t:?}")))
            .transpose()
    };
    let (rows, columns) = match (dimension()?, dimension()?) {
        (Some(n), None) => (n, n),
        (Some(rows), Some(columns)) => (rows, columns),
        _ => bail!("missing dimensions in header"),
    };
    let size = rows
        .checked_mul(columns)
        .ok_or_else(|| eyre!("a {rows}x{columns} matrix is too large"))?;
    let tokens = header_tokens.chain(lines.flat_map(str::split_whitespace));
    let mut values = Vec::new();
    for (k, token) in tokens.enumerate() {
        ensure!(
            k < size,
            "too many values for a {rows}x{columns} matrix"
        );
        let (row, column) = (k / columns, k % columns);
        values.push(
            token
                .parse::<f64>()
                .wrap_err_with(|| format!("invalid value {token:?} at row {row}, column {column}"))?,
        );
    }
    ensure!(
        values.len() == size,
        "expected {size} values for a {rows}x{columns} matrix, found {}",
        values.len()
    );
    debug!(rows, columns, "Cost matrix loaded");
    Ok(CostMatrix::from_fn(rows, columns, |i, j| values[i * columns + j])?)
}
