use crate::rectangular::RectangularAssignment;
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Duration;

/// Layout of a written result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One line per row holding its column, or -1 when unassigned.
    #[default]
    Indices,
    /// One `row column` line per assigned row.
    Pairs,
    /// The flattened rows×columns 0/1 matrix, one value per line.
    Indicator,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indices" => Ok(Self::Indices),
            "pairs" => Ok(Self::Pairs),
            "indicator" => Ok(Self::Indicator),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Indices => "indices",
            Self::Pairs => "pairs",
            Self::Indicator => "indicator",
        })
    }
}

/// Write `result` in the given format. When `elapsed` is set, the first
/// line holds the elapsed time in milliseconds.
pub fn write_result<W: Write>(
    w: &mut W,
    result: &RectangularAssignment,
    format: Format,
    elapsed: Option<Duration>,
) -> io::Result<()> {
    if let Some(elapsed) = elapsed {
        writeln!(w, "{}", elapsed.as_millis())?;
    }
    match format {
        Format::Indices => {
            for column in result.columns() {
                match column {
                    Some(c) => writeln!(w, "{c}")?,
                    None => writeln!(w, "-1")?,
                }
            }
        }
        Format::Pairs => {
            for (row, column) in result.pairs() {
                writeln!(w, "{row} {column}")?;
            }
        }
        Format::Indicator => {
            for flag in result.indicator() {
                writeln!(w, "{flag}")?;
            }
        }
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CostMatrix;
    use crate::rectangular;

    fn result() -> RectangularAssignment {
        let cost = CostMatrix::from_rows([[5.0, 1.0], [1.0, 5.0], [9.0, 9.0]]).unwrap();
        rectangular::solve(&cost).unwrap()
    }

    fn written(format: Format, elapsed: Option<Duration>) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, &result(), format, elapsed).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_indices() {
        assert_eq!(written(Format::Indices, None), "1\n0\n-1\n");
    }

    #[test]
    fn test_pairs_with_timing() {
        assert_eq!(
            written(Format::Pairs, Some(Duration::from_millis(42))),
            "42\n0 1\n1 0\n"
        );
    }

    #[test]
    fn test_indicator() {
        assert_eq!(written(Format::Indicator, None), "0\n1\n1\n0\n0\n0\n");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("pairs".parse::<Format>(), Ok(Format::Pairs));
        assert!("csv".parse::<Format>().is_err());
    }
}
