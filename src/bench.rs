//! Compare assignment algorithms on random integer matrices.

use crate::algos::Contender;
use crate::checks;
use crate::config::BenchConfig;
use crate::model::{Assignment, CostMatrix, Objective};
use crate::rectangular;
use eyre::{Error, WrapErr, ensure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Outcome of one contender on one random matrix.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub iteration: usize,
    pub contender: Contender,
    pub rows: usize,
    pub columns: usize,
    pub millis: f64,
    /// Cost of the real cells, padding excluded.
    pub total_cost: f64,
    pub valid: bool,
    /// Whether the cost equals the best one found by an exact contender.
    pub optimal: bool,
    pub gap: f64,
}

/// Random `rows`×`columns` matrix of integers drawn from `min..max`.
pub fn random_cost<R: Rng>(
    rng: &mut R,
    rows: usize,
    columns: usize,
    min: i32,
    max: i32,
) -> Result<CostMatrix, Error> {
    Ok(CostMatrix::from_fn(rows, columns, |_, _| {
        f64::from(rng.random_range(min..max))
    })?)
}

/// Cost of the cells of `a` lying inside the original `cost` matrix.
fn real_cost(cost: &CostMatrix, a: &Assignment) -> f64 {
    a.pairs()
        .filter(|&(i, j)| i < cost.rows() && j < cost.columns())
        .map(|(i, j)| cost[(i, j)])
        .sum()
}

fn is_better(objective: Objective, a: f64, b: f64) -> bool {
    if objective.is_maximize() { a > b } else { a < b }
}

fn same_cost(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

/// Run every configured contender on `config.iterations` random matrices.
/// Rectangular matrices are padded before being handed to the contenders.
#[instrument(skip_all, fields(rows = config.rows, columns = config.columns))]
pub fn run(config: &BenchConfig, objective: Objective) -> Result<Vec<Record>, Error> {
    ensure!(
        config.rows > 0 && config.columns > 0,
        "benchmark matrices cannot be empty"
    );
    ensure!(
        config.min_value < config.max_value,
        "min_value ({}) must be below max_value ({})",
        config.min_value,
        config.max_value
    );
    ensure!(!config.contenders.is_empty(), "no algorithm to benchmark");
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut records = Vec::new();
    for iteration in 0..config.iterations {
        info!(iteration, "Starting iteration");
        let cost = random_cost(
            &mut rng,
            config.rows,
            config.columns,
            config.min_value,
            config.max_value,
        )?;
        let square = if cost.is_square() {
            cost.clone()
        } else {
            cost.padded(rectangular::sentinel(&cost))
        };
        let mut runs = Vec::new();
        for &contender in &config.contenders {
            let algo = contender.algo();
            let start = Instant::now();
            let result = algo.assign(&square, objective);
            let millis = start.elapsed().as_secs_f64() * 1000.0;
            match result {
                Ok(a) => {
                    let valid = match checks::check_plan(&square, &a) {
                        Ok(()) => true,
                        Err(e) => {
                            warn!(%contender, error = %e, "Invalid plan");
                            false
                        }
                    };
                    debug!(%contender, millis, total_cost = real_cost(&cost, &a), "Contender done");
                    runs.push((contender, millis, real_cost(&cost, &a), valid));
                }
                Err(e) => warn!(%contender, error = %e, "Algorithm failed"),
            }
        }
        let exact = runs
            .iter()
            .filter(|&&(c, _, _, valid)| valid && c.is_exact())
            .map(|&(_, _, cost, _)| cost)
            .collect::<Vec<_>>();
        if exact.windows(2).any(|w| !same_cost(w[0], w[1])) {
            warn!(iteration, costs = ?exact, "Exact algorithms disagree");
        }
        let candidates: Vec<f64> = if exact.is_empty() {
            runs.iter().map(|&(_, _, cost, _)| cost).collect()
        } else {
            exact
        };
        let best = candidates
            .into_iter()
            .reduce(|b, c| if is_better(objective, c, b) { c } else { b });
        for (contender, millis, total_cost, valid) in runs {
            let gap = best.map_or(0.0, |b| (total_cost - b).abs());
            records.push(Record {
                iteration,
                contender,
                rows: cost.rows(),
                columns: cost.columns(),
                millis,
                total_cost,
                valid,
                optimal: best.is_some_and(|b| same_cost(total_cost, b)),
                gap,
            });
        }
    }
    Ok(records)
}

/// Write `records` as CSV, with a header line.
pub fn write_records<W: io::Write>(w: W, records: &[Record]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(w);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_report(path: &Path, records: &[Record]) -> Result<(), Error> {
    let file = std::fs::File::create(path)
        .wrap_err_with(|| format!("cannot create report file {}", path.display()))?;
    write_records(file, records).wrap_err("cannot write benchmark report")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: usize, columns: usize) -> BenchConfig {
        BenchConfig {
            rows,
            columns,
            iterations: 3,
            min_value: 0,
            max_value: 30,
            seed: Some(1),
            contenders: Contender::ALL.to_vec(),
        }
    }

    #[test]
    fn test_random_cost_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = random_cost(&mut rng, 10, 12, 5, 8).unwrap();
        assert_eq!((m.rows(), m.columns()), (10, 12));
        assert!(m.iter_rows().flatten().all(|&c| (5.0..8.0).contains(&c) && c.fract() == 0.0));
    }

    #[test]
    fn test_square_bench() {
        let records = run(&config(30, 30), Objective::Minimize).unwrap();
        assert_eq!(records.len(), 9);
        for r in &records {
            assert!(r.valid);
            if r.contender.is_exact() {
                assert!(r.optimal, "{r:?}");
                assert_eq!(r.gap, 0.0);
            }
        }
        for iteration in 0..3 {
            let costs = records
                .iter()
                .filter(|r| r.iteration == iteration)
                .map(|r| (r.contender, r.total_cost))
                .collect::<Vec<_>>();
            let optimum = costs[0].1;
            assert!(costs.iter().all(|&(_, c)| c >= optimum));
        }
    }

    #[test]
    fn test_rectangular_bench_maximize() {
        let records = run(&config(12, 20), Objective::Maximize).unwrap();
        for r in records.iter().filter(|r| r.contender.is_exact()) {
            assert!(r.valid && r.optimal, "{r:?}");
            assert_eq!((r.rows, r.columns), (12, 20));
        }
    }

    #[test]
    fn test_same_seed_same_costs() {
        let a = run(&config(8, 8), Objective::Minimize).unwrap();
        let b = run(&config(8, 8), Objective::Minimize).unwrap();
        let costs = |records: &[Record]| records.iter().map(|r| r.total_cost).collect::<Vec<_>>();
        assert_eq!(costs(&a), costs(&b));
    }

    #[test]
    fn test_invalid_config() {
        let mut c = config(5, 5);
        c.max_value = 0;
        assert!(run(&c, Objective::Minimize).is_err());
        let mut c = config(5, 5);
        c.contenders.clear();
        assert!(run(&c, Objective::Minimize).is_err());
        assert!(run(&config(0, 5), Objective::Minimize).is_err());
    }

    #[test]
    fn test_csv_report() {
        let records = run(&config(4, 4), Objective::Minimize).unwrap();
        let mut buf = Vec::new();
        write_records(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("iteration,contender,rows,columns,millis,total_cost,valid,optimal,gap")
        );
        assert_eq!(lines.count(), records.len());
        assert!(text.contains(",hungarian,4,4,"));
    }
}
