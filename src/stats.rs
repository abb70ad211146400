use crate::algos::Contender;
use crate::bench::Record;

/// Aggregated benchmark figures for one contender.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub runs: usize,
    pub optimal_runs: usize,
    pub invalid_runs: usize,
    pub average_millis: f64,
    pub min_millis: f64,
    pub max_millis: f64,
    pub average_cost: f64,
}

pub fn average(numbers: &[f64]) -> Option<f64> {
    (!numbers.is_empty()).then(|| numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Summarize `records` for every contender, in the given order. Contenders
/// without any record get `None`.
pub fn summarize(records: &[Record], contenders: &[Contender]) -> Vec<(Contender, Option<Summary>)> {
    contenders
        .iter()
        .map(|&contender| {
            let runs = records
                .iter()
                .filter(|r| r.contender == contender)
                .collect::<Vec<_>>();
            let millis = runs.iter().map(|r| r.millis).collect::<Vec<_>>();
            let costs = runs.iter().map(|r| r.total_cost).collect::<Vec<_>>();
            let summary = average(&millis).zip(average(&costs)).map(|(average_millis, average_cost)| Summary {
                runs: runs.len(),
                optimal_runs: runs.iter().filter(|r| r.optimal).count(),
                invalid_runs: runs.iter().filter(|r| !r.valid).count(),
                average_millis,
                min_millis: millis.iter().copied().fold(f64::INFINITY, f64::min),
                max_millis: millis.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                average_cost,
            });
            (contender, summary)
        })
        .collect()
}
