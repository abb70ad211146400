use crate::algos::Contender;
use crate::model::{CostMatrix, Objective};
use crate::rectangular::RectangularAssignment;
use crate::stats::Summary;
use std::time::Duration;

pub fn display_solution(
    cost: &CostMatrix,
    result: &RectangularAssignment,
    objective: Objective,
    elapsed: Duration,
) {
    println!(
        "Total cost ({objective}): {}",
        result.total_cost()
    );
    println!(
        "Matched rows/total: {}/{}",
        result.matched(),
        cost.rows()
    );
    if !cost.is_square() {
        println!(
            "Padded from {}x{} to {n}x{n}",
            cost.rows(),
            cost.columns(),
            n = cost.rows().max(cost.columns())
        );
    }
    println!("Elapsed: {} ms", elapsed.as_millis());
}

pub fn display_bench(summaries: &[(Contender, Option<Summary>)]) {
    println!("Timings:");
    for (contender, summary) in summaries {
        match summary {
            Some(s) => {
                print!(
                    "  - {contender}: avg {:.2} ms, min {:.2} ms, max {:.2} ms, avg cost {:.2}, optimal {}/{}",
                    s.average_millis, s.min_millis, s.max_millis, s.average_cost, s.optimal_runs, s.runs
                );
                if s.invalid_runs > 0 {
                    print!(" ({} invalid)", s.invalid_runs);
                }
                println!();
            }
            None => println!("  - {contender}: no data"),
        }
    }
}
