use clap::{Parser, Subcommand};
use eyre::{Error, WrapErr, ensure};
use rassign::algos::Contender;
use rassign::config::Config;
use rassign::display::{display_bench, display_solution};
use rassign::hungarian::Hungarian;
use rassign::output::{self, Format};
use rassign::{Objective, bench, loaders, rectangular, stats};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{Level, info};

const DEFAULT_CONFIG: &str = "rassign.toml";

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Use FILE instead of rassign.toml
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the cost matrix stored in INPUT
    Solve {
        input: PathBuf,
        /// Write the result to OUTPUT instead of the standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Look for the assignment with the largest total cost
        #[arg(long)]
        maximize: bool,
        /// Result layout (indices, pairs, indicator)
        #[arg(short, long)]
        format: Option<Format>,
        /// Start the result with the elapsed milliseconds
        #[arg(long)]
        timing: bool,
    },
    /// Compare algorithms on random matrices
    Bench {
        #[arg(long)]
        rows: Option<usize>,
        #[arg(long)]
        columns: Option<usize>,
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Smallest random cost
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i32>,
        /// Largest random cost (exclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i32>,
        /// Algorithm to run, may be repeated (hungarian, pathfinding, greedy)
        #[arg(long = "contender")]
        contenders: Vec<Contender>,
        #[arg(long)]
        maximize: bool,
        /// Write one CSV line per run to FILE
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    match path {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG)),
        None => Ok(Config::default()),
    }
}

fn solve(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    objective: Objective,
    format: Format,
    timing: bool,
) -> Result<(), Error> {
    let cost = loaders::load(input)?;
    info!(
        rows = cost.rows(),
        columns = cost.columns(),
        %objective,
        "Cost matrix loaded"
    );
    let start = Instant::now();
    let result = rectangular::solve_with(&Hungarian::new(objective), &cost)?;
    let elapsed = start.elapsed();
    let timing = (timing || config.output.timing).then_some(elapsed);
    match output {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("cannot create {}", path.display()))?;
            output::write_result(&mut BufWriter::new(file), &result, format, timing)
                .wrap_err("cannot write result")?;
            display_solution(&cost, &result, objective, elapsed);
        }
        None => output::write_result(&mut io::stdout().lock(), &result, format, timing)
            .wrap_err("cannot write result")?,
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let mut config = load_config(args.config.as_deref())?;
    match args.command {
        Command::Solve {
            input,
            output,
            maximize,
            format,
            timing,
        } => {
            let objective = if maximize {
                Objective::Maximize
            } else {
                config.solver.objective
            };
            let format = format.unwrap_or(config.output.format);
            solve(&config, &input, output.as_deref(), objective, format, timing)
        }
        Command::Bench {
            rows,
            columns,
            iterations,
            seed,
            min,
            max,
            contenders,
            maximize,
            report,
        } => {
            let bench = &mut config.bench;
            bench.rows = rows.unwrap_or(bench.rows);
            bench.columns = columns.unwrap_or(bench.columns);
            bench.iterations = iterations.unwrap_or(bench.iterations);
            bench.seed = seed.or(bench.seed);
            bench.min_value = min.unwrap_or(bench.min_value);
            bench.max_value = max.unwrap_or(bench.max_value);
            if !contenders.is_empty() {
                bench.contenders = contenders;
            }
            let objective = if maximize {
                Objective::Maximize
            } else {
                config.solver.objective
            };
            let records = bench::run(&config.bench, objective)?;
            display_bench(&stats::summarize(&records, &config.bench.contenders));
            if let Some(path) = report {
                bench::write_report(&path, &records)?;
            }
            let invalid = records.iter().filter(|r| !r.valid).count();
            ensure!(invalid == 0, "{invalid} runs produced an invalid assignment");
            Ok(())
        }
    }
}
