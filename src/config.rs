use crate::algos::Contender;
use crate::model::Objective;
use crate::output::Format;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Content of the TOML configuration file. Every section and key is
/// optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub solver: SolverConfig,
    pub output: OutputConfig,
    pub bench: BenchConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub objective: Objective,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Format,
    /// Write the elapsed milliseconds as the first output line.
    pub timing: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub rows: usize,
    pub columns: usize,
    pub iterations: usize,
    /// Smallest random cost (inclusive).
    pub min_value: i32,
    /// Largest random cost (exclusive).
    pub max_value: i32,
    pub seed: Option<u64>,
    pub contenders: Vec<Contender>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rows: 200,
            columns: 200,
            iterations: 5,
            min_value: 0,
            max_value: 30,
            seed: None,
            contenders: Contender::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, Error> {
        fs::read_to_string(path)
            .wrap_err("cannot load configuration file")?
            .parse::<Config>()
            .wrap_err_with(|| format!("in {}", path.display()))
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).wrap_err("cannot parse configuration file")
    }
}
