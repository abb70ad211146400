//! Solve linear assignment problems with the Hungarian method.
//!
//! Given an n×n cost matrix, find the one-to-one matching of rows to
//! columns with the smallest (or largest) total cost.

pub mod algos;
pub mod bench;
pub mod checks;
pub mod config;
pub mod display;
pub mod error;
pub mod hungarian;
pub mod loaders;
pub mod model;
pub mod output;
pub mod rectangular;
pub mod stats;

#[cfg(test)]
mod testing;

pub use crate::error::SolveError;
pub use crate::model::{Assignment, CostMatrix, Objective};
