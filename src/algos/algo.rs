use crate::model::{Assignment, CostMatrix, Objective};
use eyre::Error;

pub trait Algo {
    fn name(&self) -> &'static str;
    /// Assign every row of a square matrix to a distinct column.
    fn assign(&self, cost: &CostMatrix, objective: Objective) -> Result<Assignment, Error>;
}
