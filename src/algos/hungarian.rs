use super::Algo;
use crate::hungarian::Hungarian;
use crate::model::{Assignment, CostMatrix, Objective};
use eyre::Error;

impl Algo for Hungarian<'_> {
    fn name(&self) -> &'static str {
        "hungarian"
    }

    fn assign(&self, cost: &CostMatrix, objective: Objective) -> Result<Assignment, Error> {
        Ok(self.with_objective(objective).solve(cost)?)
    }
}
