pub use self::algo::Algo;
pub use self::greedy::Greedy;
pub use self::reference::Reference;

use crate::hungarian::Hungarian;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod algo;
mod greedy;
mod hungarian;
mod reference;

/// Algorithms that can be compared against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contender {
    Hungarian,
    Pathfinding,
    Greedy,
}

impl Contender {
    pub const ALL: [Contender; 3] = [Self::Hungarian, Self::Pathfinding, Self::Greedy];

    pub fn algo(self) -> Box<dyn Algo> {
        match self {
            Self::Hungarian => Box::new(Hungarian::default()),
            Self::Pathfinding => Box::new(Reference),
            Self::Greedy => Box::new(Greedy),
        }
    }

    /// Does this contender always return an optimal assignment?
    pub fn is_exact(self) -> bool {
        !matches!(self, Self::Greedy)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hungarian => "hungarian",
            Self::Pathfinding => "pathfinding",
            Self::Greedy => "greedy",
        }
    }
}

impl fmt::Display for Contender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Contender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown algorithm: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contender_names() {
        for c in Contender::ALL {
            assert_eq!(c.name().parse::<Contender>().unwrap(), c);
            assert_eq!(c.algo().name(), c.name());
        }
        assert!("ordering".parse::<Contender>().is_err());
    }
}
