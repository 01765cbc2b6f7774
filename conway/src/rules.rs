// rules.rs - Birth/survival thresholds

use serde::{Deserialize, Serialize};

use crate::cell::Fate;
use crate::error::{Error, Result};

/// Birth/survival thresholds of a Life-like automaton.
///
/// A live cell survives with `survival_min..=survival_max` live neighbours and
/// dies otherwise; a dead cell is born with exactly `birth`. The default is the
/// classic B3/S23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub survival_min: u8,
    pub survival_max: u8,
    pub birth: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl Rules {
    pub const CONWAY: Rules = Rules { survival_min: 2, survival_max: 3, birth: 3 };

    /// Largest neighbour count a Moore neighbourhood can produce.
    pub const MAX_NEIGHBORS: u8 = 8;

    pub fn new(survival_min: u8, survival_max: u8, birth: u8) -> Result<Self> {
        let rules = Self { survival_min, survival_max, birth };
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<()> {
        let ordered = self.survival_min <= self.survival_max;
        let in_range =
            self.survival_max <= Self::MAX_NEIGHBORS && self.birth <= Self::MAX_NEIGHBORS;
        if ordered && in_range {
            Ok(())
        } else {
            Err(Error::InvalidRules {
                survival_min: self.survival_min,
                survival_max: self.survival_max,
                birth: self.birth,
            })
        }
    }

    /// Decides a cell's next state from its current liveness and neighbour count.
    pub fn fate(&self, alive: bool, live_neighbors: u8) -> Fate {
        match (alive, live_neighbors) {
            (true, n) if n < self.survival_min => Fate::DiesOfUnderpopulation,
            (true, n) if n > self.survival_max => Fate::DiesOfOverpopulation,
            (true, _) => Fate::Survives,
            (false, n) if n == self.birth => Fate::Born,
            (false, _) => Fate::StaysDead,
        }
    }
}
