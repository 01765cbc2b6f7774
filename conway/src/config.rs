// config.rs - Size/density/topology configuration for a grid

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rules::Rules;
use crate::topology::Topology;

/// Everything needed to seed a grid and evolve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Probability that a cell starts alive. Values outside `[0, 1]` are
    /// accepted and give all-dead or all-alive grids.
    pub density: f64,
    pub topology: Topology,
    pub rules: Rules,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 20,
            density: 0.3,
            topology: Topology::BOUNDED,
            rules: Rules::CONWAY,
        }
    }
}

impl GridConfig {
    pub const MAX_SIZE: usize = 1024;

    pub fn new(size: usize, density: f64, topology: Topology) -> Self {
        Self { size, density, topology, ..Self::default() }
    }

    /// Density given as a whole percentage, the way the configuration form takes it.
    pub fn with_percent(mut self, percent: u32) -> Self {
        self.density = f64::from(percent) / 100.0;
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_size(self.size)?;
        self.rules.validate()
    }
}

pub(crate) fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::ZeroSize);
    }
    if size > GridConfig::MAX_SIZE {
        return Err(Error::SizeTooLarge { size, max: GridConfig::MAX_SIZE });
    }
    Ok(())
}
