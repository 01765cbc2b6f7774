// evolution.rs - One generation of the birth/survival rule

use tracing::trace;

use crate::cell::{Cell, Fate};
use crate::grid::Grid;
use crate::rules::Rules;

/// What one generation did to the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evolution {
    pub births: usize,
    pub deaths: usize,
}

impl Evolution {
    pub fn changed(&self) -> bool {
        self.births + self.deaths > 0
    }
}

impl Grid {
    /// Predicts every cell's fate without touching the grid.
    pub fn peek<'a>(&'a self, rules: &'a Rules) -> impl Iterator<Item = (&'a Cell, Fate)> + 'a {
        self.cells()
            .iter()
            .map(move |cell| (cell, rules.fate(cell.is_alive(), cell.live_neighbors())))
    }

    /// Advances one generation.
    ///
    /// Fates come from the cached counts of the previous generation, so no
    /// transition can see another made in the same step. Counts are recomputed
    /// once every transition has been applied.
    pub fn evolve(&mut self, rules: &Rules) -> Evolution {
        let mut evolution = Evolution::default();
        for cell in self.cells_mut() {
            let fate = rules.fate(cell.alive, cell.live_neighbors);
            match fate {
                Fate::Born => evolution.births += 1,
                Fate::DiesOfUnderpopulation | Fate::DiesOfOverpopulation => evolution.deaths += 1,
                Fate::Survives | Fate::StaysDead => continue,
            }
            trace!(cell = %cell.id(), x = cell.x(), y = cell.y(), "{fate}");
            cell.alive = fate.is_alive();
        }
        self.recount();
        trace!(births = evolution.births, deaths = evolution.deaths, "generation evolved");
        evolution
    }
}
