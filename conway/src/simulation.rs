// simulation.rs - Driving loop: generations, fixed-point detection, reseeding

use std::fmt;
use std::ops::ControlFlow;

use rand::Rng;
use tracing::debug;

use crate::config::GridConfig;
use crate::error::Result;
use crate::evolution::Evolution;
use crate::grid::Grid;
use crate::rules::Rules;

/// Where the driving loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly seeded or edited, not stepped yet.
    Seeded,
    /// At least one step taken and the last one changed the grid.
    Stepping,
    /// The last step left the grid unchanged. Terminal until reseeded.
    Stable,
}

/// Result of one step, for rendering and reporting sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    /// Whether this generation differs from the previous one.
    pub changed: bool,
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

/// How [`Simulation::run`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Stable { generation: u64 },
    Cancelled { generation: u64 },
    Exhausted { generation: u64 },
}

/// Owns a grid and steps it until it reaches a fixed point.
///
/// The generation counter belongs here, not to the grid.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: GridConfig,
    grid: Grid,
    phase: Phase,
    generation: u64,
}

impl Simulation {
    pub fn new<R: Rng>(config: GridConfig, rng: &mut R) -> Result<Self> {
        let grid = Grid::initialize(&config, rng)?;
        Ok(Self { config, grid, phase: Phase::Seeded, generation: 0 })
    }

    /// Drives an existing grid. `config` keeps the grid's size and topology;
    /// its density only matters for later reseeds.
    pub fn from_grid(grid: Grid, rules: Rules) -> Result<Self> {
        rules.validate()?;
        let config = GridConfig {
            size: grid.size(),
            density: 0.0,
            topology: grid.topology(),
            rules,
        };
        Ok(Self { config, grid, phase: Phase::Seeded, generation: 0 })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> &Rules {
        &self.config.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stable(&self) -> bool {
        self.phase == Phase::Stable
    }

    /// Seeds a new grid from the current configuration.
    pub fn reseed<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.grid = Grid::initialize(&self.config, rng)?;
        self.restart();
        debug!(population = self.grid.population(), "reseeded");
        Ok(())
    }

    /// Swaps in a new configuration and reseeds. On error nothing changes.
    pub fn reconfigure<R: Rng>(&mut self, config: GridConfig, rng: &mut R) -> Result<()> {
        let grid = Grid::initialize(&config, rng)?;
        debug!(?config, "reconfigured");
        self.config = config;
        self.grid = grid;
        self.restart();
        Ok(())
    }

    /// Mutates the grid between generations, e.g. toggling cells or clearing.
    /// Any edit counts as a new seed.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut Grid) -> T) -> T {
        let result = f(&mut self.grid);
        self.restart();
        result
    }

    /// Replaces the grid wholesale, adopting its size and topology.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.config.size = grid.size();
        self.config.topology = grid.topology();
        self.grid = grid;
        self.restart();
    }

    fn restart(&mut self) {
        self.phase = Phase::Seeded;
        self.generation = 0;
    }

    /// Advances one generation and compares it to the one before.
    ///
    /// Returns `None` once the grid is stable; only a reseed or edit moves it
    /// out of that state.
    pub fn step(&mut self) -> Option<StepReport> {
        if self.phase == Phase::Stable {
            return None;
        }
        let previous = self.grid.copy();
        let Evolution { births, deaths } = self.grid.evolve(&self.config.rules);
        self.generation += 1;

        let changed = !previous.equal(&self.grid);
        if changed {
            self.phase = Phase::Stepping;
        } else {
            self.phase = Phase::Stable;
            debug!(generation = self.generation, "fixed point reached");
        }
        Some(StepReport {
            generation: self.generation,
            changed,
            births,
            deaths,
            population: self.grid.population(),
        })
    }

    /// Steps until stable, until `max_generations` more steps have run, or
    /// until `on_step` breaks. `on_step` sees each completed generation.
    pub fn run<F>(&mut self, max_generations: Option<u64>, mut on_step: F) -> RunOutcome
    where
        F: FnMut(&Grid, &StepReport) -> ControlFlow<()>,
    {
        let mut taken = 0;
        loop {
            if max_generations.is_some_and(|max| taken >= max) {
                return RunOutcome::Exhausted { generation: self.generation };
            }
            let Some(report) = self.step() else {
                return RunOutcome::Stable { generation: self.generation };
            };
            taken += 1;
            if on_step(&self.grid, &report).is_break() {
                return RunOutcome::Cancelled { generation: self.generation };
            }
            if !report.changed {
                return RunOutcome::Stable { generation: self.generation };
            }
        }
    }

    /// Status line for the current generation.
    pub fn status(&self) -> Status {
        Status { generation: self.generation, game_over: self.is_stable() }
    }
}

/// `Generation N`, followed by `GAME OVER` once stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub generation: u64,
    pub game_over: bool,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation {}", self.generation)?;
        if self.game_over {
            f.write_str("\n\nGAME OVER")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn blinker() -> Simulation {
        let grid = Grid::from_live_cells(5, Topology::BOUNDED, [(1, 2), (2, 2), (3, 2)]).unwrap();
        Simulation::from_grid(grid, Rules::default()).unwrap()
    }

    #[test]
    fn empty_grid_is_stable_after_one_step() {
        let grid = Grid::new(4, Topology::TORUS).unwrap();
        let mut sim = Simulation::from_grid(grid, Rules::default()).unwrap();
        assert_eq!(sim.phase(), Phase::Seeded);

        let report = sim.step().unwrap();
        assert!(!report.changed);
        assert_eq!(report.generation, 1);
        assert_eq!(sim.phase(), Phase::Stable);
        assert!(sim.step().is_none());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn oscillator_keeps_stepping() {
        let mut sim = blinker();
        for generation in 1..=6 {
            let report = sim.step().unwrap();
            assert!(report.changed);
            assert_eq!(report.generation, generation);
            assert_eq!(report.population, 3);
            assert_eq!(sim.phase(), Phase::Stepping);
        }
    }

    #[test]
    fn run_stops_at_a_fixed_point() {
        let grid = Grid::from_live_cells(4, Topology::BOUNDED, [(0, 0), (3, 3)]).unwrap();
        let mut sim = Simulation::from_grid(grid, Rules::default()).unwrap();
        let mut seen = Vec::new();
        let outcome = sim.run(None, |grid, report| {
            seen.push((report.generation, grid.population()));
            ControlFlow::Continue(())
        });
        // Both cells die in generation 1; generation 2 repeats it.
        assert_eq!(outcome, RunOutcome::Stable { generation: 2 });
        assert_eq!(seen, vec![(1, 0), (2, 0)]);
        assert_eq!(sim.status().to_string(), "Generation 2\n\nGAME OVER");
    }

    #[test]
    fn run_honours_cancellation_and_limits() {
        let mut sim = blinker();
        let outcome = sim.run(None, |_, report| {
            if report.generation == 3 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        });
        assert_eq!(outcome, RunOutcome::Cancelled { generation: 3 });

        let outcome = sim.run(Some(4), |_, _| ControlFlow::Continue(()));
        assert_eq!(outcome, RunOutcome::Exhausted { generation: 7 });
        assert_eq!(sim.status().to_string(), "Generation 7");
    }

    #[test]
    fn reseed_leaves_the_stable_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = GridConfig::new(6, 0.0, Topology::BOUNDED);
        let mut sim = Simulation::new(config, &mut rng).unwrap();
        sim.step();
        assert!(sim.is_stable());

        sim.reseed(&mut rng).unwrap();
        assert_eq!(sim.phase(), Phase::Seeded);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn reconfigure_is_all_or_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut sim = Simulation::new(GridConfig::default(), &mut rng).unwrap();
        assert!(sim.reconfigure(GridConfig::new(0, 0.3, Topology::TORUS), &mut rng).is_err());
        assert_eq!(sim.grid().size(), 20);

        sim.reconfigure(GridConfig::new(8, 1.0, Topology::TORUS), &mut rng).unwrap();
        assert_eq!(sim.grid().size(), 8);
        assert_eq!(sim.grid().topology(), Topology::TORUS);
        assert_eq!(sim.grid().population(), 64);
    }

    #[test]
    fn edits_restart_the_count() {
        let mut sim = blinker();
        sim.step();
        sim.step();
        let alive = sim.edit(|grid| grid.toggle(0, 0)).unwrap();
        assert!(alive);
        assert_eq!(sim.phase(), Phase::Seeded);
        assert_eq!(sim.generation(), 0);
        let cell = sim.grid().cell(1, 1).unwrap();
        assert_eq!(cell.live_neighbors(), sim.grid().live_neighbors(cell));
    }

    #[test]
    fn replace_grid_adopts_its_shape() {
        let mut sim = blinker();
        sim.replace_grid(Grid::new(9, Topology::TORUS).unwrap());
        assert_eq!(sim.config().size, 9);
        assert_eq!(sim.config().topology, Topology::TORUS);
        assert_eq!(sim.phase(), Phase::Seeded);
    }

    #[test]
    fn invalid_rules_are_refused() {
        let grid = Grid::new(3, Topology::BOUNDED).unwrap();
        let rules = Rules { survival_min: 4, survival_max: 2, birth: 3 };
        assert!(Simulation::from_grid(grid, rules).is_err());
    }
}
