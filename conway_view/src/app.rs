// app.rs - Viewer state: the simulation plus the configuration form

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use conway::{Grid, GridConfig, PATTERNS, Pattern, Simulation, StepReport, Topology};
use egui::Color32;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

/// Values shown in the configuration form. Any change reseeds the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Form {
    pub size: usize,
    pub percent: u32,
    pub wrap_east_west: bool,
    pub wrap_north_south: bool,
}

impl Form {
    /// Sizes the form offers; the same bound the engine validates against.
    pub const SIZE_RANGE: RangeInclusive<usize> = 1..=GridConfig::MAX_SIZE;

    fn from_config(config: &GridConfig) -> Self {
        Self {
            size: config.size,
            percent: (config.density * 100.0).round().clamp(0.0, 100.0) as u32,
            wrap_east_west: config.topology.wrap_east_west,
            wrap_north_south: config.topology.wrap_north_south,
        }
    }

    fn to_config(self, base: &GridConfig) -> GridConfig {
        GridConfig {
            size: self.size,
            topology: Topology::new(self.wrap_east_west, self.wrap_north_south),
            ..base.clone()
        }
        .with_percent(self.percent)
    }
}

pub struct LifeView {
    pub(crate) sim: Simulation,
    rng: ChaCha8Rng,
    pub form: Form,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub last_report: Option<StepReport>,
    pub message: Option<String>,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeView {
    pub fn new(config: GridConfig, seed: u64, update_interval: Duration) -> conway::Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let form = Form::from_config(&config);
        let sim = Simulation::new(config, &mut rng)?;
        Ok(Self {
            sim,
            rng,
            form,
            is_running: false,
            last_update: Instant::now(),
            update_interval,
            last_report: None,
            message: None,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.sim.grid()
    }

    /// Applies the form: new size, density or topology means a fresh seed.
    pub fn apply_form(&mut self) {
        self.is_running = false;
        let config = self.form.to_config(self.sim.config());
        match self.sim.reconfigure(config, &mut self.rng) {
            Ok(()) => self.settle(None),
            Err(err) => {
                warn!(%err, "configuration rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn reseed(&mut self) {
        self.is_running = false;
        match self.sim.reseed(&mut self.rng) {
            Ok(()) => self.settle(None),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn clear(&mut self) {
        self.is_running = false;
        self.sim.edit(Grid::clear);
        self.settle(None);
    }

    pub fn apply_selected_pattern(&mut self) {
        self.is_running = false;
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        self.apply_pattern(pattern);
    }

    fn apply_pattern(&mut self, pattern: &Pattern) {
        match pattern.place(self.sim.config().size, self.sim.config().topology) {
            Ok(grid) => {
                self.sim.replace_grid(grid);
                self.settle(Some(format!("{} placed", pattern.name)));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if let Err(err) = self.sim.edit(|grid| grid.toggle(x, y)) {
            self.message = Some(err.to_string());
        }
        self.last_report = None;
    }

    fn settle(&mut self, message: Option<String>) {
        self.last_report = None;
        self.message = message;
    }

    /// Steps once if running and the interval has elapsed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running || self.last_update.elapsed() < self.update_interval {
            return false;
        }
        self.last_update = Instant::now();
        self.step_once();
        true
    }

    pub fn step_once(&mut self) {
        match self.sim.step() {
            Some(report) => {
                if !report.changed {
                    let (generation, population) = (report.generation, report.population);
                    info!(generation, population, "game over");
                    self.is_running = false;
                }
                self.last_report = Some(report);
            }
            None => self.is_running = false,
        }
    }

    pub fn status(&self) -> String {
        self.sim.status().to_string()
    }
}
