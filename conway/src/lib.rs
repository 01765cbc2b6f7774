//! Cellular-automaton engine for Conway's Game of Life.
//!
//! A [`Grid`] of [`Cell`]s is evolved generation by generation under a
//! per-axis [`Topology`]: each axis either wraps around or clamps at its
//! edges. [`Simulation`] drives the grid and stops at a fixed point.
//!
//! ```
//! use conway::{GridConfig, Simulation, Topology};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let config = GridConfig::new(20, 0.3, Topology::TORUS);
//! let mut sim = Simulation::new(config, &mut rng).unwrap();
//! while let Some(report) = sim.step() {
//!     if !report.changed || report.generation == 100 {
//!         break;
//!     }
//! }
//! println!("{}", sim.grid().snapshot());
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod evolution;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod simulation;
pub mod snapshot;
pub mod topology;

pub use cell::{Cell, CellId, Fate};
pub use config::GridConfig;
pub use error::{Error, Result};
pub use evolution::Evolution;
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use rules::Rules;
pub use simulation::{Phase, RunOutcome, Simulation, Status, StepReport};
pub use snapshot::Snapshot;
pub use topology::Topology;
