// main.rs - Windowed driver for the Game of Life engine

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use conway::GridConfig;
use eframe::egui;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::LifeView;

#[derive(Parser, Debug)]
#[command(name = "conway_view", about = "Conway's Game of Life with wrap-around or bounded edges")]
struct Args {
    /// JSON file holding a grid configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square grid
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=GridConfig::MAX_SIZE as u64))]
    size: Option<u64>,

    /// Percentage of cells alive after seeding
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    percent: Option<u32>,

    /// Connect the east and west edges
    #[arg(long)]
    wrap_east_west: bool,

    /// Connect the north and south edges
    #[arg(long)]
    wrap_north_south: bool,

    /// Seed for reproducible runs (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

impl Args {
    fn grid_config(&self) -> Result<GridConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => GridConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size as usize;
        }
        if let Some(percent) = self.percent {
            config = config.with_percent(percent);
        }
        config.topology.wrap_east_west |= self.wrap_east_west;
        config.topology.wrap_north_south |= self.wrap_north_south;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = args.grid_config()?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, size = config.size, density = config.density, "starting viewer");

    let view = LifeView::new(config, seed, Duration::from_millis(args.interval_ms))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(view)),
    )
    .map_err(|err| anyhow::anyhow!("viewer exited: {err}"))
}
