// error.rs - Errors raised while building grids and rule sets

use thiserror::Error;

/// Everything that can go wrong before a generation is ever stepped.
///
/// Stepping, neighbour lookup, copy and compare have no failure modes: a
/// [`Grid`](crate::Grid) only exists once its configuration has been checked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("grid size must be at least 1")]
    ZeroSize,

    #[error("grid size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },

    #[error(
        "invalid rules: survival {survival_min}..={survival_max}, birth {birth} \
         (thresholds must be ordered and at most 8)"
    )]
    InvalidRules {
        survival_min: u8,
        survival_max: u8,
        birth: u8,
    },

    #[error("cell ({x}, {y}) lies outside a grid of size {size}")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("pattern {name} ({width}x{height}) does not fit a grid of size {size}")]
    PatternTooLarge {
        name: &'static str,
        width: usize,
        height: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
