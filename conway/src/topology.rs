// topology.rs - Edge behaviour for each grid axis

use serde::{Deserialize, Serialize};

/// Per-axis edge behaviour.
///
/// `wrap_east_west` makes the x axis toroidal, `wrap_north_south` the y axis.
/// An axis that does not wrap is bounded: out-of-range coordinates clamp to
/// the nearest edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Topology {
    pub wrap_east_west: bool,
    pub wrap_north_south: bool,
}

impl Topology {
    pub const BOUNDED: Topology = Topology { wrap_east_west: false, wrap_north_south: false };
    pub const TORUS: Topology = Topology { wrap_east_west: true, wrap_north_south: true };

    pub fn new(wrap_east_west: bool, wrap_north_south: bool) -> Self {
        Self { wrap_east_west, wrap_north_south }
    }

    /// Resolves a possibly out-of-range coordinate pair. The axes never interact.
    pub fn resolve(&self, x: isize, y: isize, size: usize) -> (usize, usize) {
        (
            resolve_axis(x, size, self.wrap_east_west),
            resolve_axis(y, size, self.wrap_north_south),
        )
    }
}

/// Maps a coordinate on one axis back into `0..size`.
///
/// Only single-step excursions are ever requested, so wrapping sends `-1` to
/// `size - 1` and `size` to `0`; anything further out lands on the same edge.
pub fn resolve_axis(coord: isize, size: usize, wrap: bool) -> usize {
    debug_assert!(size >= 1);
    let last = size - 1;
    if coord < 0 {
        if wrap { last } else { 0 }
    } else if coord as usize >= size {
        if wrap { 0 } else { last }
    } else {
        coord as usize
    }
}
