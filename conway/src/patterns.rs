// patterns.rs - Named seed patterns

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::topology::Topology;

/// A named set of live cells, given as `(x, y)` offsets from the pattern's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLINKER,
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    BLOCK,
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (0, 5), (1, 4), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Live cells with the pattern's corner moved to `origin`.
    pub fn cells_at(&self, origin: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().map(move |&(x, y)| (origin.0 + x, origin.1 + y))
    }

    /// A fresh grid holding only this pattern at `origin`.
    pub fn place_at(
        &self,
        size: usize,
        topology: Topology,
        origin: (usize, usize),
    ) -> Result<Grid> {
        if origin.0 + self.width() > size || origin.1 + self.height() > size {
            return Err(self.too_large(size));
        }
        Grid::from_live_cells(size, topology, self.cells_at(origin))
    }

    /// A fresh grid holding only this pattern, centred.
    pub fn place(&self, size: usize, topology: Topology) -> Result<Grid> {
        if self.width() > size || self.height() > size {
            return Err(self.too_large(size));
        }
        let origin = ((size - self.width()) / 2, (size - self.height()) / 2);
        self.place_at(size, topology, origin)
    }

    fn too_large(&self, size: usize) -> Error {
        Error::PatternTooLarge {
            name: self.name,
            width: self.width(),
            height: self.height(),
            size,
        }
    }
}
