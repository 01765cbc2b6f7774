// cell.rs - A single automaton unit

use std::fmt;

/// Identity of a cell, unique within its grid and never reassigned.
///
/// Neighbour deduplication keys on this rather than on coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One cell of a [`Grid`](crate::Grid).
///
/// A plain value: it knows its position and identity but not its grid, so
/// neighbour resolution always goes through the grid. `live_neighbors` is a
/// cache the grid refreshes after every liveness change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    id: CellId,
    pub(crate) alive: bool,
    pub(crate) live_neighbors: u8,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize, id: CellId, alive: bool) -> Self {
        Self { x, y, id, alive, live_neighbors: 0 }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Live neighbours as of the last recount (0..=8).
    pub fn live_neighbors(&self) -> u8 {
        self.live_neighbors
    }
}

/// What happens to a cell in the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fate {
    DiesOfUnderpopulation,
    DiesOfOverpopulation,
    Survives,
    Born,
    StaysDead,
}

impl Fate {
    /// Liveness after the transition.
    pub fn is_alive(self) -> bool {
        matches!(self, Fate::Survives | Fate::Born)
    }

    /// Whether the transition flips liveness.
    pub fn changes(self) -> bool {
        matches!(
            self,
            Fate::DiesOfUnderpopulation | Fate::DiesOfOverpopulation | Fate::Born
        )
    }
}

impl fmt::Display for Fate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Fate::DiesOfUnderpopulation => "will die by underpopulation",
            Fate::DiesOfOverpopulation => "will die by overpopulation",
            Fate::Survives => "will stay alive",
            Fate::Born => "will be born",
            Fate::StaysDead => "will stay dead",
        };
        f.write_str(text)
    }
}
