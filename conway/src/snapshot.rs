// snapshot.rs - Read-only liveness view for rendering sinks

use std::fmt;

/// Liveness of every coordinate for one generation, detached from the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    size: usize,
    alive: Vec<bool>,
}

impl Snapshot {
    /// `alive` is indexed `x * size + y`, the grid's own layout.
    pub(crate) fn new(size: usize, alive: Vec<bool>) -> Self {
        debug_assert_eq!(alive.len(), size * size);
        Self { size, alive }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Out-of-range coordinates read as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.alive[x * self.size + y]
    }

    pub fn population(&self) -> usize {
        self.alive.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of live cells, column by column.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(index, _)| (index / size, index % size))
    }
}

/// One text row per `y`, `#` for live and `.` for dead.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                f.write_str(if self.is_alive(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
