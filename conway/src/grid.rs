// grid.rs - Square grid of cells with per-axis topology

use rand::Rng;
use tracing::debug;

use crate::cell::{Cell, CellId};
use crate::config::{GridConfig, check_size};
use crate::error::{Error, Result};
use crate::snapshot::Snapshot;
use crate::topology::Topology;

/// The eight Moore-neighbourhood offsets.
#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A `size × size` grid that exclusively owns its cells.
///
/// Cells are stored column by column (`x * size + y`) and get sequential
/// identities in that order. Every operation that changes liveness
/// recomputes the cached neighbour counts before it returns, so they are
/// never observed stale.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    topology: Topology,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(size: usize, topology: Topology) -> Result<Self> {
        Self::build(size, topology, |_, _| false)
    }

    /// Seeds a fresh grid: every cell is alive with probability `config.density`,
    /// drawn independently from `rng`.
    pub fn initialize<R: Rng>(config: &GridConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let grid = Self::build(config.size, config.topology, |_, _| {
            rng.random::<f64>() < config.density
        })?;
        debug!(
            size = grid.size,
            wrap_east_west = grid.topology.wrap_east_west,
            wrap_north_south = grid.topology.wrap_north_south,
            density = config.density,
            population = grid.population(),
            "grid initialized"
        );
        Ok(grid)
    }

    /// A grid whose live cells are exactly `live`. Duplicates are harmless.
    pub fn from_live_cells<I>(size: usize, topology: Topology, live: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::build(size, topology, |_, _| false)?;
        for (x, y) in live {
            let index = grid.checked_index(x, y)?;
            grid.cells[index].alive = true;
        }
        grid.recount();
        Ok(grid)
    }

    fn build(
        size: usize,
        topology: Topology,
        mut alive: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self> {
        check_size(size)?;
        let mut cells = Vec::with_capacity(size * size);
        for x in 0..size {
            for y in 0..size {
                let id = CellId(cells.len());
                cells.push(Cell::new(x, y, id, alive(x, y)));
            }
        }
        let mut grid = Self { size, topology, cells };
        grid.recount();
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.size && y < self.size {
            Ok(self.index(x, y))
        } else {
            Err(Error::OutOfBounds { x, y, size: self.size })
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.checked_index(x, y).ok().map(|index| &self.cells[index])
    }

    /// All cells, column by column.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Out-of-range coordinates read as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_alive)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// The distinct cells around `cell`, after topology resolution.
    ///
    /// Resolved cells equal to `cell` itself, or already collected, are
    /// skipped by identity. Interior cells and cells of a fully wrapped grid
    /// of size ≥ 3 get all eight; clamped edges and tiny grids get fewer.
    pub fn neighbors_of(&self, cell: &Cell) -> Vec<&Cell> {
        let (found, len) = self.neighbor_indices(cell);
        found[..len].iter().map(|&index| &self.cells[index]).collect()
    }

    /// Live cells among [`neighbors_of`](Self::neighbors_of), counted afresh.
    pub fn live_neighbors(&self, cell: &Cell) -> u8 {
        let (found, len) = self.neighbor_indices(cell);
        found[..len].iter().filter(|&&index| self.cells[index].alive).count() as u8
    }

    /// Storage indices of the deduplicated neighbours; only the first `len` are set.
    fn neighbor_indices(&self, cell: &Cell) -> ([usize; 8], usize) {
        debug_assert!(cell.x() < self.size && cell.y() < self.size);
        let (x, y) = (cell.x() as isize, cell.y() as isize);
        let mut found = [0; 8];
        let mut len = 0;
        for (dx, dy) in OFFSETS {
            let (nx, ny) = self.topology.resolve(x + dx, y + dy, self.size);
            let index = self.index(nx, ny);
            let id = self.cells[index].id();
            let seen = found[..len].iter().any(|&other| self.cells[other].id() == id);
            if id == cell.id() || seen {
                continue;
            }
            found[len] = index;
            len += 1;
        }
        (found, len)
    }

    /// Refreshes every cell's cached neighbour count from current liveness.
    pub(crate) fn recount(&mut self) {
        let counts: Vec<u8> = self.cells.iter().map(|cell| self.live_neighbors(cell)).collect();
        for (cell, count) in self.cells.iter_mut().zip(counts) {
            cell.live_neighbors = count;
        }
    }

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let index = self.checked_index(x, y)?;
        if self.cells[index].alive != alive {
            self.cells[index].alive = alive;
            self.recount();
        }
        Ok(())
    }

    /// Flips one cell, returning its new liveness.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let index = self.checked_index(x, y)?;
        let alive = !self.cells[index].alive;
        self.cells[index].alive = alive;
        self.recount();
        Ok(alive)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.alive = false;
            cell.live_neighbors = 0;
        }
    }

    /// An independent grid with the same topology and liveness.
    pub fn copy(&self) -> Grid {
        self.clone()
    }

    /// True iff both grids have the same size and identical liveness at every
    /// coordinate. Identities, neighbour counts and topology are ignored.
    pub fn equal(&self, other: &Grid) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.alive == b.alive)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.size, self.cells.iter().map(Cell::is_alive).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    const TOPOLOGIES: [Topology; 4] = [
        Topology::BOUNDED,
        Topology { wrap_east_west: true, wrap_north_south: false },
        Topology { wrap_east_west: false, wrap_north_south: true },
        Topology::TORUS,
    ];

    fn positions(neighbors: &[&Cell]) -> HashSet<(usize, usize)> {
        neighbors.iter().map(|cell| cell.position()).collect()
    }

    #[test]
    fn identities_are_sequential_and_unique() {
        let grid = Grid::new(4, Topology::TORUS).unwrap();
        let ids: HashSet<CellId> = grid.cells().iter().map(Cell::id).collect();
        assert_eq!(ids.len(), 16);
        assert_eq!(grid.cell(0, 0).unwrap().id(), CellId(0));
        assert_eq!(grid.cell(0, 3).unwrap().id(), CellId(3));
        assert_eq!(grid.cell(1, 0).unwrap().id(), CellId(4));
        assert_eq!(grid.cell(3, 3).unwrap().id(), CellId(15));
    }

    #[test]
    fn rejects_zero_size() {
        assert_eq!(Grid::new(0, Topology::BOUNDED).unwrap_err(), Error::ZeroSize);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        for topology in TOPOLOGIES {
            let grid = Grid::from_live_cells(1, topology, [(0, 0)]).unwrap();
            let cell = grid.cell(0, 0).unwrap();
            assert!(grid.neighbors_of(cell).is_empty());
            assert_eq!(cell.live_neighbors(), 0);
        }
    }

    #[test]
    fn two_by_two_grid_sees_the_other_three_cells() {
        for topology in TOPOLOGIES {
            let grid = Grid::new(2, topology).unwrap();
            for cell in grid.cells() {
                let neighbors = grid.neighbors_of(cell);
                assert_eq!(neighbors.len(), 3, "{topology:?} at {:?}", cell.position());
                assert!(!positions(&neighbors).contains(&cell.position()));
            }
        }
    }

    #[test]
    fn interior_cells_have_eight_neighbors_under_any_topology() {
        for topology in TOPOLOGIES {
            let grid = Grid::new(5, topology).unwrap();
            for x in 1..4 {
                for y in 1..4 {
                    let cell = grid.cell(x, y).unwrap();
                    assert_eq!(grid.neighbors_of(cell).len(), 8);
                }
            }
        }
    }

    #[test]
    fn torus_gives_every_cell_eight_neighbors() {
        for size in 3..7 {
            let grid = Grid::new(size, Topology::TORUS).unwrap();
            for cell in grid.cells() {
                let count = grid.neighbors_of(cell).len();
                assert_eq!(count, 8, "size {size} at {:?}", cell.position());
            }
        }
    }

    #[test]
    fn clamped_corner_collapses_onto_the_grid() {
        let grid = Grid::new(4, Topology::BOUNDED).unwrap();
        let corner = grid.cell(0, 0).unwrap();
        assert_eq!(
            positions(&grid.neighbors_of(corner)),
            HashSet::from([(0, 1), (1, 0), (1, 1)])
        );
        let edge = grid.cell(0, 2).unwrap();
        assert_eq!(grid.neighbors_of(edge).len(), 5);
    }

    #[test]
    fn wrapped_corner_reaches_across_both_edges() {
        let grid = Grid::new(4, Topology::TORUS).unwrap();
        let corner = grid.cell(0, 0).unwrap();
        assert_eq!(
            positions(&grid.neighbors_of(corner)),
            HashSet::from([(3, 3), (3, 0), (3, 1), (0, 3), (0, 1), (1, 3), (1, 0), (1, 1)])
        );
    }

    #[test]
    fn half_wrapped_edge_wraps_only_one_axis() {
        let grid = Grid::new(4, Topology::new(true, false)).unwrap();
        let corner = grid.cell(0, 0).unwrap();
        assert_eq!(
            positions(&grid.neighbors_of(corner)),
            HashSet::from([(3, 0), (3, 1), (0, 1), (1, 0), (1, 1)])
        );
    }

    #[test]
    fn counts_follow_liveness_edits() {
        let mut grid = Grid::from_live_cells(3, Topology::BOUNDED, [(0, 0), (2, 2)]).unwrap();
        assert_eq!(grid.cell(1, 1).unwrap().live_neighbors(), 2);

        grid.set_alive(1, 0, true).unwrap();
        assert_eq!(grid.cell(1, 1).unwrap().live_neighbors(), 3);
        assert_eq!(grid.cell(0, 0).unwrap().live_neighbors(), 1);

        assert!(!grid.toggle(2, 2).unwrap());
        assert_eq!(grid.cell(1, 1).unwrap().live_neighbors(), 2);

        grid.clear();
        assert_eq!(grid.population(), 0);
        assert!(grid.cells().iter().all(|cell| cell.live_neighbors() == 0));
    }

    #[test]
    fn live_count_matches_the_neighbor_set() {
        let live = [(0, 0), (1, 0), (3, 3), (0, 3), (2, 1)];
        for topology in TOPOLOGIES {
            let grid = Grid::from_live_cells(4, topology, live).unwrap();
            for cell in grid.cells() {
                let expected = grid.neighbors_of(cell).iter().filter(|n| n.is_alive()).count();
                assert_eq!(usize::from(grid.live_neighbors(cell)), expected);
            }
        }
    }

    #[test]
    fn largest_grid_builds() {
        let grid = Grid::new(GridConfig::MAX_SIZE, Topology::TORUS).unwrap();
        assert_eq!(grid.cells().len(), GridConfig::MAX_SIZE * GridConfig::MAX_SIZE);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn cached_counts_match_fresh_counts_after_initialize() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for topology in TOPOLOGIES {
            let config = GridConfig::new(9, 0.4, topology);
            let grid = Grid::initialize(&config, &mut rng).unwrap();
            for cell in grid.cells() {
                assert_eq!(cell.live_neighbors(), grid.live_neighbors(cell));
            }
        }
    }

    #[test]
    fn density_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seeded = |density| {
            Grid::initialize(&GridConfig::new(6, density, Topology::BOUNDED), &mut rng).unwrap()
        };
        assert_eq!(seeded(1.0).population(), 36);
        assert_eq!(seeded(0.0).population(), 0);
        assert_eq!(seeded(-3.0).population(), 0);
        assert_eq!(seeded(2.0).population(), 36);
    }

    #[test]
    fn same_seed_same_grid() {
        let config = GridConfig::new(12, 0.3, Topology::TORUS);
        let a = Grid::initialize(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = Grid::initialize(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert!(a.equal(&b));
    }

    #[test]
    fn copy_is_independent() {
        let original = Grid::from_live_cells(4, Topology::TORUS, [(1, 1), (2, 1)]).unwrap();
        let mut copy = original.copy();
        assert!(original.equal(&copy));

        copy.toggle(3, 3).unwrap();
        assert!(!original.equal(&copy));
        assert!(!original.is_alive(3, 3));
        assert_eq!(original.population(), 2);
    }

    #[test]
    fn equality_ignores_topology_but_not_size() {
        let bounded = Grid::from_live_cells(3, Topology::BOUNDED, [(1, 1)]).unwrap();
        let torus = Grid::from_live_cells(3, Topology::TORUS, [(1, 1)]).unwrap();
        assert!(bounded.equal(&torus));

        let larger = Grid::from_live_cells(4, Topology::BOUNDED, [(1, 1)]).unwrap();
        assert!(!bounded.equal(&larger));
    }

    #[test]
    fn explicit_coordinates_are_bounds_checked() {
        assert_eq!(
            Grid::from_live_cells(3, Topology::TORUS, [(3, 0)]).unwrap_err(),
            Error::OutOfBounds { x: 3, y: 0, size: 3 }
        );
        let mut grid = Grid::new(3, Topology::TORUS).unwrap();
        assert!(grid.set_alive(0, 3, true).is_err());
        assert!(grid.toggle(5, 5).is_err());
        assert!(grid.cell(3, 3).is_none());
        assert!(!grid.is_alive(3, 3));
    }

    #[test]
    fn snapshot_mirrors_liveness() {
        let grid = Grid::from_live_cells(3, Topology::BOUNDED, [(0, 0), (2, 1)]).unwrap();
        let snapshot = grid.snapshot();
        assert_eq!(snapshot.size(), 3);
        assert_eq!(snapshot.to_string(), "#..\n..#\n...\n");
        assert_eq!(snapshot.live_cells().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }
}
