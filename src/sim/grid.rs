//! Square board geometry with wrap-around edges

use rand::Rng;

use super::state::{Cell, Direction};
use crate::consts::{GRID_SIZE, MIN_GRID_SIZE};

/// An N×N board whose opposite edges are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self { size: GRID_SIZE }
    }
}

impl Grid {
    /// Sizes below `MIN_GRID_SIZE` are raised to it
    pub fn new(size: i32) -> Self {
        Self {
            size: size.max(MIN_GRID_SIZE),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.row) && (0..self.size).contains(&cell.col)
    }

    /// Bring a cell that stepped one square off the board back onto it.
    ///
    /// Only `size` and `-1` are remapped; in-range coordinates pass through.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(self.wrap_axis(cell.row), self.wrap_axis(cell.col))
    }

    #[inline]
    fn wrap_axis(&self, v: i32) -> i32 {
        if v == self.size {
            0
        } else if v == -1 {
            self.size - 1
        } else {
            v
        }
    }

    /// Neighbour of `cell` in `direction`, across the edge if needed
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        self.wrap(cell.offset(direction.delta()))
    }

    /// Uniformly random cell
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.random_range(0..self.size), rng.random_range(0..self.size))
    }

    /// Shortest signed distance from `from` to `to` along one wrapped axis
    pub fn axis_distance(&self, from: i32, to: i32) -> i32 {
        let d = (to - from).rem_euclid(self.size);
        if d * 2 > self.size { d - self.size } else { d }
    }
}
