//! Bounded Game of Life grid with incremental, active-set driven evolution

use super::rules::{GameOfLifeRules, NEIGHBOR_OFFSETS};
use crate::error::{LifeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported grid width
pub const MAX_WIDTH: usize = 200;
/// Largest supported grid height
pub const MAX_HEIGHT: usize = 200;

/// A single grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Current state
    pub alive: bool,
    /// Next state, only meaningful while a step is being computed
    pub pending_alive: bool,
    /// Whether the cell is evaluated on the next step
    pub is_active: bool,
}

/// Counters reported after seeding, stepping or refreshing the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStatus {
    pub alive_count: usize,
    pub active_count: usize,
    /// Cells flipped by the most recent step
    pub changed_count: usize,
    pub capacity: usize,
}

/// Grid dimensions as exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridAttributes {
    pub width: usize,
    pub height: usize,
}

/// Identifier of a live cell, either a linear index or an `[x, y]` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellId {
    Index(usize),
    Coord([usize; 2]),
}

/// Game of Life grid.
///
/// Cells live in a flat arena indexed by `y * width + x`. Adjacency is kept
/// as per-cell index lists computed once at construction, so no cell holds a
/// reference to another.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    neighbors: Vec<Vec<usize>>,
    active: Vec<usize>,
    alive_count: usize,
    changed_count: usize,
    /// Set by direct edits until the active set is rebuilt
    edited: bool,
}

impl Grid {
    /// Create an all-dead grid of the given size
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(LifeError::Size {
                width,
                height,
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
            });
        }

        let capacity = width * height;
        let neighbors = (0..capacity)
            .map(|index| Self::neighbor_indices(width, height, index))
            .collect();

        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); capacity],
            neighbors,
            active: Vec::new(),
            alive_count: 0,
            changed_count: 0,
            edited: false,
        })
    }

    /// Indices of the in-bounds Moore neighbors of `index`. Rows and columns
    /// do not wrap.
    fn neighbor_indices(width: usize, height: usize, index: usize) -> Vec<usize> {
        let x = (index % width) as isize;
        let y = (index / width) as isize;

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x + dx;
                let ny = y + dy;
                let inside = nx >= 0 && ny >= 0 && nx < width as isize && ny < height as isize;
                inside.then(|| ny as usize * width + nx as usize)
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn attributes(&self) -> GridAttributes {
        GridAttributes {
            width: self.width,
            height: self.height,
        }
    }

    /// Access a cell by linear index
    pub fn cell(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or(LifeError::Index {
            index,
            capacity: self.capacity(),
        })
    }

    /// Neighbor indices of a cell
    pub fn neighbors(&self, index: usize) -> Result<&[usize]> {
        self.neighbors
            .get(index)
            .map(Vec::as_slice)
            .ok_or(LifeError::Index {
                index,
                capacity: self.capacity(),
            })
    }

    /// Cell state at coordinates; anything outside the grid is dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x].alive
    }

    /// Current generation as a flat vector of states
    pub fn states(&self) -> Vec<bool> {
        self.cells.iter().map(|cell| cell.alive).collect()
    }

    /// Indices that will be evaluated on the next step
    pub fn active_indices(&self) -> &[usize] {
        &self.active
    }

    /// Convert `[x, y]` to a linear index. Coordinates outside the grid map
    /// to `None`.
    pub fn absolute_index(&self, coord: [i64; 2]) -> Option<usize> {
        let [x, y] = coord;
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Decompose a linear index into `[x, y]`
    pub fn relative_coord(&self, index: usize) -> [usize; 2] {
        [index % self.width, index / self.width]
    }

    /// Set every cell from `generator` and rebuild the active set
    pub fn seed<F>(&mut self, mut generator: F) -> GridStatus
    where
        F: FnMut(usize, &Cell) -> bool,
    {
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let alive = generator(index, &*cell);
            cell.alive = alive;
            cell.pending_alive = alive;
        }
        self.changed_count = 0;
        self.rebuild_active();
        self.status()
    }

    /// Flip one cell. The active set is left alone until [`Grid::refresh`] or
    /// the next step.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let capacity = self.capacity();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(LifeError::Index { index, capacity })?;

        cell.alive = !cell.alive;
        cell.pending_alive = cell.alive;
        self.alive_count = if cell.alive {
            self.alive_count + 1
        } else {
            self.alive_count - 1
        };
        self.edited = true;
        Ok(cell.alive)
    }

    /// Rebuild the active set after direct edits
    pub fn refresh(&mut self) -> GridStatus {
        self.rebuild_active();
        self.status()
    }

    /// Advance one generation.
    ///
    /// Only active cells are evaluated. Every cell outside the active set is
    /// dead with no live neighbor and therefore stays dead.
    pub fn step(&mut self) -> GridStatus {
        if self.edited {
            self.rebuild_active();
        }

        for &index in &self.active {
            let live_neighbors = self.neighbors[index]
                .iter()
                .filter(|&&n| self.cells[n].alive)
                .count() as u8;
            let alive = self.cells[index].alive;
            self.cells[index].pending_alive = GameOfLifeRules::should_be_alive(alive, live_neighbors);
        }

        let mut changed = 0;
        for &index in &self.active {
            let cell = &mut self.cells[index];
            if cell.pending_alive != cell.alive {
                cell.alive = cell.pending_alive;
                changed += 1;
            }
        }

        // Must follow state application: the set describes the new generation.
        self.rebuild_active();
        self.changed_count = changed;
        self.status()
    }

    /// Kill every cell and drop all activity
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
        self.active.clear();
        self.alive_count = 0;
        self.changed_count = 0;
        self.edited = false;
    }

    pub fn status(&self) -> GridStatus {
        GridStatus {
            alive_count: self.alive_count,
            active_count: self.active.len(),
            changed_count: self.changed_count,
            capacity: self.capacity(),
        }
    }

    /// Lazy sequence of live cells, as indices or as `[x, y]` pairs
    pub fn live_cells(&self, relative: bool) -> LiveCells<'_> {
        LiveCells {
            grid: self,
            next: 0,
            relative,
        }
    }

    /// Live cell indices, in ascending order
    pub fn live_indices(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(|(index, _)| index)
    }

    /// Live cell coordinates, in row-major order
    pub fn live_coords(&self) -> impl Iterator<Item = [usize; 2]> + Clone + '_ {
        self.live_indices().map(|index| self.relative_coord(index))
    }

    /// Clear every activity flag, then mark each live cell and its neighbors.
    fn rebuild_active(&mut self) {
        // Flags are only ever set through this list.
        for &index in &self.active {
            self.cells[index].is_active = false;
        }
        self.active.clear();

        let mut alive_count = 0;
        for index in 0..self.cells.len() {
            if !self.cells[index].alive {
                continue;
            }
            alive_count += 1;
            for &member in std::iter::once(&index).chain(self.neighbors[index].iter()) {
                let cell = &mut self.cells[member];
                if !cell.is_active {
                    cell.is_active = true;
                    self.active.push(member);
                }
            }
        }

        self.alive_count = alive_count;
        self.edited = false;
    }
}

/// Iterator over live cells returned by [`Grid::live_cells`].
///
/// Cloning the iterator, or asking the grid again, restarts the sequence.
#[derive(Debug, Clone)]
pub struct LiveCells<'a> {
    grid: &'a Grid,
    next: usize,
    relative: bool,
}

impl Iterator for LiveCells<'_> {
    type Item = CellId;

    fn next(&mut self) -> Option<CellId> {
        while self.next < self.grid.cells.len() {
            let index = self.next;
            self.next += 1;
            if self.grid.cells[index].alive {
                return Some(if self.relative {
                    CellId::Coord(self.grid.relative_coord(index))
                } else {
                    CellId::Index(index)
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.grid.cells.len() - self.next))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.is_alive(x, y) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
