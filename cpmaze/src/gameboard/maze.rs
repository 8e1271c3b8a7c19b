use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::cell::{Cell, CellWall},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze must have at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular grid of cells. Entrance is the top left cell, exit the bottom right one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
}

impl Maze {
    /// All cells enclosed and unvisited. `size` must be positive.
    pub(crate) fn enclosed(size: Dims) -> Option<Self> {
        Some(Maze {
            cells: Array2D::new_dims(Cell::new(), size)?,
        })
    }

    /// Builds a maze from packed cell codes, one inner `Vec` per row.
    pub fn from_codes(codes: Vec<Vec<u32>>) -> Result<Self, MazeError> {
        let expected = codes.first().map(Vec::len).ok_or(MazeError::Empty)?;
        if expected == 0 {
            return Err(MazeError::Empty);
        }

        if let Some((row, found)) = codes
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(MazeError::Ragged {
                row,
                expected,
                found,
            });
        }

        let rows = codes
            .into_iter()
            .map(|row| row.into_iter().map(Cell::from_code).collect())
            .collect();

        Ok(Maze {
            cells: Array2D::from_rows(rows).ok_or(MazeError::Empty)?,
        })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn columns(&self) -> usize {
        self.cells.width()
    }

    pub fn entrance(&self) -> Dims {
        Dims::ZERO
    }

    pub fn exit(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn is_valid_neighbor(&self, cell: Dims, off: Dims) -> bool {
        off.abs_sum() == 1 && self.is_in_bounds(cell) && self.is_in_bounds(cell + off)
    }

    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_valid_neighbor(cell, wall.to_coord())
    }

    /// Returns the wall of `cell` facing `cell2`, if the two are adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (1, 0) => Some(CellWall::Right),
            (-1, 0) => Some(CellWall::Left),
            (0, 1) => Some(CellWall::Bottom),
            (0, -1) => Some(CellWall::Top),
            _ => None,
        }
    }

    /// In-bounds neighbors in scan order (up, down, left, right).
    pub fn get_neighbors_pos(&self, cell: Dims) -> SmallVec<[(CellWall, Dims); 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_valid_wall(cell, wall))
            .map(|wall| (wall, cell + wall.to_coord()))
            .collect()
    }

    /// Neighbors reachable through an open wall, in scan order.
    pub fn get_passable_neighbors(&self, cell: Dims) -> SmallVec<[(CellWall, Dims); 4]> {
        let Some(current) = self.get_cell(cell) else {
            return SmallVec::new();
        };

        self.get_neighbors_pos(cell)
            .into_iter()
            .filter(|&(wall, _)| current.is_open(wall))
            .collect()
    }

    /// Whether a walker can step from `cell` through `wall` without leaving the grid.
    pub fn can_move(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_valid_wall(cell, wall) && self.cells[cell].is_open(wall)
    }

    /// Opens the wall on both sides, so the neighbor sees the matching opening.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell].make_passage(wall);
        self.cells[cell + wall.to_coord()].make_passage(wall.reverse_wall());
    }

    /// Breaches the outer boundary above the entrance and below the exit.
    pub fn open_entrance_and_exit(&mut self) {
        let (entrance, exit) = (self.entrance(), self.exit());
        self.cells[entrance].make_passage(CellWall::Top);
        self.cells[exit].make_passage(CellWall::Bottom);
    }

    /// Number of open walls shared between two cells of the grid.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(|&wall| self.can_move(pos, wall))
                    .count()
            })
            .sum()
    }

    /// Read-only snapshot of packed cell codes.
    pub fn codes(&self) -> Array2D<u32> {
        self.cells.map(Cell::code)
    }

    pub fn reset_visits(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_visits);
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }
}
