use std::fmt;

use crate::error::{EngineError, IllegalMoveReason};
use super::types::{Geometry, Mark, Outcome, Position};
use super::win_detector::evaluate;

/// Cells of the largest geometry; smaller boards use a prefix.
const MAX_CELLS: usize = 42;

/// A fixed-size grid stored row-major. `Copy`, so search code passes boards
/// by value instead of mutating a shared grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    geometry: Geometry,
    cells: [Mark; MAX_CELLS],
}

impl Board {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: [Mark::Empty; MAX_CELLS],
        }
    }

    /// Builds a board with arbitrary contents, including positions that
    /// cannot arise in play.
    pub fn from_cells(geometry: Geometry, cells: &[Mark]) -> Result<Self, EngineError> {
        if cells.len() != geometry.cell_count() {
            return Err(EngineError::Configuration(format!(
                "{} board needs {} cells, got {}",
                geometry,
                geometry.cell_count(),
                cells.len()
            )));
        }
        let mut board = Self::new(geometry);
        board.cells[..cells.len()].copy_from_slice(cells);
        Ok(board)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn cells(&self) -> &[Mark] {
        &self.cells[..self.geometry.cell_count()]
    }

    pub fn get(&self, x: usize, y: usize) -> Mark {
        self.cells[y * self.geometry.width() + x]
    }

    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(self)
    }

    /// Number of marks of each side, `(x, o)`.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.cells().iter().fold((0, 0), |(x, o), cell| match cell {
            Mark::X => (x + 1, o),
            Mark::O => (x, o + 1),
            Mark::Empty => (x, o),
        })
    }

    /// Bottom-up scan; `None` when the column is full.
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= self.geometry.width() {
            return None;
        }
        (0..self.geometry.height())
            .rev()
            .find(|&y| self.get(column, y) == Mark::Empty)
    }

    /// Empty cell indices for direct placement, open columns under gravity.
    /// Always ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.geometry.has_gravity() {
            self.open_columns()
        } else {
            self.cells()
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Mark::Empty)
                .map(|(index, _)| index)
                .collect()
        }
    }

    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.geometry.width())
            .filter(|&column| self.lowest_empty_row(column).is_some())
            .collect()
    }

    /// Resolves a move to the cell it would fill without touching the board.
    pub fn target_of(&self, mv: usize) -> Result<Position, EngineError> {
        if self.geometry.has_gravity() {
            if mv >= self.geometry.width() {
                return Err(EngineError::illegal(mv, IllegalMoveReason::OutOfRange));
            }
            let row = self
                .lowest_empty_row(mv)
                .ok_or(EngineError::illegal(mv, IllegalMoveReason::ColumnFull))?;
            Ok(Position::new(mv, row))
        } else {
            if mv >= self.geometry.cell_count() {
                return Err(EngineError::illegal(mv, IllegalMoveReason::OutOfRange));
            }
            if self.cells[mv] != Mark::Empty {
                return Err(EngineError::illegal(mv, IllegalMoveReason::Occupied));
            }
            Ok(Position::from_index(mv, self.geometry))
        }
    }

    /// The only way cells change. Fully validated before the write, so a
    /// failed move leaves the board as it was.
    pub fn apply_move(&mut self, mv: usize, mark: Mark) -> Result<Position, EngineError> {
        if mark == Mark::Empty {
            return Err(EngineError::illegal(mv, IllegalMoveReason::EmptyMark));
        }
        let position = self.target_of(mv)?;
        self.cells[position.index(self.geometry)] = mark;
        Ok(position)
    }

    /// Value-returning variant of [`Board::apply_move`].
    pub fn with_move(&self, mv: usize, mark: Mark) -> Result<Board, EngineError> {
        let mut next = *self;
        next.apply_move(mv, mark)?;
        Ok(next)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}, \"{}\")", self.geometry, self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.geometry.height() {
            if y > 0 {
                write!(f, "/")?;
            }
            for x in 0..self.geometry.width() {
                write!(f, "{}", self.get(x, y))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn parse_board(geometry: Geometry, rows: &[&str]) -> Board {
    let cells: Vec<Mark> = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| match c {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        })
        .collect();
    Board::from_cells(geometry, &cells).unwrap()
}
