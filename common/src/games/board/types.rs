use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The two supported board shapes. Nothing else is playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Geometry {
    /// 3x3, three in a row, marks placed on any empty cell.
    TicTacToe,
    /// 7 wide, 6 high, four in a row, discs drop to the lowest empty row.
    GravityConnect,
}

impl Geometry {
    pub const fn width(self) -> usize {
        match self {
            Geometry::TicTacToe => 3,
            Geometry::GravityConnect => 7,
        }
    }

    pub const fn height(self) -> usize {
        match self {
            Geometry::TicTacToe => 3,
            Geometry::GravityConnect => 6,
        }
    }

    pub const fn run_length(self) -> usize {
        match self {
            Geometry::TicTacToe => 3,
            Geometry::GravityConnect => 4,
        }
    }

    pub const fn cell_count(self) -> usize {
        self.width() * self.height()
    }

    pub const fn has_gravity(self) -> bool {
        matches!(self, Geometry::GravityConnect)
    }

    pub fn from_dimensions(
        width: usize,
        height: usize,
        run_length: usize,
    ) -> Result<Self, EngineError> {
        [Geometry::TicTacToe, Geometry::GravityConnect]
            .into_iter()
            .find(|g| g.width() == width && g.height() == height && g.run_length() == run_length)
            .ok_or_else(|| {
                EngineError::Configuration(format!(
                    "{}x{} board with run length {}",
                    width, height, run_length
                ))
            })
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::TicTacToe => write!(f, "tic-tac-toe"),
            Geometry::GravityConnect => write!(f, "gravity connect"),
        }
    }
}

/// Column `x`, row `y`; row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn index(&self, geometry: Geometry) -> usize {
        self.y * geometry.width() + self.x
    }

    pub fn from_index(index: usize, geometry: Geometry) -> Self {
        Self::new(index % geometry.width(), index / geometry.width())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: Vec<Position>,
}

impl WinningLine {
    pub fn new(mark: Mark, cells: Vec<Position>) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win { mark: Mark, line: WinningLine },
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}
