mod grid;
mod types;
mod win_detector;

pub use grid::Board;
pub use types::{Geometry, Mark, Outcome, Position, WinningLine};
pub use win_detector::{evaluate, winning_line_for};

#[cfg(test)]
pub(crate) use grid::parse_board;
