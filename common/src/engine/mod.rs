pub mod session;

use crate::error::EngineError;
use crate::games::{Board, Geometry, Mark, Outcome};

pub use crate::games::compute_opponent_move;

pub fn new_board(geometry: Geometry) -> Board {
    Board::new(geometry)
}

/// Returns the board with `mark` placed at `mv`, a cell index or a column
/// depending on the geometry. The input board is left untouched.
pub fn apply_move(board: &Board, mv: usize, mark: Mark) -> Result<Board, EngineError> {
    board.with_move(mv, mark)
}

pub fn evaluate_outcome(board: &Board) -> Outcome {
    board.outcome()
}
