use crate::error::EngineError;
use crate::games::SessionRng;
use crate::games::board::{Board, Mark};
use super::minimax::{best_move, ensure_playable};
use super::types::Difficulty;

/// Medium rolls once per move; a roll above this plays a random cell.
pub const MEDIUM_MISTAKE_THRESHOLD: f64 = 0.6;

pub fn select_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    mistake_threshold: f64,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    ensure_playable(board, mark)?;

    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.roll() > mistake_threshold {
                random_move(board, rng)
            } else {
                Ok(best_move(board, mark)?.index)
            }
        }
        Difficulty::Hard => Ok(best_move(board, mark)?.index),
    }
}

pub fn random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, EngineError> {
    if board.outcome().is_over() {
        return Err(EngineError::NoLegalMove);
    }
    rng.choose(&board.legal_moves()).ok_or(EngineError::NoLegalMove)
}
