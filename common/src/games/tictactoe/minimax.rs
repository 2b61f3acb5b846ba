use crate::error::EngineError;
use crate::games::board::{Board, Geometry, Mark, Outcome};

/// Score of a win on the first searched ply; every further ply costs one.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: usize,
    pub score: i32,
}

pub(crate) fn ensure_playable(board: &Board, mark: Mark) -> Result<Mark, EngineError> {
    if board.geometry() != Geometry::TicTacToe {
        return Err(EngineError::Configuration(format!(
            "exact search only supports tic-tac-toe, got {}",
            board.geometry()
        )));
    }
    let opponent = mark
        .opponent()
        .ok_or_else(|| EngineError::Configuration("the empty mark cannot move".to_string()))?;
    if board.outcome().is_over() {
        return Err(EngineError::NoLegalMove);
    }
    Ok(opponent)
}

/// Exhaustive search for `maximizing`. Moves are tried in `legal_moves`
/// order and the first one with the highest score wins.
pub fn best_move(board: &Board, maximizing: Mark) -> Result<ScoredMove, EngineError> {
    let minimizing = ensure_playable(board, maximizing)?;

    let mut best: Option<ScoredMove> = None;
    for index in board.legal_moves() {
        let next = board.with_move(index, maximizing)?;
        let score = minimax(&next, 0, false, maximizing, minimizing);
        if best.is_none_or(|b| score > b.score) {
            best = Some(ScoredMove { index, score });
        }
    }

    best.ok_or(EngineError::NoLegalMove)
}

fn minimax(board: &Board, depth: i32, is_maximizing: bool, max_mark: Mark, min_mark: Mark) -> i32 {
    match board.outcome() {
        Outcome::Win { mark, .. } if mark == max_mark => return WIN_SCORE - depth,
        Outcome::Win { .. } => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if is_maximizing { max_mark } else { min_mark };
    let scores = board
        .legal_moves()
        .into_iter()
        .filter_map(|index| board.with_move(index, mover).ok())
        .map(|next| minimax(&next, depth + 1, !is_maximizing, max_mark, min_mark));

    let score = if is_maximizing { scores.max() } else { scores.min() };
    score.unwrap_or(0)
}
