use crate::error::EngineError;
use crate::games::SessionRng;
use crate::games::board::{Board, Geometry, Mark, winning_line_for};

/// Probability of taking the open center column once no win or block exists.
pub const CENTER_BIAS: f64 = 0.7;

/// Single-ply heuristic for the gravity board: win now, else block, else
/// lean toward the center, else any open column.
pub fn select_column(
    board: &Board,
    mark: Mark,
    center_bias: f64,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    if board.geometry() != Geometry::GravityConnect {
        return Err(EngineError::Configuration(format!(
            "column heuristic only supports gravity connect, got {}",
            board.geometry()
        )));
    }
    let opponent = mark
        .opponent()
        .ok_or_else(|| EngineError::Configuration("the empty mark cannot move".to_string()))?;
    if board.outcome().is_over() {
        return Err(EngineError::NoLegalMove);
    }

    let open_columns = board.open_columns();
    if open_columns.is_empty() {
        return Err(EngineError::NoLegalMove);
    }

    if let Some(column) = find_completing_column(board, mark, &open_columns) {
        return Ok(column);
    }

    if let Some(column) = find_completing_column(board, opponent, &open_columns) {
        return Ok(column);
    }

    let center = board.geometry().width() / 2;
    if open_columns.contains(&center) && rng.roll() < center_bias {
        return Ok(center);
    }

    rng.choose(&open_columns).ok_or(EngineError::NoLegalMove)
}

fn find_completing_column(board: &Board, mark: Mark, open_columns: &[usize]) -> Option<usize> {
    open_columns.iter().copied().find(|&column| {
        board
            .with_move(column, mark)
            .is_ok_and(|next| winning_line_for(&next, mark).is_some())
    })
}
