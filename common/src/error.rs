use crate::engine::session::TurnState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveReason {
    #[error("target is outside the board")]
    OutOfRange,

    #[error("cell is already marked")]
    Occupied,

    #[error("column is full")]
    ColumnFull,

    #[error("an empty mark cannot be placed")]
    EmptyMark,
}

/// Contract violations raised by the board model, the opponents and the
/// turn scheduler. None of them is retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: usize, reason: IllegalMoveReason },

    #[error("no legal move available")]
    NoLegalMove,

    #[error("unsupported configuration: {0}")]
    Configuration(String),

    #[error("move submitted while {0}")]
    OutOfTurn(TurnState),

    #[error("opponent task failed: {0}")]
    OpponentTask(String),
}

impl EngineError {
    pub fn illegal(mv: usize, reason: IllegalMoveReason) -> Self {
        EngineError::IllegalMove { mv, reason }
    }
}
