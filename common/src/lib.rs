pub mod config;
pub mod engine;
pub mod error;
pub mod games;
pub mod logger;

pub use engine::{apply_move, compute_opponent_move, evaluate_outcome, new_board};
pub use error::{EngineError, IllegalMoveReason};
