pub mod board;
pub mod gravity_connect;
pub mod opponent;
mod session_rng;
pub mod tictactoe;

pub use board::{Board, Geometry, Mark, Outcome, Position, WinningLine};
pub use opponent::{OpponentConfig, compute_opponent_move};
pub use session_rng::SessionRng;
