mod bot_controller;
mod minimax;
mod types;

pub use bot_controller::{MEDIUM_MISTAKE_THRESHOLD, random_move, select_move};
pub use minimax::{ScoredMove, WIN_SCORE, best_move};
pub use types::Difficulty;
