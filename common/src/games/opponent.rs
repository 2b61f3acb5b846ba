use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::games::SessionRng;
use crate::games::board::{Board, Geometry, Mark};
use crate::games::gravity_connect::{self, CENTER_BIAS};
use crate::games::tictactoe::{self, Difficulty, MEDIUM_MISTAKE_THRESHOLD};

/// Which opponent plays and how it is tuned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OpponentConfig {
    TicTacToe {
        difficulty: Difficulty,
        mistake_threshold: f64,
    },
    GravityConnect {
        center_bias: f64,
    },
}

impl OpponentConfig {
    pub fn tictactoe(difficulty: Difficulty) -> Self {
        OpponentConfig::TicTacToe {
            difficulty,
            mistake_threshold: MEDIUM_MISTAKE_THRESHOLD,
        }
    }

    pub fn gravity_connect() -> Self {
        OpponentConfig::GravityConnect {
            center_bias: CENTER_BIAS,
        }
    }

    pub fn default_for(geometry: Geometry) -> Self {
        match geometry {
            Geometry::TicTacToe => Self::tictactoe(Difficulty::default()),
            Geometry::GravityConnect => Self::gravity_connect(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            OpponentConfig::TicTacToe { .. } => Geometry::TicTacToe,
            OpponentConfig::GravityConnect { .. } => Geometry::GravityConnect,
        }
    }
}

/// Picks the computer's move: a cell index on tic-tac-toe, a column under
/// gravity. Never mutates the board.
pub fn compute_opponent_move(
    board: &Board,
    mark: Mark,
    config: &OpponentConfig,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    if config.geometry() != board.geometry() {
        return Err(EngineError::Configuration(format!(
            "{} opponent cannot play on a {} board",
            config.geometry(),
            board.geometry()
        )));
    }

    match *config {
        OpponentConfig::TicTacToe {
            difficulty,
            mistake_threshold,
        } => tictactoe::select_move(board, mark, difficulty, mistake_threshold, rng),
        OpponentConfig::GravityConnect { center_bias } => {
            gravity_connect::select_column(board, mark, center_bias, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::board::parse_board;

    #[test]
    fn test_dispatches_tictactoe() {
        let board = parse_board(Geometry::TicTacToe, &["OO.", "XX.", "..."]);
        let mut rng = SessionRng::new(1);
        let config = OpponentConfig::tictactoe(Difficulty::Hard);
        assert_eq!(compute_opponent_move(&board, Mark::O, &config, &mut rng), Ok(2));
    }

    #[test]
    fn test_dispatches_gravity_connect() {
        let board = parse_board(
            Geometry::GravityConnect,
            &[
                ".......",
                ".......",
                ".......",
                "O......",
                "O......",
                "O.XXX..",
            ],
        );
        let mut rng = SessionRng::new(1);
        let config = OpponentConfig::gravity_connect();
        assert_eq!(compute_opponent_move(&board, Mark::O, &config, &mut rng), Ok(0));
    }

    #[test]
    fn test_geometry_mismatch_is_configuration_error() {
        let board = Board::new(Geometry::GravityConnect);
        let mut rng = SessionRng::new(1);
        let config = OpponentConfig::tictactoe(Difficulty::Easy);
        assert!(matches!(
            compute_opponent_move(&board, Mark::O, &config, &mut rng),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_board_is_not_mutated() {
        let board = parse_board(Geometry::TicTacToe, &["X..", "...", "..."]);
        let before = board;
        let mut rng = SessionRng::new(5);
        let config = OpponentConfig::tictactoe(Difficulty::Medium);
        compute_opponent_move(&board, Mark::O, &config, &mut rng).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_default_for_matches_geometry() {
        for geometry in [Geometry::TicTacToe, Geometry::GravityConnect] {
            assert_eq!(OpponentConfig::default_for(geometry).geometry(), geometry);
        }
    }
}
