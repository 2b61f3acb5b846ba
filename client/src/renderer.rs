use arcade_common::engine::session::MatchMode;
use arcade_common::games::{Board, Geometry, Mark, Outcome, Position};

/// Text rendering of a board. Empty tic-tac-toe cells show the number that
/// plays them; gravity boards get a column header instead.
pub fn render_board(board: &Board) -> String {
    match board.geometry() {
        Geometry::TicTacToe => render_tictactoe(board),
        Geometry::GravityConnect => render_gravity(board),
    }
}

fn render_tictactoe(board: &Board) -> String {
    let geometry = board.geometry();
    let rows: Vec<String> = (0..geometry.height())
        .map(|y| {
            let cells: Vec<String> = (0..geometry.width())
                .map(|x| match board.get(x, y) {
                    Mark::Empty => (Position::new(x, y).index(geometry) + 1).to_string(),
                    mark => mark.to_string(),
                })
                .map(|cell| format!(" {} ", cell))
                .collect();
            cells.join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn render_gravity(board: &Board) -> String {
    let geometry = board.geometry();
    let header: Vec<String> = (1..=geometry.width()).map(|c| c.to_string()).collect();
    let mut lines = vec![format!(" {} ", header.join(" "))];
    for y in 0..geometry.height() {
        let cells: Vec<String> = (0..geometry.width())
            .map(|x| board.get(x, y).symbol().to_string())
            .collect();
        lines.push(format!("|{}|", cells.join(" ")));
    }
    lines.join("\n")
}

pub fn prompt(geometry: Geometry, mover: Mark) -> String {
    let target = match geometry {
        Geometry::TicTacToe => "cell 1-9",
        Geometry::GravityConnect => "column 1-7",
    };
    format!("{} to move: enter a {}, r to reset, q to quit", mover, target)
}

pub fn outcome_message(outcome: &Outcome, mode: MatchMode) -> String {
    match outcome {
        Outcome::InProgress => "Game in progress".to_string(),
        Outcome::Draw => "It's a draw! Press r to play again.".to_string(),
        Outcome::Win { mark, line } => {
            let who = match (mode, mark) {
                (MatchMode::VsComputer, Mark::X) => "You win".to_string(),
                (MatchMode::VsComputer, _) => "Computer wins".to_string(),
                (MatchMode::VsFriend, mark) => format!("{} wins", mark),
            };
            match (line.start(), line.end()) {
                (Some(start), Some(end)) => format!(
                    "{}! Line from ({}, {}) to ({}, {}). Press r to play again.",
                    who,
                    start.x + 1,
                    start.y + 1,
                    end.x + 1,
                    end.y + 1
                ),
                _ => format!("{}! Press r to play again.", who),
            }
        }
    }
}
