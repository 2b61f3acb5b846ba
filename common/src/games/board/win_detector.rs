use super::grid::Board;
use super::types::{Mark, Outcome, Position, WinningLine};

#[derive(Clone, Copy)]
enum LineFamily {
    Row,
    Column,
    DiagonalDownRight,
    DiagonalDownLeft,
}

/// Scan order, and therefore the tie-break when several lines are complete.
const SCAN_ORDER: [LineFamily; 4] = [
    LineFamily::Row,
    LineFamily::Column,
    LineFamily::DiagonalDownRight,
    LineFamily::DiagonalDownLeft,
];

impl LineFamily {
    fn step(self) -> (isize, isize) {
        match self {
            LineFamily::Row => (1, 0),
            LineFamily::Column => (0, 1),
            LineFamily::DiagonalDownRight => (1, 1),
            LineFamily::DiagonalDownLeft => (-1, 1),
        }
    }
}

fn line_at(
    board: &Board,
    start: Position,
    family: LineFamily,
    accept: &impl Fn(Mark) -> bool,
) -> Option<WinningLine> {
    let mark = board.get(start.x, start.y);
    if mark == Mark::Empty || !accept(mark) {
        return None;
    }

    let geometry = board.geometry();
    let (dx, dy) = family.step();
    let last = geometry.run_length() as isize - 1;
    let end_x = start.x as isize + dx * last;
    let end_y = start.y as isize + dy * last;
    if end_x < 0
        || end_y < 0
        || end_x >= geometry.width() as isize
        || end_y >= geometry.height() as isize
    {
        return None;
    }

    let cell_at = |i: isize| {
        Position::new(
            (start.x as isize + dx * i) as usize,
            (start.y as isize + dy * i) as usize,
        )
    };

    if (1..=last).all(|i| {
        let p = cell_at(i);
        board.get(p.x, p.y) == mark
    }) {
        Some(WinningLine::new(mark, (0..=last).map(cell_at).collect()))
    } else {
        None
    }
}

fn find_line(board: &Board, accept: impl Fn(Mark) -> bool) -> Option<WinningLine> {
    let geometry = board.geometry();
    let (width, height) = (geometry.width(), geometry.height());

    for family in SCAN_ORDER {
        // Columns are walked column by column so lines come out left to right.
        let (outer, inner) = match family {
            LineFamily::Column => (width, height),
            _ => (height, width),
        };
        for a in 0..outer {
            for b in 0..inner {
                let start = match family {
                    LineFamily::Column => Position::new(a, b),
                    _ => Position::new(b, a),
                };
                if let Some(line) = line_at(board, start, family, &accept) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Pure function of the board contents.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = find_line(board, |_| true) {
        return Outcome::Win {
            mark: line.mark,
            line,
        };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

pub fn winning_line_for(board: &Board, mark: Mark) -> Option<WinningLine> {
    find_line(board, |candidate| candidate == mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::board::{Geometry, parse_board};

    fn positions(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new(Geometry::TicTacToe)), Outcome::InProgress);
        assert_eq!(evaluate(&Board::new(Geometry::GravityConnect)), Outcome::InProgress);
    }

    #[test]
    fn test_row_win() {
        let board = parse_board(Geometry::TicTacToe, &["OO.", "XXX", "..."]);
        let outcome = evaluate(&board);
        assert_eq!(
            outcome,
            Outcome::Win {
                mark: Mark::X,
                line: WinningLine::new(Mark::X, positions(&[(0, 1), (1, 1), (2, 1)])),
            }
        );
    }

    #[test]
    fn test_column_win() {
        let board = parse_board(Geometry::TicTacToe, &["XO.", "XO.", ".OX"]);
        assert_eq!(evaluate(&board).winner(), Some(Mark::O));
    }

    #[test]
    fn test_both_diagonals() {
        let down_right = parse_board(Geometry::TicTacToe, &["XO.", "OX.", "..X"]);
        let outcome = evaluate(&down_right);
        let Outcome::Win { line, .. } = outcome else {
            panic!("expected a win");
        };
        assert_eq!(line.cells, positions(&[(0, 0), (1, 1), (2, 2)]));

        let down_left = parse_board(Geometry::TicTacToe, &["X.O", "XO.", "O.."]);
        let Outcome::Win { mark, line } = evaluate(&down_left) else {
            panic!("expected a win");
        };
        assert_eq!(mark, Mark::O);
        assert_eq!(line.start(), Some(Position::new(2, 0)));
        assert_eq!(line.end(), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_row_reported_before_column() {
        // Pathological: X holds the top row and the left column at once.
        let board = parse_board(Geometry::TicTacToe, &["XXX", "XO.", "XOO"]);
        let Outcome::Win { line, .. } = evaluate(&board) else {
            panic!("expected a win");
        };
        assert_eq!(line.cells, positions(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = parse_board(Geometry::TicTacToe, &["XOX", "XOO", "OXX"]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = parse_board(Geometry::TicTacToe, &["XXX", "OOX", "XOO"]);
        assert_eq!(evaluate(&board).winner(), Some(Mark::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = parse_board(Geometry::TicTacToe, &["XO.", ".X.", "O.."]);
        assert_eq!(evaluate(&board), evaluate(&board));
        assert_eq!(board.outcome(), evaluate(&board));
    }

    #[test]
    fn test_gravity_needs_four() {
        let board = parse_board(
            Geometry::GravityConnect,
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "XXX.OO.",
            ],
        );
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_gravity_diagonal_win() {
        let board = parse_board(
            Geometry::GravityConnect,
            &[
                ".......",
                ".......",
                "...O...",
                "..OX...",
                ".OXX...",
                "OXXX...",
            ],
        );
        let Outcome::Win { mark, line } = evaluate(&board) else {
            panic!("expected a win");
        };
        assert_eq!(mark, Mark::O);
        assert_eq!(line.cells, positions(&[(3, 2), (2, 3), (1, 4), (0, 5)]));
    }

    #[test]
    fn test_gravity_vertical_win() {
        let board = parse_board(
            Geometry::GravityConnect,
            &[
                ".......",
                ".......",
                "......X",
                "......X",
                "O.....X",
                "OO....X",
            ],
        );
        let line = winning_line_for(&board, Mark::X).unwrap();
        assert_eq!(line.start(), Some(Position::new(6, 2)));
        assert!(winning_line_for(&board, Mark::O).is_none());
    }

    #[test]
    fn test_winning_line_for_ignores_other_mark() {
        let board = parse_board(Geometry::TicTacToe, &["OOO", "XX.", "X.."]);
        assert!(winning_line_for(&board, Mark::X).is_none());
        assert_eq!(winning_line_for(&board, Mark::O).unwrap().mark, Mark::O);
    }
}
