use super::board::is_board_full;
use super::types::{Board, GameStatus, Line, Mark, WinningLine};

/// Rows top to bottom, columns left to right, then both diagonals. The order
/// decides which line is reported when more than one is complete.
pub const WIN_PATTERNS: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WIN_PATTERNS.iter().find_map(|&[a, b, c]| {
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn winning_line(board: &Board) -> Option<Line> {
    check_win_with_line(board).map(|line| line.cells)
}

pub fn is_draw(board: &Board) -> bool {
    is_board_full(board) && check_win(board).is_none()
}

pub fn is_terminal(board: &Board) -> bool {
    check_win(board).is_some() || is_board_full(board)
}

pub fn evaluate(board: &Board) -> GameStatus {
    match check_win_with_line(board) {
        Some(line) if line.mark == Mark::X => GameStatus::XWon,
        Some(_) => GameStatus::OWon,
        None if is_board_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::{empty_board, parse_board};

    fn all_boards() -> impl Iterator<Item = Board> {
        (0..3usize.pow(9)).map(|mut code| {
            let mut board = empty_board();
            for cell in board.iter_mut() {
                *cell = match code % 3 {
                    0 => Mark::Empty,
                    1 => Mark::X,
                    _ => Mark::O,
                };
                code /= 3;
            }
            board
        })
    }

    fn complete_patterns(board: &Board) -> Vec<Line> {
        WIN_PATTERNS
            .iter()
            .copied()
            .filter(|&[a, b, c]| {
                board[a] != Mark::Empty && board[a] == board[b] && board[a] == board[c]
            })
            .collect()
    }

    #[test]
    fn test_top_row_win() {
        let board = parse_board("XXXOO....").unwrap();
        assert_eq!(check_win(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_diagonal_win() {
        let board = parse_board("OXXXO...O").unwrap();
        assert_eq!(check_win(&board), Some(Mark::O));
        assert_eq!(winning_line(&board), Some([0, 4, 8]));
        assert_eq!(evaluate(&board), GameStatus::OWon);
    }

    #[test]
    fn test_vertical_win() {
        let board = parse_board("XOOXO.X..").unwrap();
        assert_eq!(check_win(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
    }

    #[test]
    fn test_draw() {
        let board = parse_board("XOXXOOOXX").unwrap();
        assert!(is_draw(&board));
        assert_eq!(check_win(&board), None);
        assert_eq!(winning_line(&board), None);
        assert!(is_terminal(&board));
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_open_position() {
        let board = parse_board("XO..X.O..").unwrap();
        assert!(!is_terminal(&board));
        assert!(!is_draw(&board));
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_empty_board() {
        let board = empty_board();
        assert_eq!(check_win(&board), None);
        assert!(!is_draw(&board));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board = parse_board("XXXOOXOXO").unwrap();
        assert_eq!(check_win(&board), Some(Mark::X));
        assert!(!is_draw(&board));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_double_win_reports_first_pattern() {
        let board = parse_board("XXXOOO...").unwrap();
        assert_eq!(check_win(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));

        let board = parse_board("OOOXXX...").unwrap();
        assert_eq!(check_win(&board), Some(Mark::O));
    }

    #[test]
    fn test_classification_over_every_board() {
        for board in all_boards() {
            let patterns = complete_patterns(&board);
            let full = board.iter().all(|&cell| cell != Mark::Empty);

            assert_eq!(is_draw(&board), full && patterns.is_empty());
            assert!(!(is_draw(&board) && check_win(&board).is_some()));

            match patterns.first() {
                None => {
                    assert_eq!(check_win(&board), None);
                    assert_eq!(winning_line(&board), None);
                    assert_eq!(is_terminal(&board), full);
                    let expected = if full {
                        GameStatus::Draw
                    } else {
                        GameStatus::InProgress
                    };
                    assert_eq!(evaluate(&board), expected);
                }
                Some(&first) => {
                    assert_eq!(winning_line(&board), Some(first));
                    assert_eq!(check_win(&board), Some(board[first[0]]));
                    assert!(is_terminal(&board));
                    let expected = match board[first[0]] {
                        Mark::X => GameStatus::XWon,
                        _ => GameStatus::OWon,
                    };
                    assert_eq!(evaluate(&board), expected);
                }
            }
        }
    }
}
