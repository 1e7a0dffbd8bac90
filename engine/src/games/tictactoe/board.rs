use super::error::EngineError;
use super::types::{BOARD_SIZE, BOARD_WIDTH, Board, Mark};

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_SIZE]
}

/// Legal moves in ascending index order. Every caller that needs the set of
/// playable cells goes through this.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::with_capacity(BOARD_SIZE);
    for (index, &cell) in board.iter().enumerate() {
        if cell == Mark::Empty {
            moves.push(index);
        }
    }
    moves
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

pub fn board_from_slice(cells: &[Mark]) -> Result<Board, EngineError> {
    <Board>::try_from(cells).map_err(|_| EngineError::InvalidBoardShape { len: cells.len() })
}

/// Parses a board such as `"XXX/OO./..."` or `"XO..X.O.."`. Whitespace, `/`
/// and `|` are separators; `.`, `-` and `_` are empty cells.
pub fn parse_board(text: &str) -> Result<Board, EngineError> {
    let mut cells = Vec::with_capacity(BOARD_SIZE);
    for (position, character) in text.chars().enumerate() {
        if character.is_whitespace() || character == '/' || character == '|' {
            continue;
        }
        let mark = Mark::from_char(character)
            .ok_or(EngineError::InvalidCell { character, position })?;
        cells.push(mark);
    }
    board_from_slice(&cells)
}

pub fn format_board(board: &Board) -> String {
    board
        .chunks(BOARD_WIDTH)
        .map(|row| row.iter().map(Mark::to_char).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
