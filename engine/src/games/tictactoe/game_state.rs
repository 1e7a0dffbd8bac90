use super::board::empty_board;
use super::error::EngineError;
use super::types::{BOARD_SIZE, Board, GameStatus, Line, Mark};
use super::win_detector::{evaluate, winning_line};

/// Authoritative board and turn owned by a host loop. X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub moves: Vec<(Mark, usize)>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            moves: Vec::with_capacity(BOARD_SIZE),
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::InvalidState("game is already over".to_string()));
        }

        if index >= BOARD_SIZE {
            return Err(EngineError::CellOutOfRange(index));
        }

        if self.board[index] != Mark::Empty {
            return Err(EngineError::CellOccupied(index));
        }

        self.board[index] = self.current_mark;
        self.last_move = Some(index);
        self.moves.push((self.current_mark, index));

        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn describe_moves(&self) -> String {
        self.moves
            .iter()
            .map(|(mark, index)| format!("{} -> {}", mark.to_char(), index))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new();
        for &index in moves {
            state.place_mark(index).unwrap();
        }
        state
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);
        state.place_mark(4).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, Some(0));
        assert_eq!(state.describe_moves(), "X -> 4, O -> 0");
    }

    #[test]
    fn test_win_freezes_state() {
        let mut state = play(&[0, 3, 1, 4]);
        assert_eq!(state.place_mark(2), Ok(GameStatus::XWon));
        assert_eq!(state.winning_line(), Some([0, 1, 2]));
        assert_eq!(state.current_mark, Mark::X);

        let before = state.board;
        assert!(matches!(state.place_mark(8), Err(EngineError::InvalidState(_))));
        assert_eq!(state.board, before);
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.move_count(), 5);
    }

    #[test]
    fn test_draw_detected_on_last_cell() {
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_rejects_bad_cells() {
        let mut state = play(&[4]);
        assert_eq!(state.place_mark(4), Err(EngineError::CellOccupied(4)));
        assert_eq!(state.place_mark(9), Err(EngineError::CellOutOfRange(9)));
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.move_count(), 1);
    }
}
