mod board;
mod bot_controller;
mod difficulty;
mod error;
mod game_state;
mod simulation;
mod types;
mod win_detector;

pub use board::{
    board_from_slice, empty_board, format_board, get_available_moves, is_board_full, parse_board,
};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move, calculate_random_move};
pub use difficulty::{DEFAULT_RANDOM_MOVE_PROBABILITY, Difficulty};
pub use error::EngineError;
pub use game_state::TicTacToeGameState;
pub use simulation::{
    BOT_MARK, OpponentKind, PLAYER_MARK, PLAYER_WIN_RATE_RANGE, SimulationStats, play_self_game,
    run_simulations, simulate_game,
};
pub use types::{BOARD_SIZE, BOARD_WIDTH, Board, GameStatus, Line, Mark, Position, WinningLine};
pub use win_detector::{
    WIN_PATTERNS, check_win, check_win_with_line, evaluate, is_draw, is_terminal, winning_line,
};
