use crate::config::Validate;
use crate::games::SessionRng;
use super::board::{get_available_moves, is_board_full};
use super::difficulty::Difficulty;
use super::error::EngineError;
use super::game_state::TicTacToeGameState;
use super::types::{Board, Mark};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self {
            board,
            current_mark,
        }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
        }
    }
}

/// Picks a cell for `input.current_mark`: a random legal cell with the
/// difficulty's probability, the minimax move otherwise.
pub fn calculate_move(
    input: &BotInput,
    difficulty: &Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    difficulty.validate().map_err(EngineError::InvalidState)?;
    let available_moves = validate_input(input)?;

    if rng.random_bool_with_probability(difficulty.random_move_probability) {
        return Ok(pick_random_move(&available_moves, rng));
    }

    Ok(search_best_move(input, &available_moves))
}

pub fn calculate_random_move(
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    let available_moves = validate_input(input)?;
    Ok(pick_random_move(&available_moves, rng))
}

pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, EngineError> {
    let available_moves = validate_input(input)?;
    Ok(search_best_move(input, &available_moves))
}

fn validate_input(input: &BotInput) -> Result<Vec<usize>, EngineError> {
    if input.current_mark == Mark::Empty {
        return Err(EngineError::InvalidState("no side to move".to_string()));
    }

    if let Some(winner) = check_win(&input.board) {
        return Err(EngineError::InvalidState(format!(
            "board is already won by {}",
            winner.to_char()
        )));
    }

    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return Err(EngineError::InvalidState("board has no empty cells".to_string()));
    }

    Ok(available_moves)
}

fn pick_random_move(available_moves: &[usize], rng: &mut SessionRng) -> usize {
    let idx = rng.random_range(0..available_moves.len());
    available_moves[idx]
}

fn search_best_move(input: &BotInput, available_moves: &[usize]) -> usize {
    let bot_mark = input.current_mark;
    let opponent_mark = match bot_mark.opponent() {
        Some(mark) => mark,
        None => return available_moves[0],
    };

    let mut board = input.board;
    let result = minimax(&mut board, 0, true, bot_mark, opponent_mark, i32::MIN, i32::MAX);

    result.best_move.unwrap_or(available_moves[0])
}

struct SearchResult {
    score: i32,
    best_move: Option<usize>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Scores are from `bot_mark`'s side: `10 - depth` for its wins, `depth - 10`
/// for losses, so shorter wins and longer losses rank higher. `board` is
/// restored to its entry state before returning.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark {
            SearchResult::leaf(WIN_SCORE - depth)
        } else {
            SearchResult::leaf(depth - WIN_SCORE)
        };
    }

    if is_board_full(board) {
        return SearchResult::leaf(0);
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        let mut best_move = None;
        for index in moves {
            board[index] = bot_mark;
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark, alpha, beta).score;
            board[index] = Mark::Empty;

            if eval > max_eval {
                max_eval = eval;
                best_move = Some(index);
            }
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        SearchResult {
            score: max_eval,
            best_move,
        }
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board[index] = opponent_mark;
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark, alpha, beta).score;
            board[index] = Mark::Empty;

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        SearchResult::leaf(min_eval)
    }
}
