use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::get_available_moves;
use super::bot_controller::{BotInput, calculate_move};
use super::difficulty::Difficulty;
use super::error::EngineError;
use super::game_state::TicTacToeGameState;
use super::types::{BOARD_SIZE, GameStatus, Mark};
use super::win_detector::check_win;

/// Acceptable first-player win rate, in percent, against the default bot.
pub const PLAYER_WIN_RATE_RANGE: RangeInclusive<f64> = 25.0..=45.0;

pub const PLAYER_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

/// How the simulated first player (X) chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    /// Uniformly random legal cell.
    Random,
    /// Completes a line when it can, plays randomly otherwise.
    #[default]
    Opportunist,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: Vec<String>,
    pub player_wins: usize,
    pub bot_wins: usize,
    pub draws: usize,
}

impl SimulationStats {
    fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }

    pub fn player_win_rate(&self) -> f64 {
        self.percent(self.player_wins)
    }

    pub fn bot_win_rate(&self) -> f64 {
        self.percent(self.bot_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.percent(self.draws)
    }

    pub fn player_win_rate_in_range(&self) -> bool {
        PLAYER_WIN_RATE_RANGE.contains(&self.player_win_rate())
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.player_wins += 1,
            GameStatus::OWon => self.bot_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

fn choose_opponent_move(
    state: &TicTacToeGameState,
    opponent: OpponentKind,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> usize {
    if opponent == OpponentKind::Opportunist {
        let mut board = state.board;
        for &index in available_moves {
            board[index] = state.current_mark;
            let wins = check_win(&board) == Some(state.current_mark);
            board[index] = Mark::Empty;
            if wins {
                return index;
            }
        }
    }

    available_moves[rng.random_range(0..available_moves.len())]
}

/// Plays one game, X driven by `opponent` and O by the bot, until the
/// position is terminal.
pub fn simulate_game(
    opponent: OpponentKind,
    difficulty: &Difficulty,
    rng: &mut SessionRng,
) -> Result<TicTacToeGameState, EngineError> {
    let mut state = TicTacToeGameState::new();

    while state.status == GameStatus::InProgress {
        if state.move_count() >= BOARD_SIZE {
            return Err(EngineError::InvalidState(format!(
                "more than {} plies: {}",
                BOARD_SIZE,
                state.describe_moves()
            )));
        }

        let available_moves = get_available_moves(&state.board);
        if available_moves.is_empty() {
            return Err(EngineError::InvalidState(format!(
                "no available moves but game not terminal: {}",
                state.describe_moves()
            )));
        }

        let index = if state.current_mark == PLAYER_MARK {
            choose_opponent_move(&state, opponent, &available_moves, rng)
        } else {
            calculate_move(&BotInput::from_game_state(&state), difficulty, rng)?
        };

        state.place_mark(index)?;
    }

    Ok(state)
}

pub fn run_simulations(
    count: usize,
    opponent: OpponentKind,
    difficulty: &Difficulty,
    rng: &mut SessionRng,
) -> SimulationStats {
    let mut stats = SimulationStats {
        total: count,
        ..SimulationStats::default()
    };

    for game in 0..count {
        match simulate_game(opponent, difficulty, rng) {
            Ok(state) => {
                stats.record(state.status);
                stats.passed += 1;
            }
            Err(err) => {
                stats.failed += 1;
                stats.errors.push(format!("Game {}: {}", game + 1, err));
            }
        }
    }

    stats
}

/// Bot against bot, both using `difficulty`.
pub fn play_self_game(
    difficulty: &Difficulty,
    rng: &mut SessionRng,
) -> Result<TicTacToeGameState, EngineError> {
    let mut state = TicTacToeGameState::new();
    while state.status == GameStatus::InProgress {
        let index = calculate_move(&BotInput::from_game_state(&state), difficulty, rng)?;
        state.place_mark(index)?;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_self_play_is_draw() {
        let mut rng = SessionRng::new(42);
        let state = play_self_game(&Difficulty::perfect(), &mut rng).unwrap();
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.move_count(), BOARD_SIZE);
    }

    #[test]
    fn test_perfect_bot_never_loses_to_random_player() {
        let mut rng = SessionRng::new(7);
        let stats = run_simulations(500, OpponentKind::Random, &Difficulty::perfect(), &mut rng);
        assert_eq!(stats.failed, 0, "{:?}", stats.errors);
        assert_eq!(stats.player_wins, 0);
        assert_eq!(stats.passed, 500);
    }

    #[test]
    fn test_opportunist_takes_the_win() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 3, 1, 4] {
            state.place_mark(index).unwrap();
        }
        let mut rng = SessionRng::new(42);
        let available = get_available_moves(&state.board);
        for _ in 0..20 {
            assert_eq!(
                choose_opponent_move(&state, OpponentKind::Opportunist, &available, &mut rng),
                2
            );
        }
    }

    #[test]
    fn test_games_stop_at_terminal_state() {
        let mut rng = SessionRng::new(11);
        for _ in 0..200 {
            let state =
                simulate_game(OpponentKind::Random, &Difficulty::default(), &mut rng).unwrap();
            assert!(state.status.is_terminal());
            assert!(state.move_count() <= BOARD_SIZE);

            let (last_mark, _) = *state.moves.last().unwrap();
            match state.status.winner() {
                Some(winner) => {
                    assert_eq!(winner, last_mark);
                    assert!(state.winning_line().is_some());
                }
                None => assert_eq!(state.move_count(), BOARD_SIZE),
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_stats() {
        let difficulty = Difficulty::default();
        let a = run_simulations(200, OpponentKind::Random, &difficulty, &mut SessionRng::new(5));
        let b = run_simulations(200, OpponentKind::Random, &difficulty, &mut SessionRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_difficulty_win_rate_in_range() {
        let mut rng = SessionRng::new(42);
        let difficulty = Difficulty::default();
        let stats = run_simulations(10_000, OpponentKind::Opportunist, &difficulty, &mut rng);
        assert_eq!(stats.failed, 0, "{:?}", stats.errors);
        assert_eq!(stats.player_wins + stats.bot_wins + stats.draws, 10_000);
        assert!(
            stats.player_win_rate_in_range(),
            "player win rate {:.1}%",
            stats.player_win_rate()
        );
    }

    #[test]
    fn test_random_player_win_rate_against_default_bot() {
        let mut rng = SessionRng::new(42);
        let stats = run_simulations(10_000, OpponentKind::Random, &Difficulty::default(), &mut rng);
        assert_eq!(stats.failed, 0, "{:?}", stats.errors);
        let rate = stats.player_win_rate();
        assert!((18.0..=28.0).contains(&rate), "player win rate {:.1}%", rate);
        assert!(stats.bot_win_rate() > stats.player_win_rate());
    }

    #[test]
    fn test_empty_stats_rates_are_zero() {
        let stats = SimulationStats::default();
        assert_eq!(stats.player_win_rate(), 0.0);
        assert_eq!(stats.draw_rate(), 0.0);
        assert!(!stats.player_win_rate_in_range());
    }
}
