mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::config::EngineConfig;
use tictactoe_engine::games::tictactoe::{
    BotInput, Difficulty, GameStatus, Mark, OpponentKind, PLAYER_WIN_RATE_RANGE, Position,
    calculate_move, check_win_with_line, evaluate, format_board, parse_board, play_self_game,
    run_simulations,
};
use tictactoe_engine::{SessionRng, log, log_error, log_warn, logger};

#[derive(Parser)]
#[command(name = "tictactoe_simulator")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML config; defaults to tictactoe_engine_config.yaml next to the binary.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play X (scripted opponent) against the O bot many times and report statistics.
    Simulate {
        #[arg(long)]
        games: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        opponent: Option<OpponentArg>,
        #[arg(long)]
        random_move_probability: Option<f64>,
    },
    /// Classify a board such as "XO..X.O..".
    Evaluate {
        #[arg(long)]
        board: String,
    },
    /// Ask the bot for a move.
    BestMove {
        #[arg(long)]
        board: String,
        #[arg(long, value_enum)]
        mark: MarkArg,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        random_move_probability: Option<f64>,
    },
    /// Let two bots play each other.
    SelfPlay {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        random_move_probability: Option<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OpponentArg {
    Random,
    Opportunist,
}

impl From<OpponentArg> for OpponentKind {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Random => OpponentKind::Random,
            OpponentArg::Opportunist => OpponentKind::Opportunist,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

fn make_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}

fn resolve_difficulty(
    config: &EngineConfig,
    random_move_probability: Option<f64>,
) -> Result<Difficulty, String> {
    match random_move_probability {
        Some(p) => Difficulty::new(p),
        None => Ok(config.bot),
    }
}

fn run_simulate(
    config: &EngineConfig,
    games: Option<usize>,
    seed: Option<u64>,
    opponent: Option<OpponentArg>,
    random_move_probability: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let difficulty = resolve_difficulty(config, random_move_probability)?;
    let games = games.unwrap_or(config.simulation.games);
    if games == 0 {
        return Err("Game count must be at least 1".into());
    }
    let opponent = opponent.map(OpponentKind::from).unwrap_or(config.simulation.opponent);
    let mut rng = make_rng(seed.or(config.simulation.seed));

    log!(
        "Running {} simulations (opponent: {:?}, random move probability: {}, seed: {})",
        games,
        opponent,
        difficulty.random_move_probability,
        rng.seed()
    );

    let stats = run_simulations(games, opponent, &difficulty, &mut rng);

    log!("Simulations: {}/{} passed", stats.passed, stats.total);
    log!("Player wins: {} ({:.1}%)", stats.player_wins, stats.player_win_rate());
    log!("Bot wins: {} ({:.1}%)", stats.bot_wins, stats.bot_win_rate());
    log!("Draws: {} ({:.1}%)", stats.draws, stats.draw_rate());

    if stats.failed > 0 {
        log_error!("{} simulation failures", stats.failed);
        for error in stats.errors.iter().take(10) {
            log_error!("{}", error);
        }
        if stats.errors.len() > 10 {
            log_error!("... and {} more errors", stats.errors.len() - 10);
        }
    }

    if stats.player_win_rate_in_range() {
        log!(
            "Player win rate {:.1}% is in acceptable range ({}-{}%)",
            stats.player_win_rate(),
            PLAYER_WIN_RATE_RANGE.start(),
            PLAYER_WIN_RATE_RANGE.end()
        );
    } else {
        log_warn!(
            "Player win rate {:.1}% is outside expected range ({}-{}%)",
            stats.player_win_rate(),
            PLAYER_WIN_RATE_RANGE.start(),
            PLAYER_WIN_RATE_RANGE.end()
        );
    }

    Ok(())
}

fn run_evaluate(board_text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let board = parse_board(board_text)?;
    log!("Board:\n{}", format_board(&board));

    match evaluate(&board) {
        GameStatus::InProgress => log!("Status: in progress"),
        GameStatus::Draw => log!("Status: draw"),
        GameStatus::XWon | GameStatus::OWon => {
            if let Some(line) = check_win_with_line(&board) {
                log!(
                    "Status: {} wins with cells {:?} (from {:?} to {:?})",
                    line.mark.to_char(),
                    line.cells,
                    line.start(),
                    line.end()
                );
            }
        }
    }

    Ok(())
}

fn run_best_move(
    config: &EngineConfig,
    board_text: &str,
    mark: MarkArg,
    seed: Option<u64>,
    random_move_probability: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let board = parse_board(board_text)?;
    let difficulty = resolve_difficulty(config, random_move_probability)?;
    let mut rng = make_rng(seed);

    let index = calculate_move(&BotInput::new(board, mark.into()), &difficulty, &mut rng)?;
    let position = Position::from_index(index);
    log!(
        "Bot move for {}: {} (row {}, column {})",
        Mark::from(mark).to_char(),
        index,
        position.y,
        position.x
    );

    Ok(())
}

fn run_self_play(
    config: &EngineConfig,
    seed: Option<u64>,
    random_move_probability: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let difficulty = resolve_difficulty(config, random_move_probability)?;
    let mut rng = make_rng(seed);

    let state = play_self_game(&difficulty, &mut rng)?;
    log!("Moves: {}", state.describe_moves());
    log!("Final board:\n{}", format_board(&state.board));
    log!("Result: {:?}", state.status);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Simulator".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(args.config).get_config()?;

    let result = match args.command {
        Command::Simulate {
            games,
            seed,
            opponent,
            random_move_probability,
        } => run_simulate(&config, games, seed, opponent, random_move_probability),
        Command::Evaluate { board } => run_evaluate(&board),
        Command::BestMove {
            board,
            mark,
            seed,
            random_move_probability,
        } => run_best_move(&config, &board, mark, seed, random_move_probability),
        Command::SelfPlay {
            seed,
            random_move_probability,
        } => run_self_play(&config, seed, random_move_probability),
    };

    if let Err(ref err) = result {
        log_error!("{}", err);
    }

    result
}
