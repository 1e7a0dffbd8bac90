use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::SessionRng;
use tictactoe_engine::games::tictactoe::{
    BotInput, Difficulty, Mark, OpponentKind, calculate_minimax_move, empty_board, parse_board,
    run_simulations,
};

fn bench_minimax_single_move_empty_board() {
    let input = BotInput::new(empty_board(), Mark::X);
    black_box(calculate_minimax_move(&input).ok());
}

fn bench_minimax_single_move_mid_game() {
    let board = match parse_board("XO./.X./...") {
        Ok(board) => board,
        Err(_) => return,
    };
    let input = BotInput::new(board, Mark::O);
    black_box(calculate_minimax_move(&input).ok());
}

fn bench_hundred_default_games() {
    let mut rng = SessionRng::new(42);
    black_box(run_simulations(
        100,
        OpponentKind::Random,
        &Difficulty::default(),
        &mut rng,
    ));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.bench_function("hundred_games", |b| b.iter(bench_hundred_default_games));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
