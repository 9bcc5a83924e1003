use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mancala_engine::{Board, Game, GameConfig, PlayerId};

/// Play the first legal cup until the game ends.
fn play_out(mut game: Game) -> Game {
    while let Some(player) = game.active_player() {
        let Some(&cup) = game.legal_moves().first() else {
            break;
        };
        game.handle_move(player, cup).unwrap();
    }
    game
}

fn bench_single_move(c: &mut Criterion) {
    let board = Board::new(&GameConfig::default());

    c.bench_function("make_move_classic", |b| {
        b.iter(|| {
            let mut board = board.clone();
            board.make_move(black_box(PlayerId::new(0)), black_box(3)).unwrap()
        })
    });
}

fn bench_long_sow(c: &mut Criterion) {
    let config = GameConfig::new(4, 6, 48);
    let board = Board::new(&config);

    c.bench_function("make_move_wrapping_sow", |b| {
        b.iter(|| {
            let mut board = board.clone();
            board.make_move(black_box(PlayerId::new(0)), black_box(6)).unwrap()
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let game = Game::create(2, 6, 6).unwrap();

    c.bench_function("full_game_first_cup", |b| {
        b.iter(|| play_out(black_box(game.clone())))
    });
}

fn bench_full_game_four_players(c: &mut Criterion) {
    let game = Game::create(4, 6, 4).unwrap();

    c.bench_function("full_game_four_players", |b| {
        b.iter(|| play_out(black_box(game.clone())))
    });
}

criterion_group!(
    benches,
    bench_single_move,
    bench_long_sow,
    bench_full_game,
    bench_full_game_four_players
);
criterion_main!(benches);
