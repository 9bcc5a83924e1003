//! Property-based tests over random legal playouts.
//!
//! Developer notes:
//! - Increase cases locally with: PROPTEST_CASES=2000 cargo test --test property_tests
//! - Each playout picks moves by index into `legal_moves()`, so every move is legal.

use std::env;

use mancala_engine::{Game, GameConfig, GameResult, GameStatus, PlayerId};
use proptest::prelude::*;

/// Upper bound on moves in one playout. Every game terminates well before this.
const MAX_MOVES: usize = 20_000;

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(128);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn game_config() -> impl Strategy<Value = GameConfig> {
    (2usize..=4, 1usize..=6, 1u32..=6)
        .prop_map(|(players, cups, stones)| GameConfig::new(players, cups, stones))
}

fn store_counts(game: &Game) -> Vec<(PlayerId, u32)> {
    game.board()
        .pits()
        .iter()
        .filter(|pit| pit.is_store())
        .map(|pit| (pit.owner(), pit.stone_count()))
        .collect()
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Stones are conserved, opponents' stores never move during play and
    /// the turn only stays put after landing in the mover's store.
    #[test]
    fn prop_move_invariants(
        config in game_config(),
        choices in prop::collection::vec(any::<usize>(), 1..200),
    ) {
        let mut game = Game::from_config(&config).unwrap();
        let total = config.total_stones();
        let seats = config.players_number;

        for choice in choices {
            let Some(player) = game.active_player() else { break };
            let legal = game.legal_moves();
            prop_assert!(!legal.is_empty(), "active player {} has no legal move", player);
            let cup = legal[choice % legal.len()];

            let stores_before = store_counts(&game);
            let index_before = game.rotation().active_index();

            let outcome = game.handle_move(player, cup).unwrap();

            prop_assert_eq!(game.board().total_stones(), total);
            prop_assert_eq!(outcome.sowing.start_index, game.board().cup_index(player, cup).unwrap());
            prop_assert!(game.board().pit(outcome.sowing.start_index).unwrap().is_cup());

            if let Some(capture) = outcome.sowing.capture {
                prop_assert!(capture.stones >= 2);
                prop_assert_eq!(capture.cup_index, outcome.sowing.landing_index);
                prop_assert!(game.board().pit(capture.cup_index).unwrap().is_empty());
                prop_assert!(game.board().pit(capture.opposite_index).unwrap().is_empty());
            }

            if outcome.is_game_over() {
                prop_assert_eq!(outcome.next_player, None);
                prop_assert_eq!(game.rotation().active_index(), index_before);
                break;
            }

            for ((owner, before), (_, after)) in stores_before.iter().zip(store_counts(&game)) {
                if *owner != player {
                    prop_assert_eq!(*before, after, "opponent store changed");
                }
            }

            let expected_index = if outcome.sowing.ended_in_store() {
                index_before
            } else {
                (index_before + 1) % seats
            };
            prop_assert_eq!(game.rotation().active_index(), expected_index);
            prop_assert_eq!(outcome.extra_turn(), outcome.sowing.ended_in_store());
        }
    }

    /// Every playout ends with empty cups, all stones in stores and a
    /// result that matches the store ranking.
    #[test]
    fn prop_playout_terminates_and_scores(
        config in game_config(),
        choices in prop::collection::vec(any::<usize>(), 1..64),
    ) {
        let mut game = Game::from_config(&config).unwrap();
        let mut moves = 0;

        while let Some(player) = game.active_player() {
            prop_assert!(moves < MAX_MOVES, "game did not terminate");
            let legal = game.legal_moves();
            let cup = legal[choices[moves % choices.len()] % legal.len()];
            game.handle_move(player, cup).unwrap();
            moves += 1;
        }

        prop_assert!(game.status().is_terminal());
        prop_assert_eq!(game.history().len(), moves);
        prop_assert!(game.board().pits().iter().filter(|p| p.is_cup()).all(|p| p.is_empty()));

        let scores = game.scores();
        let total: u64 = scores.values().map(|&s| u64::from(s)).sum();
        prop_assert_eq!(total, config.total_stones());

        let best = scores.values().copied().max().unwrap();
        let all_equal = scores.values().all(|&s| s == best);
        let result = game.result().unwrap().clone();

        if all_equal {
            prop_assert_eq!(result, GameResult::Draw);
            prop_assert_eq!(game.status(), GameStatus::Draw);
        } else {
            prop_assert_eq!(game.status(), GameStatus::Win);
            for (player, &score) in scores.iter() {
                prop_assert_eq!(result.is_winner(player), score == best);
            }
        }
    }

    /// A rejected move never changes the game.
    #[test]
    fn prop_rejected_moves_are_inert(
        config in game_config(),
        seat in 0u8..6,
        cup in 0usize..9,
        warmup in prop::collection::vec(any::<usize>(), 0..20),
    ) {
        let mut game = Game::from_config(&config).unwrap();
        for choice in warmup {
            let Some(player) = game.active_player() else { break };
            let legal = game.legal_moves();
            game.handle_move(player, legal[choice % legal.len()]).unwrap();
        }

        let before = game.clone();
        if game.handle_move(PlayerId::new(seat), cup).is_err() {
            prop_assert_eq!(game, before);
        }
    }

    /// Encoding then decoding a game mid-play gives the same game.
    #[test]
    fn prop_codec_preserves_game(
        config in game_config(),
        choices in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let mut game = Game::from_config(&config).unwrap();
        for choice in choices {
            let Some(player) = game.active_player() else { break };
            let legal = game.legal_moves();
            game.handle_move(player, legal[choice % legal.len()]).unwrap();
        }

        let restored = Game::decode(&game.encode().unwrap()).unwrap();
        prop_assert_eq!(restored, game);
    }
}
