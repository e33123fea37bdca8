//! Randomised checks of the ranking invariants.
//!
//! Builds many seeded random boards and verifies that every ranked list is
//! on the board, capped, one-per-piece and sorted, and that the print-once
//! evaluator agrees with the pure pipeline.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use draughtsman::board::{Board, Candidate, Cell, Square, BOARD_SIZE};
use draughtsman::config::EvalConfig;
use draughtsman::eval::threat_score;
use draughtsman::evaluator::MoveEvaluator;
use draughtsman::movegen::generate_candidates;
use draughtsman::search::evaluate;

/// Fills a board at random and returns it with its piece lists.
fn random_position(rng: &mut StdRng) -> (Board, Vec<Square>, Vec<Square>) {
    let mut board = Board::empty();
    for sq in 0..BOARD_SIZE {
        let cell = match rng.gen_range(0..10) {
            0 | 1 => Cell::Own,
            2 | 3 => Cell::Enemy,
            4 => Cell::Void,
            _ => Cell::Empty,
        };
        board.set(sq, cell);
    }
    let own = board.own_pieces();
    let enemy = board.enemy_pieces();
    (board, own, enemy)
}

fn configs() -> Vec<EvalConfig> {
    vec![
        EvalConfig::default(),
        EvalConfig {
            edge_guard: true,
            ..EvalConfig::default()
        },
        EvalConfig {
            top_n: 3,
            ..EvalConfig::default()
        },
    ]
}

#[test]
fn candidates_stay_on_board() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, own, enemy) = random_position(&mut rng);
        for cfg in configs() {
            for c in generate_candidates(&board, &own, &enemy, &cfg) {
                assert!(c.to() < BOARD_SIZE, "seed {}: {:?}", seed, c);
                assert_eq!(board.get(c.to()), Some(Cell::Empty));
                if let Some(captured) = c.captured() {
                    assert!(captured < BOARD_SIZE);
                    assert_eq!(board.get(captured), Some(Cell::Enemy));
                }
            }
        }
    }
}

#[test]
fn ranked_list_is_capped_distinct_and_sorted() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, own, enemy) = random_position(&mut rng);
        for cfg in configs() {
            let ranked = evaluate(&board, &own, &enemy, &cfg);
            assert!(ranked.len() <= cfg.top_n);

            let pieces: HashSet<Square> = ranked.iter().map(Candidate::piece).collect();
            assert_eq!(pieces.len(), ranked.len(), "seed {}: duplicate piece", seed);

            assert!(
                ranked.windows(2).all(|w| w[0].score() >= w[1].score()),
                "seed {}: not sorted: {:?}",
                seed,
                ranked
            );
        }
    }
}

#[test]
fn ranked_list_picks_each_pieces_best() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, own, enemy) = random_position(&mut rng);
        let cfg = EvalConfig::default();
        let all = generate_candidates(&board, &own, &enemy, &cfg);
        for chosen in evaluate(&board, &own, &enemy, &cfg) {
            let best_base = all
                .iter()
                .filter(|c| c.piece() == chosen.piece())
                .map(|c| c.score() + if c.is_jump() { cfg.jump_bonus } else { cfg.move_bonus })
                .max()
                .unwrap();
            assert_eq!(chosen.score(), best_base, "seed {}", seed);
        }
    }
}

#[test]
fn jump_scores_match_threat() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, own, enemy) = random_position(&mut rng);
        let cfg = EvalConfig::default();
        for c in generate_candidates(&board, &own, &enemy, &cfg) {
            match c {
                Candidate::Jump { to, score, .. } => {
                    assert_eq!(score, cfg.jump_base - threat_score(&board, to, &enemy, &cfg));
                }
                Candidate::Move { score, .. } => assert_eq!(score, cfg.move_base),
            }
        }
    }
}

#[test]
fn print_once_matches_pure_pipeline() {
    let mut rng = StdRng::seed_from_u64(7);
    let cfg = EvalConfig::default();
    let mut evaluator = MoveEvaluator::new();
    let mut sink = Vec::new();

    for _ in 0..20 {
        let (board, own, enemy) = random_position(&mut rng);
        let reported = evaluator
            .evaluate(&board, &own, &enemy, &cfg, &mut sink)
            .unwrap();
        assert_eq!(reported, evaluate(&board, &own, &enemy, &cfg));
        let repeated = evaluator
            .evaluate(&board, &own, &enemy, &cfg, &mut sink)
            .unwrap();
        assert!(repeated.is_empty());
        evaluator.reset_evaluation_flag();
    }
}
