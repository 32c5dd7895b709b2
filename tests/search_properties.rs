//! Property checks over seeded random positions.
//!
//! Positions are reached with random playouts from the opening, so each seed
//! gives a reproducible game. The exact and heuristic searches are compared
//! against plain minimax without pruning.

use fastrand::Rng;

use reversi_rust::board::{Cell, Side};
use reversi_rust::config::{EngineConfig, PassRule};
use reversi_rust::constants::WIN_SCORE;
use reversi_rust::engine::{Decision, select_move};
use reversi_rust::eval::evaluate;
use reversi_rust::playout::{play_against_random, random_move, random_playout};
use reversi_rust::position::{GameState, MoveOrder};
use reversi_rust::search::{exact, heuristic, mobility_search};

const SEEDS: u64 = 40;

// =============================================================================
// Helper functions
// =============================================================================

/// Play random moves from the opening until at most `empties` cells are left.
/// Returns `None` if the game ended first.
fn random_endgame(seed: u64, empties: usize) -> Option<GameState> {
    let mut rng = Rng::with_seed(seed);
    let mut pos = GameState::new();
    while pos.board().empties() > empties {
        if pos.is_over() {
            return None;
        }
        pos = random_playout(&pos, 1, &mut rng);
    }
    if pos.is_over() { None } else { Some(pos) }
}

/// Every position visited by a random game, in order.
fn random_game(seed: u64) -> Vec<GameState> {
    let mut rng = Rng::with_seed(seed);
    let mut pos = GameState::new();
    let mut visited = vec![pos];
    while !pos.is_over() {
        pos = random_playout(&pos, 1, &mut rng);
        visited.push(pos);
    }
    visited
}

/// Minimax over the piece differential with no pruning, using the same
/// terminal and pass rules as the engine.
fn plain_minimax(pos: &GameState, rule: PassRule) -> i32 {
    let board = pos.board();
    if board.empties() == 0 {
        return board.differential();
    }
    if board.count(Side::Black) == 0 {
        return -64;
    }
    if board.count(Side::White) == 0 {
        return 64;
    }

    let moves = pos.legal_moves();
    if moves.is_empty() {
        return match rule {
            PassRule::Concede => -pos.to_move().sign() * 64,
            PassRule::Continue if pos.passed().has_moves() => plain_minimax(&pos.passed(), rule),
            PassRule::Continue => board.differential(),
        };
    }

    let scores = moves
        .iter()
        .map(|&mv| plain_minimax(&pos.apply(mv).unwrap(), rule));
    match pos.to_move() {
        Side::Black => scores.max().unwrap(),
        Side::White => scores.min().unwrap(),
    }
}

/// Budgeted minimax over the static evaluation with no pruning, charging
/// the same effort per ply as the engine.
fn plain_heuristic(pos: &GameState, budget: f64, config: &EngineConfig) -> f64 {
    let board = pos.board();
    if board.empties() == 0 {
        return WIN_SCORE * board.differential().signum() as f64;
    }
    if board.count(Side::Black) == 0 {
        return -WIN_SCORE;
    }
    if board.count(Side::White) == 0 {
        return WIN_SCORE;
    }
    if budget <= 0.0 {
        return evaluate(pos, config);
    }

    let moves = pos.legal_moves();
    if moves.is_empty() {
        return match config.pass_rule {
            PassRule::Concede => -pos.to_move().sign() as f64 * WIN_SCORE,
            PassRule::Continue if pos.passed().has_moves() => {
                plain_heuristic(&pos.passed(), budget, config)
            }
            PassRule::Continue => WIN_SCORE * board.differential().signum() as f64,
        };
    }

    let remaining = budget - config.effort_per_move * moves.len() as f64;
    let scores = moves
        .iter()
        .map(|&mv| plain_heuristic(&pos.apply(mv).unwrap(), remaining, config));
    match pos.to_move() {
        Side::Black => scores.fold(f64::NEG_INFINITY, f64::max),
        Side::White => scores.fold(f64::INFINITY, f64::min),
    }
}

/// Compare the pruned exact search with plain minimax on endgames of
/// `empties` empty cells, under both pass rules and both move orders.
fn check_exact_search(empties: usize, seeds: u64) {
    for rule in [PassRule::Continue, PassRule::Concede] {
        for seed in 0..seeds {
            let Some(pos) = random_endgame(seed, empties) else {
                continue;
            };
            let expected = plain_minimax(&pos, rule);

            for order in [MoveOrder::Raster, MoveOrder::Tiered] {
                let config = EngineConfig {
                    pass_rule: rule,
                    move_order: order,
                    ..EngineConfig::default()
                };
                let (pruned, mv) = exact(&pos, i32::MIN, i32::MAX, &config);
                assert_eq!(pruned, expected, "seed {seed}, {rule:?}, {order:?}");

                // The chosen move actually achieves the value
                if let Some(mv) = mv {
                    let child = pos.apply(mv).unwrap();
                    assert_eq!(plain_minimax(&child, rule), expected, "seed {seed}");
                }
            }
        }
    }
}

// =============================================================================
// Move generation
// =============================================================================

#[test]
fn test_generated_moves_capture() {
    for seed in 0..SEEDS {
        for pos in random_game(seed) {
            for mv in pos.legal_moves() {
                assert_eq!(pos.board().read(mv.x, mv.y), Some(Cell::Empty));
                assert!(pos.flips(mv.x, mv.y) >= 1, "seed {seed}: {mv} flips nothing");
                assert_eq!(mv.side, pos.to_move());
                assert!(pos.apply(mv).is_some());
            }
        }
    }
}

#[test]
fn test_orders_generate_same_set() {
    for seed in 0..SEEDS {
        for pos in random_game(seed) {
            let mut raster = pos.legal_moves_ordered(MoveOrder::Raster);
            let mut tiered = pos.legal_moves_ordered(MoveOrder::Tiered);
            raster.sort_by_key(|m| (m.y, m.x));
            tiered.sort_by_key(|m| (m.y, m.x));
            assert_eq!(raster, tiered);
            assert_eq!(raster.len(), pos.mobility());
        }
    }
}

#[test]
fn test_move_grows_piece_count() {
    for seed in 0..SEEDS {
        let mut rng = Rng::with_seed(seed);
        let mut pos = GameState::new();
        while !pos.is_over() {
            let Some(mv) = random_move(&pos, &mut rng) else {
                pos = pos.passed();
                continue;
            };
            let flips = pos.flips(mv.x, mv.y);
            let next = pos.apply(mv).unwrap();

            let before = pos.board();
            let after = next.board();
            let mover = pos.to_move();
            assert_eq!(after.count(mover), before.count(mover) + flips + 1);
            assert_eq!(after.count(mover.opponent()), before.count(mover.opponent()) - flips);
            assert_eq!(after.empties(), before.empties() - 1);
            assert_eq!(
                after.count(Side::Black) + after.count(Side::White) + after.empties(),
                64
            );
            assert_eq!(next.to_move(), mover.opponent());
            pos = next;
        }
    }
}

// =============================================================================
// Exact search
// =============================================================================

#[test]
fn test_pruning_matches_plain_minimax() {
    check_exact_search(8, SEEDS / 2);
}

#[test]
#[ignore = "unpruned minimax over 12 empties is slow"]
fn test_pruning_matches_plain_minimax_deep() {
    check_exact_search(12, 4);
}

#[test]
fn test_endgame_decision_is_legal() {
    let config = EngineConfig::default();
    for seed in 0..SEEDS {
        let Some(pos) = random_endgame(seed, 6) else {
            continue;
        };
        match select_move(&pos, &config) {
            Decision::Pass => assert!(!pos.has_moves()),
            Decision::Play { mv, .. } => assert!(pos.is_legal(mv.x, mv.y)),
        }
    }
}

// =============================================================================
// Heuristic search
// =============================================================================

#[test]
fn test_heuristic_pruning_matches_plain_search() {
    for rule in [PassRule::Continue, PassRule::Concede] {
        for order in [MoveOrder::Raster, MoveOrder::Tiered] {
            let config = EngineConfig {
                effort_budget: 8.0,
                pass_rule: rule,
                move_order: order,
                ..EngineConfig::default()
            };
            for seed in 0..SEEDS / 2 {
                for pos in random_game(seed).into_iter().step_by(10) {
                    let (pruned, _) =
                        heuristic(&pos, 8.0, f64::NEG_INFINITY, f64::INFINITY, &config);
                    let expected = plain_heuristic(&pos, 8.0, &config);
                    assert_eq!(pruned, expected, "seed {seed}, {rule:?}, {order:?}");
                }
            }
        }
    }
}

// =============================================================================
// Mobility heuristic
// =============================================================================

#[test]
fn test_mobility_choice_is_minimal() {
    let config = EngineConfig::default();
    for seed in 0..SEEDS {
        for pos in random_game(seed).into_iter().step_by(5) {
            let Some((mv, replies)) = mobility_search(&pos, &config) else {
                assert!(!pos.has_moves());
                continue;
            };
            assert!(pos.is_legal(mv.x, mv.y));
            assert_eq!(pos.apply(mv).unwrap().mobility(), replies);
            for other in pos.legal_moves() {
                assert!(replies <= pos.apply(other).unwrap().mobility());
            }
        }
    }
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_engine_games_stay_legal() {
    let config = EngineConfig::default();
    for seed in 0..3 {
        let mut rng = Rng::with_seed(seed);
        let record = play_against_random(Side::Black, &config, &mut rng);
        assert!(record.final_position.is_over());

        // Replay the record and check every move
        let mut pos = GameState::new();
        for mv in &record.moves {
            pos = match mv {
                Some(mv) => pos.apply(*mv).expect("recorded move is legal"),
                None => {
                    assert!(!pos.has_moves());
                    pos.passed()
                }
            };
        }
        assert_eq!(pos, record.final_position);
    }
}
