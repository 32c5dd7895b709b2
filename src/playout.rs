//! Random playouts.
//!
//! A playout plays uniformly random legal moves, passing when stuck, until
//! the game ends or a ply limit is reached. Used by the demo to give the
//! engine an opponent and by tests to reach arbitrary mid-game positions.
//! All randomness comes from a caller-supplied `fastrand::Rng`, so a seed
//! reproduces the same game.

use fastrand::Rng;

use crate::board::Side;
use crate::config::EngineConfig;
use crate::engine::{Decision, select_move};
use crate::position::{GameState, Move};

/// Pick a uniformly random legal move, or `None` if the side to move must pass.
pub fn random_move(pos: &GameState, rng: &mut Rng) -> Option<Move> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play up to `plies` random moves (passes included) from `pos`.
///
/// Stops early when neither side can move.
pub fn random_playout(pos: &GameState, plies: usize, rng: &mut Rng) -> GameState {
    let mut pos = *pos;
    for _ in 0..plies {
        if pos.is_over() {
            break;
        }
        pos = match random_move(&pos, rng) {
            Some(mv) => pos.play(mv.x, mv.y).unwrap_or(pos),
            None => pos.passed(),
        };
    }
    pos
}

/// A finished game between the engine and a random opponent.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Moves in order; `None` marks a pass.
    pub moves: Vec<Option<Move>>,
    pub final_position: GameState,
}

impl GameRecord {
    /// Black count minus White count at the end of the game.
    pub fn differential(&self) -> i32 {
        self.final_position.board().differential()
    }
}

/// Play a full game from the opening: the engine plays `engine_side`, the
/// other side plays random moves drawn from `rng`.
pub fn play_against_random(engine_side: Side, config: &EngineConfig, rng: &mut Rng) -> GameRecord {
    let mut pos = GameState::new();
    let mut moves = Vec::new();

    while !pos.is_over() {
        let mv = if pos.to_move() == engine_side {
            match select_move(&pos, config) {
                Decision::Pass => None,
                Decision::Play { mv, .. } => Some(mv),
            }
        } else {
            random_move(&pos, rng)
        };

        pos = match mv {
            Some(mv) => pos.apply(mv).unwrap_or_else(|| pos.passed()),
            None => pos.passed(),
        };
        moves.push(mv);
    }

    GameRecord {
        moves,
        final_position: pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = Rng::with_seed(7);
        let pos = GameState::new();
        for _ in 0..20 {
            let mv = random_move(&pos, &mut rng).unwrap();
            assert!(pos.is_legal(mv.x, mv.y));
        }
    }

    #[test]
    fn test_playout_is_reproducible() {
        let a = random_playout(&GameState::new(), 30, &mut Rng::with_seed(42));
        let b = random_playout(&GameState::new(), 30, &mut Rng::with_seed(42));
        assert_eq!(a, b);
        assert!(a.board().empties() < 60);
    }

    #[test]
    fn test_full_playout_ends_game() {
        let end = random_playout(&GameState::new(), 200, &mut Rng::with_seed(3));
        assert!(end.is_over());
    }
}
