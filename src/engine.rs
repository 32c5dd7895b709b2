//! Phase selection and the top-level move picker.
//!
//! The game is split into three phases, detected from the position alone:
//!
//! 1. Few empty cells left: solve the endgame exactly.
//! 2. Either side holds enough corners: minimize the opponent's mobility.
//! 3. Otherwise: effort-bounded heuristic search.

use std::fmt;

use crate::board::Side;
use crate::config::EngineConfig;
use crate::position::{GameState, Move};
use crate::search::{endgame_search, heuristic_search, mobility_search};

/// The search strategy chosen for a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Endgame,
    Mobility,
    Heuristic,
}

impl Strategy {
    /// Pick the strategy for `pos`. First matching rule wins.
    pub fn for_position(pos: &GameState, config: &EngineConfig) -> Strategy {
        let board = pos.board();
        if board.empties() < config.endgame_empties {
            return Strategy::Endgame;
        }
        let corners = board.corners(Side::Black).max(board.corners(Side::White));
        if corners >= config.corner_control {
            return Strategy::Mobility;
        }
        Strategy::Heuristic
    }

    /// Run the strategy. The score's meaning depends on the strategy: final
    /// differential, opponent reply count, or heuristic evaluation.
    pub fn search(self, pos: &GameState, config: &EngineConfig) -> Option<(Move, f64)> {
        match self {
            Strategy::Endgame => endgame_search(pos, config).map(|(mv, s)| (mv, s as f64)),
            Strategy::Mobility => mobility_search(pos, config).map(|(mv, n)| (mv, n as f64)),
            Strategy::Heuristic => heuristic_search(pos, config),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Endgame => write!(f, "endgame"),
            Strategy::Mobility => write!(f, "mobility"),
            Strategy::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Result of [`select_move`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Decision {
    /// No legal move: the side to move must pass.
    Pass,
    Play {
        mv: Move,
        strategy: Strategy,
        score: f64,
    },
}

impl Decision {
    pub fn mv(&self) -> Option<Move> {
        match self {
            Decision::Pass => None,
            Decision::Play { mv, .. } => Some(*mv),
        }
    }
}

/// Wire form: the move coordinate, or `PASS`.
impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Pass => write!(f, "PASS"),
            Decision::Play { mv, .. } => write!(f, "{mv}"),
        }
    }
}

/// Legal moves for the side to move, in the configured order.
pub fn generate_legal_moves(pos: &GameState, config: &EngineConfig) -> Vec<Move> {
    pos.legal_moves_ordered(config.move_order)
}

/// Choose a move for the side to move.
pub fn select_move(pos: &GameState, config: &EngineConfig) -> Decision {
    if !pos.has_moves() {
        return Decision::Pass;
    }

    let strategy = Strategy::for_position(pos, config);
    match strategy.search(pos, config) {
        Some((mv, score)) => Decision::Play {
            mv,
            strategy,
            score,
        },
        // Every strategy returns a move whenever one exists.
        None => unreachable!("{strategy} search found no move in a position with legal moves"),
    }
}
