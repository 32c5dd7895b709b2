//! Move search strategies.
//!
//! Three strategies share the move generator and differ in what they optimize:
//!
//! - [`endgame_search`] - exact alpha-beta minimax over the final piece
//!   differential, used when the remaining tree is small
//! - [`mobility_search`] - one-ply search that leaves the opponent the fewest replies
//! - [`heuristic_search`] - alpha-beta over the static evaluation, with an
//!   effort budget instead of a fixed depth
//!
//! All scores are from Black's point of view: Black maximizes, White minimizes.
//! Each recursive call works on its own `GameState` value, so sibling
//! branches never share a board.

use crate::board::Side;
use crate::config::{EngineConfig, PassRule};
use crate::constants::{MAX_DIFFERENTIAL, WIN_SCORE};
use crate::eval::evaluate;
use crate::position::{GameState, Move};

/// Outcome of a leaf that needs no further search.
enum Terminal {
    /// Board full or both sides stuck: final differential.
    Finished(i32),
    /// One side has no stones left. Holds the side that was wiped out.
    Eliminated(Side),
}

fn terminal(pos: &GameState) -> Option<Terminal> {
    let board = pos.board();
    if board.empties() == 0 {
        return Some(Terminal::Finished(board.differential()));
    }
    for side in [Side::Black, Side::White] {
        if board.count(side) == 0 {
            return Some(Terminal::Eliminated(side));
        }
    }
    None
}

/// Running best move for one node.
struct Best<T> {
    side: Side,
    mv: Move,
    score: Option<T>,
}

impl<T: PartialOrd + Copy> Best<T> {
    fn new(side: Side, first: Move) -> Self {
        Self {
            side,
            mv: first,
            score: None,
        }
    }

    /// Record `score` for `mv` if it strictly improves on the best so far.
    fn offer(&mut self, mv: Move, score: T) {
        let better = match (self.score, self.side) {
            (None, _) => true,
            (Some(best), Side::Black) => score > best,
            (Some(best), Side::White) => score < best,
        };
        if better {
            self.score = Some(score);
            self.mv = mv;
        }
    }
}

// =============================================================================
// Exact endgame search
// =============================================================================

/// Solve the position exactly. Returns the move for the side to move and the
/// final differential it guarantees, or `None` if there is no legal move.
pub fn endgame_search(pos: &GameState, config: &EngineConfig) -> Option<(Move, i32)> {
    let (score, mv) = exact(pos, i32::MIN, i32::MAX, config);
    mv.map(|mv| (mv, score))
}

/// Alpha-beta minimax over the piece differential.
///
/// Returns the value of `pos` and the move achieving it. The move is `None`
/// at terminal nodes and at forced passes.
pub fn exact(
    pos: &GameState,
    mut alpha: i32,
    mut beta: i32,
    config: &EngineConfig,
) -> (i32, Option<Move>) {
    match terminal(pos) {
        Some(Terminal::Finished(diff)) => return (diff, None),
        Some(Terminal::Eliminated(side)) => return (-side.sign() * MAX_DIFFERENTIAL, None),
        None => {}
    }

    let moves = pos.legal_moves_ordered(config.move_order);
    let Some(&first) = moves.first() else {
        return match config.pass_rule {
            PassRule::Concede => (-pos.to_move().sign() * MAX_DIFFERENTIAL, None),
            PassRule::Continue => {
                let passed = pos.passed();
                if passed.has_moves() {
                    (exact(&passed, alpha, beta, config).0, None)
                } else {
                    (pos.board().differential(), None)
                }
            }
        };
    };

    let side = pos.to_move();
    let mut best = Best::new(side, first);

    for mv in moves {
        let Some(child) = pos.play(mv.x, mv.y) else {
            continue;
        };
        let (score, _) = exact(&child, alpha, beta, config);
        best.offer(mv, score);

        match side {
            Side::Black => alpha = alpha.max(score),
            Side::White => beta = beta.min(score),
        }
        if alpha >= beta {
            break;
        }
    }

    (best.score.unwrap_or(0), Some(best.mv))
}

// =============================================================================
// Mobility minimization
// =============================================================================

/// Pick the move that leaves the opponent the fewest legal replies.
/// Ties go to the first move in generation order.
pub fn mobility_search(pos: &GameState, config: &EngineConfig) -> Option<(Move, usize)> {
    let mut best: Option<(Move, usize)> = None;

    for mv in pos.legal_moves_ordered(config.move_order) {
        let Some(child) = pos.play(mv.x, mv.y) else {
            continue;
        };
        let replies = child.mobility();
        if best.is_none_or(|(_, fewest)| replies < fewest) {
            best = Some((mv, replies));
        }
    }

    best
}

// =============================================================================
// Effort-bounded heuristic search
// =============================================================================

/// Alpha-beta over the static evaluation. Returns the chosen move and its
/// backed-up score, or `None` if there is no legal move.
///
/// The root moves are always expanded, so a spent or tiny budget still
/// yields the best move by static evaluation.
pub fn heuristic_search(pos: &GameState, config: &EngineConfig) -> Option<(Move, f64)> {
    let moves = pos.legal_moves_ordered(config.move_order);
    if moves.is_empty() {
        return None;
    }
    let (score, mv) = expand(
        pos,
        moves,
        config.effort_budget,
        f64::NEG_INFINITY,
        f64::INFINITY,
        config,
    );
    Some((mv, score))
}

/// Score of a finished game: the winner takes `WIN_SCORE`.
fn decided(diff: i32) -> f64 {
    WIN_SCORE * diff.signum() as f64
}

/// Heuristic alpha-beta.
///
/// `budget` is the remaining effort. Each ply spends `effort_per_move` for
/// every move available at that node, so wide nodes exhaust it sooner than
/// forced ones. Once it is used up the static evaluation is returned.
pub fn heuristic(
    pos: &GameState,
    budget: f64,
    alpha: f64,
    beta: f64,
    config: &EngineConfig,
) -> (f64, Option<Move>) {
    match terminal(pos) {
        Some(Terminal::Finished(diff)) => return (decided(diff), None),
        Some(Terminal::Eliminated(side)) => return (-side.sign() as f64 * WIN_SCORE, None),
        None => {}
    }

    if budget <= 0.0 {
        return (evaluate(pos, config), None);
    }

    let moves = pos.legal_moves_ordered(config.move_order);
    if moves.is_empty() {
        return match config.pass_rule {
            PassRule::Concede => (-pos.to_move().sign() as f64 * WIN_SCORE, None),
            PassRule::Continue => {
                let passed = pos.passed();
                if passed.has_moves() {
                    (heuristic(&passed, budget, alpha, beta, config).0, None)
                } else {
                    (decided(pos.board().differential()), None)
                }
            }
        };
    }

    let (score, mv) = expand(pos, moves, budget, alpha, beta, config);
    (score, Some(mv))
}

/// Search every move in `moves` (non-empty) with the budget left after
/// paying for this ply.
fn expand(
    pos: &GameState,
    moves: Vec<Move>,
    budget: f64,
    mut alpha: f64,
    mut beta: f64,
    config: &EngineConfig,
) -> (f64, Move) {
    let remaining = budget - config.effort_per_move * moves.len() as f64;
    let side = pos.to_move();
    let mut best = Best::new(side, moves[0]);

    for mv in moves {
        let Some(child) = pos.play(mv.x, mv.y) else {
            continue;
        };
        let (score, _) = heuristic(&child, remaining, alpha, beta, config);
        best.offer(mv, score);

        match side {
            Side::Black => alpha = alpha.max(score),
            Side::White => beta = beta.min(score),
        }
        if alpha >= beta {
            break;
        }
    }

    (best.score.unwrap_or(0.0), best.mv)
}
