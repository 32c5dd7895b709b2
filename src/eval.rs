//! Static evaluation of a position, from Black's point of view.

use crate::board::{Cell, Side};
use crate::config::EngineConfig;
use crate::constants::{LAST_PIECE_PENALTY, MOBILITY_WEIGHTS, TWO_PIECES_PENALTY, WEIGHTS};
use crate::position::GameState;

/// Positional score: weights of Black's cells minus weights of White's,
/// adjusted for a side close to elimination and, if enabled, for the
/// mobility of the side to move.
pub fn evaluate(pos: &GameState, config: &EngineConfig) -> f64 {
    let board = pos.board();

    let mut score: f64 = board
        .cells()
        .map(|(x, y, cell)| match cell {
            Cell::Stone(side) => side.sign() as f64 * weight(x, y),
            Cell::Empty => 0.0,
        })
        .sum();

    if config.mobility_term {
        score += mobility_term(pos, config.mobility_coefficient);
    }

    score - elimination_penalty(board.count(Side::Black))
        + elimination_penalty(board.count(Side::White))
}

#[inline]
fn weight(x: i8, y: i8) -> f64 {
    WEIGHTS[(y - 1) as usize][(x - 1) as usize]
}

fn elimination_penalty(count: usize) -> f64 {
    match count {
        1 => LAST_PIECE_PENALTY,
        2 => TWO_PIECES_PENALTY,
        _ => 0.0,
    }
}

/// Sum of the mobility weights of every available move, signed for the side to move.
fn mobility_term(pos: &GameState, coefficient: f64) -> f64 {
    let sign = pos.to_move().sign() as f64;
    pos.legal_moves()
        .iter()
        .map(|mv| MOBILITY_WEIGHTS[(mv.y - 1) as usize][(mv.x - 1) as usize])
        .sum::<f64>()
        * coefficient
        * sign
}
