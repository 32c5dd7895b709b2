//! Reversi game state and move execution.
//!
//! This module provides the core game logic:
//! - `GameState`, an immutable board plus side to move
//! - capture resolution along the eight compass directions
//! - legal move generation in raster or tiered order
//! - conversion between moves and `A1`..`H8` coordinates
//!
//! Applying a move never mutates the input state. Every successor is a fresh
//! value built on a copy of the parent's board.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Side};
use crate::constants::{CORNERS, DIRECTIONS, N};

/// A placement at 1-indexed `(x, y)` by `side`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: i8,
    pub y: i8,
    pub side: Side,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&str_coord(self.x, self.y))
    }
}

/// Order in which the generator probes the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Row by row, column by column.
    Raster,
    /// Corners, walls, edge-adjacent, inland, then corner-adjacent squares.
    #[default]
    Tiered,
}

/// A position: the board and the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Side,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard opening position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Side::Black)
    }

    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The same board with the other side to move.
    pub fn passed(&self) -> GameState {
        Self::from_board(self.board, self.to_move.opponent())
    }

    /// Resolve a placement at `(x, y)` for the side to move.
    ///
    /// Returns the successor state, or `None` if the cell is occupied, off
    /// the board, or flanks nothing.
    pub fn play(&self, x: i8, y: i8) -> Option<GameState> {
        if self.board.read(x, y) != Some(Cell::Empty) {
            return None;
        }

        let mover = self.to_move;
        let mut board = self.board;
        let mut captured = false;

        for (dx, dy) in DIRECTIONS {
            let run = flank_length(&self.board, x, y, dx, dy, mover);
            for step in 1..=run {
                board.write(x + dx * step, y + dy * step, Cell::Stone(mover));
            }
            captured |= run > 0;
        }

        if !captured {
            return None;
        }
        board.write(x, y, Cell::Stone(mover));

        Some(Self::from_board(board, mover.opponent()))
    }

    /// Apply a move made by the side to move. `None` if illegal.
    pub fn apply(&self, mv: Move) -> Option<GameState> {
        if mv.side != self.to_move {
            return None;
        }
        self.play(mv.x, mv.y)
    }

    /// Whether `(x, y)` is a legal placement for the side to move.
    pub fn is_legal(&self, x: i8, y: i8) -> bool {
        self.board.read(x, y) == Some(Cell::Empty)
            && DIRECTIONS
                .iter()
                .any(|&(dx, dy)| flank_length(&self.board, x, y, dx, dy, self.to_move) > 0)
    }

    /// Number of opponent stones a placement at `(x, y)` would flip.
    pub fn flips(&self, x: i8, y: i8) -> usize {
        if self.board.read(x, y) != Some(Cell::Empty) {
            return 0;
        }
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| flank_length(&self.board, x, y, dx, dy, self.to_move) as usize)
            .sum()
    }

    /// Legal moves in the default (tiered) order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_ordered(MoveOrder::default())
    }

    pub fn legal_moves_ordered(&self, order: MoveOrder) -> Vec<Move> {
        probe_order(order)
            .iter()
            .filter(|&&(x, y)| self.is_legal(x, y))
            .map(|&(x, y)| Move {
                x,
                y,
                side: self.to_move,
            })
            .collect()
    }

    /// Count of legal moves, without allocating.
    pub fn mobility(&self) -> usize {
        (1..=N as i8)
            .flat_map(|y| (1..=N as i8).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_legal(x, y))
            .count()
    }

    pub fn has_moves(&self) -> bool {
        (1..=N as i8).any(|y| (1..=N as i8).any(|x| self.is_legal(x, y)))
    }

    /// Neither side can move (board full or mutual pass).
    pub fn is_over(&self) -> bool {
        !self.has_moves() && !self.passed().has_moves()
    }
}

/// Length of the opponent run starting next to `(x, y)` in direction
/// `(dx, dy)` that is closed off by a stone of `mover`. Zero if the run is
/// empty or not closed.
fn flank_length(board: &Board, x: i8, y: i8, dx: i8, dy: i8, mover: Side) -> i8 {
    let opponent = mover.opponent();
    let mut run = 0;
    let (mut cx, mut cy) = (x + dx, y + dy);

    while board.is(cx, cy, opponent) {
        run += 1;
        cx += dx;
        cy += dy;
    }

    if run > 0 && board.is(cx, cy, mover) { run } else { 0 }
}

/// Strategic tier of a coordinate, lower is searched first.
fn tier(x: i8, y: i8) -> u8 {
    let n = N as i8;
    let edge = |v: i8| v == 1 || v == n;
    let near = |v: i8| v == 2 || v == n - 1;

    let near_corner = CORNERS
        .iter()
        .any(|&(cx, cy)| (cx - x).abs() <= 1 && (cy - y).abs() <= 1);

    match (edge(x), edge(y)) {
        (true, true) => 0,
        _ if near_corner => 4,
        (true, false) | (false, true) => 1,
        _ if near(x) || near(y) => 2,
        _ => 3,
    }
}

fn probe_order(order: MoveOrder) -> &'static [(i8, i8)] {
    use std::sync::OnceLock;

    static RASTER: OnceLock<Vec<(i8, i8)>> = OnceLock::new();
    static TIERED: OnceLock<Vec<(i8, i8)>> = OnceLock::new();

    let raster = || {
        (1..=N as i8)
            .flat_map(|y| (1..=N as i8).map(move |x| (x, y)))
            .collect::<Vec<_>>()
    };

    match order {
        MoveOrder::Raster => RASTER.get_or_init(raster),
        MoveOrder::Tiered => TIERED.get_or_init(|| {
            let mut coords = raster();
            // Stable sort keeps raster order inside a tier.
            coords.sort_by_key(|&(x, y)| tier(x, y));
            coords
        }),
    }
}

/// Parse `A1`..`H8` (case-insensitive) into `(x, y)`.
pub fn parse_coord(s: &str) -> Option<(i8, i8)> {
    let bytes = s.trim().as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].to_ascii_uppercase();
    let row = bytes[1];
    if !(b'A'..=b'H').contains(&col) || !(b'1'..=b'8').contains(&row) {
        return None;
    }
    Some(((col - b'A' + 1) as i8, (row - b'0') as i8))
}

/// Format `(x, y)` as a column letter and row digit, e.g. `(1, 1)` -> `"A1"`.
pub fn str_coord(x: i8, y: i8) -> String {
    format!("{}{}", (b'A' + (x - 1) as u8) as char, y)
}
