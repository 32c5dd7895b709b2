//! Constants for board geometry, weight tables, and engine defaults.
//!
//! Coordinates are 1-indexed `(x, y)`: `x` is the column (A-H on the wire)
//! and `y` is the row (1-8). The tables below are indexed `[y - 1][x - 1]`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Total number of cells.
pub const CELLS: usize = N * N;

/// The four corner coordinates.
pub const CORNERS: [(i8, i8); 4] = [(1, 1), (8, 1), (1, 8), (8, 8)];

/// Compass directions as `(dx, dy)`.
/// Order: N, NE, E, SE, S, SW, W, NW
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

// =============================================================================
// Positional Weights
// =============================================================================

const CORNER: f64 = 110.0;
const WALL: f64 = 0.5;
const WALL_IN: f64 = 0.2;
const C_SQUARE: f64 = -22.0;
const X_SQUARE: f64 = -26.0;
const NX_WALL: f64 = -2.3;
const NX_WALL_CORNER: f64 = -2.0;
const INLAND: f64 = -0.5;
const INLAND_CORNER: f64 = 0.2;

/// Positional weight of each cell, from the owner's point of view.
#[rustfmt::skip]
pub const WEIGHTS: [[f64; N]; N] = [
    [CORNER, C_SQUARE, WALL, WALL_IN, WALL_IN, WALL, C_SQUARE, CORNER],
    [C_SQUARE, X_SQUARE, NX_WALL_CORNER, NX_WALL, NX_WALL, NX_WALL_CORNER, X_SQUARE, C_SQUARE],
    [WALL, NX_WALL_CORNER, INLAND_CORNER, INLAND, INLAND, INLAND_CORNER, NX_WALL_CORNER, WALL],
    [WALL_IN, NX_WALL, INLAND, INLAND, INLAND, INLAND, NX_WALL, WALL_IN],
    [WALL_IN, NX_WALL, INLAND, INLAND, INLAND, INLAND, NX_WALL, WALL_IN],
    [WALL, NX_WALL_CORNER, INLAND_CORNER, INLAND, INLAND, INLAND_CORNER, NX_WALL_CORNER, WALL],
    [C_SQUARE, X_SQUARE, NX_WALL_CORNER, NX_WALL, NX_WALL, NX_WALL_CORNER, X_SQUARE, C_SQUARE],
    [CORNER, C_SQUARE, WALL, WALL_IN, WALL_IN, WALL, C_SQUARE, CORNER],
];

// =============================================================================
// Mobility Weights
// =============================================================================

const M_CORNER: f64 = 60.0;
const M_WALL: f64 = 12.0;
const M_WALL_IN: f64 = 8.0;
const M_NX_CORNER: f64 = 0.2;
const M_NX_WALL: f64 = 0.8;
const M_NX_WALL_CORNER: f64 = 1.5;
const M_INLAND: f64 = 2.0;
const M_INLAND_CORNER: f64 = 5.0;

/// Value of having a move available at each cell (used by the mobility term).
#[rustfmt::skip]
pub const MOBILITY_WEIGHTS: [[f64; N]; N] = [
    [M_CORNER, M_NX_CORNER, M_WALL, M_WALL_IN, M_WALL_IN, M_WALL, M_NX_CORNER, M_CORNER],
    [M_NX_CORNER, M_NX_CORNER, M_NX_WALL_CORNER, M_NX_WALL, M_NX_WALL, M_NX_WALL_CORNER, M_NX_CORNER, M_NX_CORNER],
    [M_WALL, M_NX_WALL_CORNER, M_INLAND_CORNER, M_INLAND, M_INLAND, M_INLAND_CORNER, M_NX_WALL_CORNER, M_WALL],
    [M_WALL_IN, M_NX_WALL, M_INLAND, M_INLAND, M_INLAND, M_INLAND, M_NX_WALL, M_WALL_IN],
    [M_WALL_IN, M_NX_WALL, M_INLAND, M_INLAND, M_INLAND, M_INLAND, M_NX_WALL, M_WALL_IN],
    [M_WALL, M_NX_WALL_CORNER, M_INLAND_CORNER, M_INLAND, M_INLAND, M_INLAND_CORNER, M_NX_WALL_CORNER, M_WALL],
    [M_NX_CORNER, M_NX_CORNER, M_NX_WALL_CORNER, M_NX_WALL, M_NX_WALL, M_NX_WALL_CORNER, M_NX_CORNER, M_NX_CORNER],
    [M_CORNER, M_NX_CORNER, M_WALL, M_WALL_IN, M_WALL_IN, M_WALL, M_NX_CORNER, M_CORNER],
];

// =============================================================================
// Evaluation Adjustments
// =============================================================================

/// Penalty against a side reduced to a single piece.
pub const LAST_PIECE_PENALTY: f64 = 200.0;

/// Penalty against a side reduced to two pieces.
pub const TWO_PIECES_PENALTY: f64 = 50.0;

/// Utility of a decided game in the heuristic search. Dominates any evaluation.
pub const WIN_SCORE: f64 = 10_000.0;

/// Exact-search utility when one side has been wiped out.
pub const MAX_DIFFERENTIAL: i32 = CELLS as i32;

// =============================================================================
// Engine Defaults
// =============================================================================

/// Below this many empty cells the exact endgame search takes over.
pub const ENDGAME_EMPTIES: usize = 9;

/// Corners one side must own before switching to the mobility heuristic.
pub const CORNER_CONTROL: usize = 2;

/// Initial effort budget of the heuristic search.
pub const EFFORT_BUDGET: f64 = 12.0;

/// Budget spent per available move at each ply.
pub const EFFORT_PER_MOVE: f64 = 0.5;

/// Scale of the optional mobility term.
pub const MOBILITY_COEFFICIENT: f64 = 2.0;
