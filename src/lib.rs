//! Reversi-Rust: a phase-based Othello move picker.
//!
//! Given a board and the side to move, the engine returns a legal move or a
//! pass. The search strategy depends on the phase of the game: exact
//! alpha-beta in the endgame, opponent-mobility minimization once a side
//! controls corners, and effort-bounded heuristic search otherwise.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, weight tables, and engine defaults
//! - [`board`] - Bounds-checked 8x8 grid
//! - [`position`] - Game state, capture resolution, and move generation
//! - [`eval`] - Static positional evaluation
//! - [`search`] - Endgame, mobility, and heuristic search strategies
//! - [`engine`] - Phase selection and the top-level move picker
//! - [`config`] - Engine configuration
//! - [`protocol`] - JSON requests and the line-oriented request loop
//! - [`playout`] - Seeded random playouts
//!
//! ## Example
//!
//! ```
//! use reversi_rust::config::EngineConfig;
//! use reversi_rust::engine::select_move;
//! use reversi_rust::position::GameState;
//!
//! let pos = GameState::new();
//! let decision = select_move(&pos, &EngineConfig::default());
//! println!("Best move: {decision}");
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod eval;
pub mod playout;
pub mod position;
pub mod protocol;
pub mod search;
