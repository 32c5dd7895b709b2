//! JSON request decoding and the line-oriented request loop.
//!
//! A request carries the board and the side to move:
//!
//! ```json
//! {"board": {"Pieces": [[0,0,0,0,0,0,0,0], ...], "Next": 1}}
//! ```
//!
//! `Pieces[y - 1][x - 1]` is the cell at column `x`, row `y` (0 empty,
//! 1 black, 2 white) and `Next` is 1 or 2. The answer is a coordinate such
//! as `D3`, or `PASS`.
//!
//! ## Request loop
//!
//! [`Server::run`] reads one request per line and writes one answer per line:
//!
//! - blank lines and lines starting with `#` are skipped
//! - `quit` ends the loop
//! - a request that fails to decode is answered with `? <reason>`

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{Board, Cell, Side};
use crate::config::EngineConfig;
use crate::constants::N;
use crate::engine::{Decision, Strategy, select_move};
use crate::error::{Error, Result};
use crate::position::{GameState, str_coord};

#[derive(Debug, Serialize, Deserialize)]
struct Request {
    board: WireBoard,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireBoard {
    pieces: Vec<Vec<u8>>,
    next: u8,
}

/// Decode a JSON request into a game state.
pub fn parse_request(text: &str) -> Result<GameState> {
    let request: Request = serde_json::from_str(text)?;
    request.board.into_state()
}

/// Encode a game state as a JSON request.
pub fn encode_request(pos: &GameState) -> Result<String> {
    let pieces: Vec<Vec<u8>> = (1..=N as i8)
        .map(|y| {
            (1..=N as i8)
                .map(|x| pos.board().read(x, y).unwrap_or_default().code())
                .collect()
        })
        .collect();
    let next = Cell::Stone(pos.to_move()).code();
    let request = Request {
        board: WireBoard { pieces, next },
    };
    Ok(serde_json::to_string(&request)?)
}

impl WireBoard {
    fn into_state(self) -> Result<GameState> {
        if self.pieces.len() != N {
            return Err(Error::BoardRows {
                rows: self.pieces.len(),
            });
        }

        let mut board = Board::new();
        for (row, line) in self.pieces.iter().enumerate() {
            if line.len() != N {
                return Err(Error::BoardColumns {
                    row: row + 1,
                    cells: line.len(),
                });
            }
            for (col, &value) in line.iter().enumerate() {
                let (x, y) = (col as i8 + 1, row as i8 + 1);
                let cell = Cell::from_code(value).ok_or_else(|| Error::InvalidCell {
                    value,
                    coord: str_coord(x, y),
                })?;
                board.write(x, y, cell);
            }
        }

        let to_move = match self.next {
            1 => Side::Black,
            2 => Side::White,
            other => return Err(Error::InvalidSide(other)),
        };

        Ok(GameState::from_board(board, to_move))
    }
}

/// Decode a request and choose a move for it.
pub fn answer(text: &str, config: &EngineConfig) -> Result<Decision> {
    let pos = parse_request(text)?;
    debug!(
        side = %pos.to_move(),
        empties = pos.board().empties(),
        strategy = %Strategy::for_position(&pos, config),
        "decoded request"
    );

    let decision = select_move(&pos, config);
    match decision {
        Decision::Pass => info!(side = %pos.to_move(), "no legal move, passing"),
        Decision::Play {
            mv,
            strategy,
            score,
        } => info!(side = %pos.to_move(), %mv, %strategy, score, "selected move"),
    }
    Ok(decision)
}

/// Request loop over a reader/writer pair.
pub struct Server {
    config: EngineConfig,
}

impl Server {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Serve stdin/stdout until EOF or `quit`.
    pub fn run_stdio(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") {
                break;
            }

            let response = self.execute(line);
            writeln!(output, "{response}")?;
            output.flush()?;
        }
        Ok(())
    }

    fn execute(&self, line: &str) -> String {
        match answer(line, &self.config) {
            Ok(decision) => decision.to_string(),
            Err(err) => {
                warn!(error = %err, "rejected request");
                format!("? {err}")
            }
        }
    }
}
