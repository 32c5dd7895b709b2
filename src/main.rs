//! Reversi-Rust: an Othello move picker.
//!
//! ## Usage
//!
//! - `reversi-rust pick [--file board.json]` - Answer a single request
//! - `reversi-rust serve` - Answer one JSON request per line on stdin
//! - `reversi-rust demo [--seed N]` - Play the engine against random moves
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reversi_rust::board::Side;
use reversi_rust::config::EngineConfig;
use reversi_rust::playout::play_against_random;
use reversi_rust::protocol::{Server, answer};

/// Reversi-Rust: a phase-based Othello move picker
#[derive(Parser)]
#[command(name = "reversi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file overriding engine defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one JSON request and print the chosen move
    Pick {
        /// Read the request from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Answer one JSON request per line on stdin
    Serve,
    /// Play the engine (black) against a random opponent
    Demo {
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Some(Commands::Pick { file }) => pick(file, &config),
        Some(Commands::Serve) => Server::new(config)
            .run_stdio()
            .context("request loop failed"),
        Some(Commands::Demo { seed }) => {
            run_demo(seed, &config);
            Ok(())
        }
        None => {
            run_demo(1, &config);
            Ok(())
        }
    }
}

fn pick(file: Option<PathBuf>, config: &EngineConfig) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading request from stdin")?;
            text
        }
    };

    let decision = answer(&text, config)?;
    println!("{decision}");
    Ok(())
}

fn run_demo(seed: u64, config: &EngineConfig) {
    println!("Reversi-Rust: engine (X) vs random (O), seed {seed}\n");

    let mut rng = fastrand::Rng::with_seed(seed);
    let record = play_against_random(Side::Black, config, &mut rng);

    let moves: Vec<String> = record
        .moves
        .iter()
        .map(|mv| mv.map_or_else(|| "PASS".to_string(), |mv| mv.to_string()))
        .collect();
    println!("Moves: {}\n", moves.join(" "));
    println!("{}", record.final_position.board());

    let board = record.final_position.board();
    println!(
        "Final score: X {} - O {} (differential {:+})",
        board.count(Side::Black),
        board.count(Side::White),
        record.differential()
    );
}
