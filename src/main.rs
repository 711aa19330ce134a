use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scacco_cli::Game;
use scacco_core::{Board, Color, perft};
use scacco_engine::{SearchConfig, Searcher};

#[derive(Debug, Parser)]
#[command(version, about = "Console chess against a minimax bot", long_about = None)]
struct Cli {
    /// Plies the bot searches, counting its own move.
    #[arg(long, default_value_t = SearchConfig::DEFAULT_DEPTH)]
    depth: u8,

    /// Threads the bot splits its root moves across.
    #[arg(long, default_value_t = 1)]
    threads: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search a position and print the best move without playing it.
    Search {
        /// FEN piece placement.
        placement: String,
        /// Side to move: `white` or `black`.
        #[arg(long, default_value = "black")]
        side: String,
    },
    /// Count leaf nodes of the legal move tree.
    Perft {
        /// FEN piece placement.
        placement: String,
        depth: usize,
        /// Side to move: `white` or `black`.
        #[arg(long, default_value = "white")]
        side: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = SearchConfig::new(cli.depth, cli.threads)?;

    match cli.command {
        Some(Commands::Search { placement, side }) => cli_search(&placement, &side, config),
        Some(Commands::Perft {
            placement,
            depth,
            side,
        }) => cli_perft(&placement, depth, &side),
        None => play(config),
    }
}

fn play(config: SearchConfig) -> Result<()> {
    info!(depth = config.depth, threads = config.threads, "scacco starting");
    let stdin = io::stdin();
    let mut game = Game::with_config(stdin.lock(), io::stdout().lock(), config);
    let outcome = game.run()?;
    info!(?outcome, "game over");
    Ok(())
}

fn cli_search(placement: &str, side: &str, config: SearchConfig) -> Result<()> {
    let mut board: Board = placement.parse().context("invalid placement")?;
    let side = parse_side(side)?;
    match Searcher::new(config).search(&mut board, side) {
        Some(result) => println!(
            "bestmove {} score {} nodes {}",
            result.best_move, result.score, result.nodes
        ),
        None => println!("bestmove none"),
    }
    Ok(())
}

fn cli_perft(placement: &str, depth: usize, side: &str) -> Result<()> {
    let mut board: Board = placement.parse().context("invalid placement")?;
    let side = parse_side(side)?;
    let mut total = 0;
    for (mv, nodes) in perft::divide(&mut board, side, depth) {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    println!("\nNodes searched: {total}");
    Ok(())
}

fn parse_side(side: &str) -> Result<Color> {
    match side {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => anyhow::bail!("unknown side {other:?}, expected white or black"),
    }
}
