//! Kalah-Rust: picks the next move for a Kalah board snapshot.
//!
//! ## Usage
//!
//! - `kalah-rust < board.txt` - Print the best hole (1-based) for the snapshot
//! - `kalah-rust move` - Same as above
//! - `kalah-rust demo` - Let the engine play itself from the opening

use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kalah_rust::board::{Board, Side};
use kalah_rust::constants::SEARCH_DEPTH;
use kalah_rust::search::choose_move;
use kalah_rust::selfplay::{SelfPlayConfig, play_game};
use kalah_rust::snapshot::{Snapshot, format_move};

/// Kalah-Rust: a minimax move finder for six-hole Kalah
#[derive(Parser)]
#[command(name = "kalah-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    search: SearchArgs,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args, Clone, Copy)]
struct SearchArgs {
    /// Number of plies to search
    #[arg(short, long, default_value_t = SEARCH_DEPTH, global = true)]
    depth: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a board snapshot from stdin and print the chosen hole
    Move,
    /// Let the engine play both sides from the opening
    Demo {
        /// Opening plies to play at random before the engine takes over
        #[arg(long, default_value_t = 0)]
        random_plies: usize,
        /// Seed for the random opening plies
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let depth = cli.search.depth;
    match cli.command {
        Some(Commands::Move) | None => run_move(depth),
        Some(Commands::Demo { random_plies, seed }) => {
            run_demo(&SelfPlayConfig {
                depth,
                random_plies,
                seed,
            });
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout carries nothing but the move.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn run_move(depth: u32) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read board snapshot from stdin")?;

    let snapshot: Snapshot = input.parse().context("invalid board snapshot")?;
    let result = choose_move(&snapshot.board, depth, snapshot.side_to_move());

    let Some(hole) = result.best_move else {
        bail!("no legal move available: the game is already over");
    };

    let mut stdout = io::stdout();
    write!(stdout, "{}", format_move(hole))?;
    stdout.flush()?;
    Ok(())
}

fn run_demo(config: &SelfPlayConfig) {
    println!("Kalah-Rust: engine self-play at depth {}\n", config.depth);

    let start = Board::new();
    println!("{start}");

    let record = play_game(start, Side::A, config);
    for (ply, mv) in record.moves.iter().enumerate() {
        let tag = match (mv.random, mv.extra_turn) {
            (true, true) => " (random, extra turn)",
            (true, false) => " (random)",
            (false, true) => " (extra turn)",
            (false, false) => "",
        };
        println!("{:>3}. {} sows hole {}{tag}", ply + 1, mv.side, mv.hole + 1);
        println!("{}", mv.board);
    }

    let a = record.final_board.store(Side::A);
    let b = record.final_board.store(Side::B);
    println!("Final score: A {a} - B {b}");
    match record.winner() {
        Some(side) => println!("Winner: {side}"),
        None => println!("Draw"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_depth_defaults() {
        let cli = parse(&["kalah-rust"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.search.depth, SEARCH_DEPTH);
    }

    #[test]
    fn test_depth_before_subcommand() {
        let cli = parse(&["kalah-rust", "--depth", "2", "-v", "move"]);
        assert!(matches!(cli.command, Some(Commands::Move)));
        assert_eq!(cli.search.depth, 2);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_depth_after_subcommand() {
        let cli = parse(&["kalah-rust", "move", "--depth", "3", "-vv"]);
        assert!(matches!(cli.command, Some(Commands::Move)));
        assert_eq!(cli.search.depth, 3);
        assert_eq!(cli.verbose, 2);

        let cli = parse(&["kalah-rust", "-d", "4", "demo", "--seed", "9"]);
        assert_eq!(cli.search.depth, 4);
        assert!(matches!(
            cli.command,
            Some(Commands::Demo {
                random_plies: 0,
                seed: 9
            })
        ));

        let cli = parse(&["kalah-rust", "demo", "--depth", "5", "--random-plies", "2"]);
        assert_eq!(cli.search.depth, 5);
        assert!(matches!(
            cli.command,
            Some(Commands::Demo {
                random_plies: 2,
                ..
            })
        ));
    }
}
