use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::{fs, path::PathBuf, process};

use sudoq::api::{self, CheckRequest, Reply, SolveRequest};
use sudoq::Solver;

#[derive(Parser, Debug)]
#[command(name = "sudoq", version, about = "9x9 Sudoku validator, placement checker, and solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill every empty cell of a puzzle
    Solve {
        /// Path to a puzzle file (81 chars, digits with . for blanks). If omitted, reads from stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Emit the service JSON reply instead of a pretty grid
        #[arg(long)]
        json: bool,
    },
    /// Check whether a value may legally occupy a cell, e.g. `check A1 7`
    Check {
        /// Cell coordinate: row letter A-I plus column 1-9
        coordinate: String,

        /// Candidate value 1-9
        value: String,

        /// Path to a puzzle file. If omitted, reads from stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Emit the service JSON reply instead of text
        #[arg(long)]
        json: bool,
    },
}

fn read_puzzle(input: &Option<PathBuf>) -> Result<String> {
    let raw = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    // Strip layout whitespace only; validation must see everything else.
    Ok(raw.chars().filter(|ch| !ch.is_whitespace()).collect())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { input, json } => {
            let puzzle = read_puzzle(&input)?;
            if json {
                let reply = api::solve(&SolveRequest { puzzle: Some(puzzle) });
                println!("{}", serde_json::to_string(&reply)?);
                return Ok(());
            }
            match Solver::new().solve_with_stats(&puzzle) {
                Ok((solved, stats)) => {
                    log::debug!("search visited {} nodes, {} backtracks", stats.nodes, stats.backtracks);
                    println!("{}", solved.to_pretty_string());
                    println!("{}", solved.to_string().green());
                }
                Err(err) => {
                    eprintln!("{}", err.to_string().red());
                    process::exit(1);
                }
            }
        }
        Command::Check { coordinate, value, input, json } => {
            let puzzle = read_puzzle(&input)?;
            let reply = api::check(&CheckRequest {
                puzzle: Some(puzzle),
                coordinate: Some(coordinate),
                value: Some(value),
            });
            if json {
                println!("{}", serde_json::to_string(&reply)?);
                return Ok(());
            }
            match reply {
                Reply::Ok(placement) if placement.valid => println!("{}", "valid".green()),
                Reply::Ok(placement) => {
                    let kinds = placement
                        .conflicts
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("{} ({})", "invalid".red(), kinds);
                }
                Reply::Err { error } => {
                    eprintln!("{}", error.red());
                    process::exit(1);
                }
            }
        }
    }
    Ok(())
}
