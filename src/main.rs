use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use std::cmp::Ordering;

use hexapawn_ai::board::{Board, Color};
use hexapawn_ai::solver::{solve_position, SearchResult, Solver, LOSS_SCORE, WIN_SCORE};

mod display;

/// Best-move search for the pawn-capture board game Hexapawn
#[derive(Parser)]
#[command(name = "hexapawn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best next board for a position
    Solve {
        /// Board rows from top to bottom, e.g. "www" "---" "bbb"
        #[arg(required = true, allow_hyphen_values = true)]
        rows: Vec<String>,

        /// Color to move, 'b' or 'w'
        #[arg(short, long, default_value_t = 'b')]
        color: char,

        /// Number of plies to look ahead
        #[arg(short, long, default_value_t = 3)]
        depth: usize,

        /// Print the board as bare rows without styling
        #[arg(long)]
        plain: bool,
    },
    /// Solve the standard 3x3 starting position for Black
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve {
            rows,
            color,
            depth,
            plain,
        }) => solve_command(&rows, color, depth, plain),
        Some(Commands::Demo) | None => demo(),
    }
}

fn solve_command(rows: &[String], color: char, depth: usize, plain: bool) -> Result<()> {
    if depth == 0 {
        return Err(anyhow!("search depth must be at least 1"));
    }

    match solve_position(rows, rows.len(), color, depth)? {
        SearchResult::Best { board, score } => {
            if plain {
                print!("{}", board);
            } else {
                display::draw(&board)?;
            }
            report_score(Color::from_char(color)?, score, depth);
        }
        SearchResult::NoLegalMove => println!("No legal moves"),
    }
    Ok(())
}

fn demo() -> Result<()> {
    let depth = 4;
    let board = Board::starting(3);

    println!("Position:");
    display::draw(&board)?;

    let mut solver = Solver::new(board, Color::Black, depth);
    match solver.solve() {
        SearchResult::Best { board, score } => {
            println!("Best move for Black:");
            display::draw(&board)?;
            report_score(Color::Black, score, depth);
            println!("Searched {} positions", solver.node_count);
        }
        SearchResult::NoLegalMove => println!("No legal moves"),
    }
    Ok(())
}

fn report_score(mover: Color, score: i32, depth: usize) {
    let player = match mover {
        Color::Black => "Black",
        Color::White => "White",
    };
    let ply_string = if depth == 1 { "ply" } else { "plies" };

    match score.cmp(&0) {
        Ordering::Greater if score == WIN_SCORE => {
            println!("{} can reach the goal row within {} {}.", player, depth, ply_string);
        }
        Ordering::Greater => {
            let pawn_string = if score == 1 { "pawn" } else { "pawns" };
            println!(
                "{} finishes {} {} up after {} {}.",
                player, score, pawn_string, depth, ply_string
            );
        }
        Ordering::Less if score == LOSS_SCORE => {
            println!("{} cannot stop the opponent reaching the goal row.", player);
        }
        Ordering::Less => {
            let pawn_string = if score == -1 { "pawn" } else { "pawns" };
            println!(
                "{} finishes {} {} down after {} {}.",
                player, -score, pawn_string, depth, ply_string
            );
        }
        Ordering::Equal => {
            println!("{} holds the material even after {} {}.", player, depth, ply_string);
        }
    }
}
