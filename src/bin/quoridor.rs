//! Play Quoridor in the terminal.
//!
//! Moves are read one per line from stdin, or taken from `--moves` for a
//! scripted game. Besides move notation the prompt understands `?` (list pawn
//! moves), `board` (redraw) and `quit`.

use anyhow::{Context, Result};
use clap::Parser;
use quoridor_engine::{
    draw, load_config, Game, GameConfig, Outcome, Session, SessionError, TrapCheck,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quoridor", about = "Play a game of Quoridor", version)]
struct Args {
    /// YAML file with a `quoridor` section
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of columns (overrides the config file)
    #[arg(long)]
    width: Option<usize>,

    /// Number of rows (overrides the config file)
    #[arg(long)]
    height: Option<usize>,

    /// Total fences, split evenly between the players
    #[arg(long)]
    fences: Option<usize>,

    /// Check for traps without the candidate fence on the board
    #[arg(long)]
    legacy_trap_check: bool,

    /// Let players place fences without limit
    #[arg(long)]
    no_fence_limit: bool,

    /// Comma separated moves to play instead of reading stdin, e.g. e8,e2,e6h
    #[arg(long, value_delimiter = ',')]
    moves: Vec<String>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fences) = self.fences {
            config.total_fences = fences;
        }
        if self.legacy_trap_check {
            config.trap_check = TrapCheck::PreExisting;
        }
        if self.no_fence_limit {
            config.enforce_fence_limit = false;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

fn print_status(game: &Game) {
    for player in 0..game.player_count() {
        let distance = match game.distance_to_goal(player) {
            Some(steps) => steps.to_string(),
            None => "no path".to_string(),
        };
        println!(
            "Player {}: pawn {}, fences left {}, distance to goal {}",
            player,
            game.pawn(player),
            game.remaining_fences(player),
            distance
        );
    }
}

fn print_board(game: &Game) {
    println!();
    print!("{}", draw(game));
    print_status(game);
}

/// Submit one move and report what happened. Returns true once somebody has won.
fn submit(session: &mut Session, text: &str) -> Result<bool> {
    match session.play(text) {
        Ok(Outcome::Played { .. }) => {
            if let Some(game) = session.game() {
                print_board(game);
            }
            Ok(false)
        }
        Ok(Outcome::Won { player, mv }) => {
            if let Some(game) = session.game() {
                print_board(game);
            }
            println!("\nPlayer {} wins with {}!", player, mv);
            Ok(true)
        }
        Ok(Outcome::Rejected { player, mv, reason }) => {
            println!("Player {} cannot play {}: {}", player, mv, reason);
            Ok(false)
        }
        Err(SessionError::Parse(err)) => {
            println!("Could not read {:?}: {}", text, err);
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn run_scripted(session: &mut Session, moves: &[String]) -> Result<()> {
    for text in moves {
        println!("\n> {}", text.trim());
        if submit(session, text)? {
            break;
        }
    }
    Ok(())
}

fn run_interactive(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let player = session.current_player()?;
        print!("Player {} > ", player);
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("Failed to read from stdin")?;

        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "board" => {
                if let Some(game) = session.game() {
                    print_board(game);
                }
            }
            "?" => {
                if let Some(game) = session.game() {
                    let moves: Vec<String> = game
                        .legal_pawn_moves(player)
                        .iter()
                        .map(|mv| mv.to_string())
                        .collect();
                    println!("Pawn moves: {}", moves.join(" "));
                }
            }
            text => {
                if submit(session, text)? {
                    return Ok(());
                }
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = args.game_config()?;

    println!("=== Quoridor ===");
    println!("  Board size: {}x{}", config.width, config.height);
    println!("  Fences: {} per player", config.fences_per_player());

    let mut session = Session::new(config);
    session.start()?;
    if let Some(game) = session.game() {
        print_board(game);
    }

    if args.moves.is_empty() {
        run_interactive(&mut session)
    } else {
        run_scripted(&mut session, &args.moves)
    }
}
