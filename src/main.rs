//! # Grid Arcade
//!
//! Terminal arcade with tic-tac-toe, connect four, five in a row and alphabet
//! flashcards. Scores are kept in a small JSON file between runs.
//!
//! ## Usage
//! `play` opens the launcher, `play --game connect4` jumps straight into a
//! game (`--moves "4;4;5"` replays moves first) and `play --show-scores`
//! prints the saved tallies.

use anyhow::Context;
use arcade::app::App;
use arcade::score::ScoreStore;
use arcade::{tui, GameWrapper, GridGame, Seat};
use clap::Parser;
use colored::Colorize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

const GAME_IDS: [&str; 3] = ["ticTacToe", "connectFour", "fiveInRow"];

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Open this game instead of the launcher (e.g. tictactoe, connect4, gomoku, cards)
    #[clap(short, long)]
    game: Option<String>,

    /// Moves to play after opening --game, separated by ';' (e.g. "2,2;1,1" or "4;4;5")
    #[clap(long, requires = "game", value_delimiter = ';')]
    moves: Vec<String>,

    /// Score file
    #[clap(short, long, default_value = "grid-arcade-scores.json")]
    scores: PathBuf,

    /// Keep scores in memory only
    #[clap(long, action = clap::ArgAction::SetTrue)]
    no_persist: bool,

    /// Log file; filter with RUST_LOG
    #[clap(long, default_value = "grid-arcade.log")]
    log_file: PathBuf,

    /// Seed for the flashcard shuffle
    #[clap(long)]
    seed: Option<u64>,

    /// Print the saved scores and exit
    #[clap(long, action = clap::ArgAction::SetTrue)]
    show_scores: bool,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_scores(store: &ScoreStore) -> anyhow::Result<()> {
    let source = store
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "memory".to_string());
    println!("{} ({})", "Scores".bold(), source);
    for id in GAME_IDS {
        let game = GameWrapper::from_name(id)?;
        let tally = store.get(id);
        println!(
            "{:<14} {} {:>3}   {} {:>3}   {} {:>3}   ({} played)",
            game.name().bold(),
            game.seat_name(Seat::First).red(),
            tally.first,
            game.seat_name(Seat::Second).yellow(),
            tally.second,
            "draws".dimmed(),
            tally.draws,
            tally.games_played()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let store = if args.no_persist {
        ScoreStore::in_memory()
    } else if args.show_scores {
        ScoreStore::load(&args.scores)?
    } else {
        ScoreStore::load_or_empty(&args.scores)
    };

    if args.show_scores {
        return print_scores(&store);
    }

    init_logging(&args.log_file)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, scores = ?store.path(), "starting");

    let mut app = App::new(store, seed);
    if let Some(name) = &args.game {
        app.open_named(name)?;
        for text in &args.moves {
            let result = app.play_notation(text)?;
            info!(%text, ?result, "replayed move");
        }
    }
    tui::run(&mut app).context("terminal error")?;
    info!("bye");
    Ok(())
}
