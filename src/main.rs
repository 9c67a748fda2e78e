//! Wordle TUI - CLI
//!
//! Terminal Wordle with timed mode, pause/resume, and persistent games.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use wordle_tui::{
    core::Word,
    engine::{GameEngine, ShareSink},
    persist::FileStore,
    wordlists::{TARGETS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Terminal Wordle with timed mode, pause/resume, and persistent games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom target word list (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Override the saved-game file location
    #[arg(long, global = true)]
    save_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, resuming any saved game (default)
    Play {
        /// Abandon the saved game and start a fresh timed one
        #[arg(short, long)]
        timed: bool,
    },

    /// Print the share text for the saved game
    Share,

    /// Delete the saved game
    Clear,
}

/// Prints share text to stdout; the closest thing a terminal has to a share sheet
struct StdoutShare;

impl ShareSink for StdoutShare {
    fn share(&mut self, text: &str) {
        let mut lines = text.lines();
        if let Some(headline) = lines.next() {
            println!("{}", headline.bold().green());
        }
        for line in lines {
            println!("{line}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pool = load_pool(cli.wordlist.as_deref())?;
    let store = make_store(cli.save_file)?;

    match cli.command.unwrap_or(Commands::Play { timed: false }) {
        Commands::Play { timed } => run_play_command(store, pool, timed),
        Commands::Share => {
            run_share_command(store, pool);
            Ok(())
        }
        Commands::Clear => {
            run_clear_command(store);
            Ok(())
        }
    }
}

/// Load the target pool from the embedded list or a custom file
fn load_pool(wordlist: Option<&str>) -> Result<Vec<Word>> {
    let pool = match wordlist {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to read word list {path}"))?,
        None => loader::words_from_slice(TARGETS),
    };

    ensure!(!pool.is_empty(), "Word list contains no valid 5-letter words");
    Ok(pool)
}

fn make_store(save_file: Option<PathBuf>) -> Result<FileStore> {
    match save_file {
        Some(path) => Ok(FileStore::at(path)),
        None => FileStore::new().context("Failed to set up the save directory"),
    }
}

fn run_play_command(store: FileStore, pool: Vec<Word>, timed: bool) -> Result<()> {
    use wordle_tui::interactive::{App, run_tui};

    let mut engine = GameEngine::load_or_new(store, pool);
    if timed {
        engine.new_game(true);
    }

    let app = App::new(engine);
    run_tui(app)
}

fn run_share_command(store: FileStore, pool: Vec<Word>) {
    use wordle_tui::persist::SaveStore;

    if store.get().is_none() {
        println!("{}", "No saved game to share.".yellow());
        return;
    }

    let engine = GameEngine::load_or_new(store, pool);
    StdoutShare.share(&engine.share_score_text());
}

fn run_clear_command(mut store: FileStore) {
    use wordle_tui::persist::SaveStore;

    store.remove();
    println!("{}", "Saved game cleared.".green());
}
