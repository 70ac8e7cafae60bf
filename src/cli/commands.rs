use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::clipboard::clipboard_seed_word;
use crate::history::{load_history, save_history};
use crate::lookup::{DictFileClient, LookupClient};
use crate::query::{QuerySession, normalize};
use crate::tui::run_interactive;

#[derive(Parser)]
#[command(name = "wordbook")]
#[command(version = "0.1.0")]
#[command(about = "Interactive dictionary lookup with a bounded query history", long_about = None)]
pub struct Cli {
    /// Dictionary file (JSON); falls back to the WORDBOOK_DICT environment
    /// variable, then to dict.json in the data directory
    #[arg(long, global = true)]
    pub dict: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a single word and print the result
    Lookup {
        /// The word to look up
        word: String,
    },
    /// Print the saved query history, most recent first
    History,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Lookup { word }) => lookup_once(&cli, word),
        Some(Commands::History) => show_history(),
        None => interactive(&cli),
    }
}

/// Resolve the dictionary file path: --dict flag, then WORDBOOK_DICT, then
/// dict.json next to the saved history
fn dict_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.dict {
        return Ok(path.clone());
    }
    if let Ok(path) = env::var("WORDBOOK_DICT") {
        return Ok(PathBuf::from(path));
    }

    let fallback = crate::utils::get_data_dir()?.join("dict.json");
    if fallback.exists() {
        return Ok(fallback);
    }
    bail!("No dictionary configured; pass --dict <path> or set WORDBOOK_DICT");
}

fn load_client(cli: &Cli) -> Result<DictFileClient> {
    let path = dict_path(cli)?;
    DictFileClient::from_path(&path)
}

fn lookup_once(cli: &Cli, word: &str) -> Result<()> {
    let Some(query) = normalize(word) else {
        bail!("Query is blank");
    };

    let client = load_client(cli)?;

    // The query is recorded before the lookup resolves, like the
    // interactive path
    let mut history = load_history()?;
    history.promote(&query);
    save_history(&history)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    match runtime.block_on(client.search(&query)) {
        Ok(result) => print!("{}", result.plain_text()),
        Err(err) => eprintln!("{}", err),
    }

    Ok(())
}

fn show_history() -> Result<()> {
    let history = load_history()?;
    if history.is_empty() {
        println!("No history yet");
        return Ok(());
    }

    for entry in history.iter() {
        println!("{}", entry);
    }
    Ok(())
}

fn interactive(cli: &Cli) -> Result<()> {
    let client = Arc::new(load_client(cli)?);
    let history = Arc::new(Mutex::new(load_history()?));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let session = QuerySession::new(Arc::clone(&history), client, runtime.handle().clone());

    // Seed the first query from a clipboard word when available, falling
    // back to the most recent history entry
    let seed = clipboard_seed_word().or_else(|| {
        history.lock().unwrap_or_else(|e| e.into_inner()).entry_at(0).map(|e| e.to_string())
    });

    let res = run_interactive(Arc::clone(&history), session, seed);

    // Persist history whether or not the loop exited cleanly
    if let Err(err) = save_history(&history.lock().unwrap_or_else(|e| e.into_inner())) {
        eprintln!("Warning: failed to save history: {}", err);
    }

    res
}
