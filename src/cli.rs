use clap::Parser;
use std::path::PathBuf;

/// Guess the word before every language falls to Assembly.
#[derive(Debug, Parser)]
#[command(name = "assembly-hangman", version, about)]
pub struct Cli
{
    /// Seed for word selection; the same seed replays the same words.
    #[arg(long, env = "HANGMAN_SEED")]
    pub seed: Option<u64>,

    /// Write log output to this file instead of stderr.
    #[arg(long, env = "HANGMAN_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Keyboard-only play; leaves mouse events to the terminal.
    #[arg(long)]
    pub no_mouse: bool,
}
