use std::path::PathBuf;
use thiserror::Error;

/// Failure modes for starting or running a hangman session.
///
/// Gameplay itself never fails; these are startup data checks and terminal I/O.
#[derive(Debug, Error)]
pub enum HangmanError
{
    #[error("word list is empty")]
    EmptyWordList,
    #[error("word list entry {index} ({word:?}) must be non-empty lowercase ascii letters")]
    InvalidWord { index: usize, word: String },
    #[error("lives list needs at least 2 entries, got {0}")]
    TooFewLives(usize),
    #[error("failed to open log file {path:?}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
