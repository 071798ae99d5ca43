use std::path::PathBuf;

use thiserror::Error;

/// Failures at the edges of the game: files, config and scripts.
///
/// Moves themselves never fail; an invalid move is simply ignored.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid event script: {0}")]
    Script(#[source] ron::error::SpannedError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] ron::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
