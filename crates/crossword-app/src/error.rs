use std::{io, path::PathBuf};

/// Errors that stop the application.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// The word file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    WordsFile {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The word list is empty after skipping blank and comment lines.
    #[display("no words to place")]
    NoWords,
}
