use crate::selector::Selector;
use std::path::PathBuf;
use thiserror::Error;

/// Error whilst emitting a source file
#[derive(Error, Debug)]
pub enum EmitError {
    /// Rejected command line, or a `--help`/`--version` request; clap renders
    /// both and picks the exit status
    #[error(transparent)]
    InvalidArgument(#[from] clap::Error),
    #[error("No template is defined for source type '{0}'")]
    UnhandledSelector(Selector),
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
