use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal failures of a single extraction run.
#[derive(Debug)]
pub enum ExtractError {
    /// The log could not be read (missing, permission denied, or not UTF-8).
    InputRead { path: PathBuf, source: io::Error },

    /// The summary could not be written.
    OutputWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRead { path, source } => {
                write!(f, "failed to read log '{}': {source}", path.display())
            }
            Self::OutputWrite { path, source } => {
                write!(f, "failed to write summary '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputRead { source, .. } | Self::OutputWrite { source, .. } => Some(source),
        }
    }
}
