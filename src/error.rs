use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for semver-file operations
#[derive(Error, Debug)]
pub enum SemverFileError {
    #[error("Failed to read version from '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },

    #[error("Failed to write version to '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why an existing version file could not be turned into a version.
#[derive(Error, Debug)]
pub enum ReadFailure {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("file is empty")]
    Empty,

    #[error("malformed content '{content}': {reason}")]
    Malformed { content: String, reason: String },
}

/// Convenience type alias for Results in semver-file
pub type Result<T> = std::result::Result<T, SemverFileError>;

/// Coarse classification used by callers that react per failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Write,
    Version,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Read => "read",
            ErrorKind::Write => "write",
            ErrorKind::Version => "version",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

impl SemverFileError {
    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: impl Into<ReadFailure>) -> Self {
        SemverFileError::Read {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SemverFileError::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        SemverFileError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverFileError::Config(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SemverFileError::Read { .. } => ErrorKind::Read,
            SemverFileError::Write { .. } => ErrorKind::Write,
            SemverFileError::Version(_) => ErrorKind::Version,
            SemverFileError::Config(_) => ErrorKind::Config,
        }
    }
}
