use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigErrorKind {
    InvalidFormat(String),
    InvalidValue(String, String),
    InvalidPath(String),
}

#[derive(Debug)]
pub enum LslError {
    Io(io::Error),
    Config(ConfigErrorKind),
}

pub type Result<T> = std::result::Result<T, LslError>;

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::InvalidFormat(msg) => write!(f, "Invalid config format: {}", msg),
            ConfigErrorKind::InvalidValue(key, msg) => {
                write!(f, "Invalid value for '{}': {}", key, msg)
            }
            ConfigErrorKind::InvalidPath(path) => write!(f, "Invalid config path: {}", path),
        }
    }
}

impl fmt::Display for LslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LslError::Io(err) => write!(f, "{}", err),
            LslError::Config(kind) => write!(f, "{}", kind),
        }
    }
}

impl std::error::Error for LslError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LslError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LslError {
    fn from(err: io::Error) -> Self {
        LslError::Io(err)
    }
}

impl From<toml::de::Error> for LslError {
    fn from(err: toml::de::Error) -> Self {
        LslError::Config(ConfigErrorKind::InvalidFormat(err.to_string()))
    }
}

/// Where a per-path failure happened while building a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    Access,
    OpenDirectory,
    ReadEntry,
}

/// A non-fatal failure attached to one path. Only the listing orchestrator
/// turns these into diagnostics.
#[derive(Debug)]
pub struct ListingIssue {
    pub kind: IssueKind,
    pub path: PathBuf,
    pub error: io::Error,
}

impl ListingIssue {
    pub fn new(kind: IssueKind, path: &Path, error: io::Error) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            error,
        }
    }
}

impl fmt::Display for ListingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.kind {
            IssueKind::Access => "cannot access",
            IssueKind::OpenDirectory => "cannot open directory",
            IssueKind::ReadEntry => "reading directory",
        };
        write!(f, "{} '{}': {}", action, self.path.display(), self.error)
    }
}
