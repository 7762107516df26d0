use crate::error::{ListingIssue, Result};
use std::path::{Path, PathBuf};

/// Entries found in one directory, plus the entries that could not be read.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    pub entries: Vec<ListedEntry>,
    pub issues: Vec<ListingIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
}

pub trait FileLister {
    fn list_files(&self, directory: &Path) -> Result<DirectoryScan>;
}

mod basic;

pub use basic::BasicLister;
