use super::{DirectoryScan, FileLister, ListedEntry};
use crate::error::{IssueKind, ListingIssue, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Lists one directory level, skipping dotfiles.
pub struct BasicLister;

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

impl FileLister for BasicLister {
    fn list_files(&self, directory: &Path) -> Result<DirectoryScan> {
        let mut scan = DirectoryScan::default();

        for entry in fs::read_dir(directory)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let issue = ListingIssue::new(IssueKind::ReadEntry, directory, err);
                    scan.issues.push(issue);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if is_hidden(&name) {
                debug!("skipping hidden entry {}", name);
                continue;
            }

            scan.entries.push(ListedEntry {
                path: directory.join(entry.file_name()),
                name,
            });
        }

        Ok(scan)
    }
}
