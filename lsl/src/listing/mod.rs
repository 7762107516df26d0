use crate::config::Config;
use crate::entry::{DisplayRecord, EntryBuilder, RawMetadata};
use crate::error::{IssueKind, ListingIssue, LslError, Result};
use crate::formatter::time::TimestampFormatter;
use crate::formatter::{total_line, LongFormatter};
use crate::lister::{BasicLister, FileLister};
use crate::sorter::sort_by_name;
use crate::utils::identity::IdentityResolver;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

const PROGRAM_NAME: &str = "lsl";
const CURRENT_DIRECTORY: &str = ".";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListingOutcome {
    /// Top-level arguments that could be stat'ed.
    pub resolved: usize,
    /// Diagnostics written to the error stream.
    pub issues: usize,
}

impl ListingOutcome {
    pub fn success(&self) -> bool {
        self.resolved > 0
    }
}

/// Drives one invocation: resolves the arguments, lists files and
/// directories, and is the only place failures become diagnostics.
pub struct Listing<W: Write, E: Write> {
    builder: EntryBuilder,
    formatter: LongFormatter,
    lister: Box<dyn FileLister>,
    outcome: ListingOutcome,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Listing<W, E> {
    pub fn new(config: &Config, out: W, err: E) -> Self {
        let builder = EntryBuilder::new(
            IdentityResolver::new(),
            TimestampFormatter::new(config.time_zone),
        );
        Self::with_parts(
            builder,
            LongFormatter::new(config.max_link_target),
            Box::new(BasicLister),
            out,
            err,
        )
    }

    pub fn with_parts(
        builder: EntryBuilder,
        formatter: LongFormatter,
        lister: Box<dyn FileLister>,
        out: W,
        err: E,
    ) -> Self {
        Self {
            builder,
            formatter,
            lister,
            outcome: ListingOutcome::default(),
            out,
            err,
        }
    }

    pub fn run(&mut self, paths: &[String]) -> Result<ListingOutcome> {
        let args: Vec<String> = if paths.is_empty() {
            vec![CURRENT_DIRECTORY.to_string()]
        } else {
            paths.to_vec()
        };

        self.outcome = ListingOutcome::default();
        let mut records = Vec::with_capacity(args.len());
        for arg in &args {
            let path = Path::new(arg);
            match fs::symlink_metadata(path) {
                Ok(meta) => {
                    let raw = RawMetadata::from(&meta);
                    records.push(self.builder.build(arg.clone(), path.to_path_buf(), &raw));
                    self.outcome.resolved += 1;
                }
                Err(err) => {
                    self.report(&ListingIssue::new(IssueKind::Access, path, err))?;
                }
            }
        }

        if records.is_empty() {
            return Ok(self.outcome);
        }

        sort_by_name(&mut records);

        if args.len() == 1 && records[0].is_dir() {
            self.list_directory(records[0].raw_path())?;
            return Ok(self.outcome);
        }

        let (directories, files): (Vec<DisplayRecord>, Vec<DisplayRecord>) =
            records.into_iter().partition(DisplayRecord::is_dir);

        if !files.is_empty() {
            let rendered = self.formatter.format_batch(&files);
            self.out.write_all(rendered.as_bytes())?;
        }
        drop(files);

        for directory in &directories {
            writeln!(self.out)?;
            writeln!(self.out, "{}:", directory.display_name())?;
            self.list_directory(directory.raw_path())?;
        }

        Ok(self.outcome)
    }

    /// Counts so far, including those of a run that stopped on an error.
    pub fn outcome(&self) -> ListingOutcome {
        self.outcome
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    /// Writes `total <N>` and the rows of one directory.
    fn list_directory(&mut self, directory: &Path) -> Result<()> {
        let scan = match self.lister.list_files(directory) {
            Ok(scan) => scan,
            Err(LslError::Io(err)) => {
                let issue = ListingIssue::new(IssueKind::OpenDirectory, directory, err);
                return self.report(&issue);
            }
            Err(other) => return Err(other),
        };

        for issue in &scan.issues {
            self.report(issue)?;
        }

        let mut records = Vec::with_capacity(scan.entries.len());
        for entry in scan.entries {
            match fs::symlink_metadata(&entry.path) {
                Ok(meta) => {
                    let raw = RawMetadata::from(&meta);
                    records.push(self.builder.build(entry.name, entry.path, &raw));
                }
                Err(err) => {
                    self.report(&ListingIssue::new(IssueKind::Access, &entry.path, err))?;
                }
            }
        }

        sort_by_name(&mut records);
        debug!(
            "listing {} entries of {}",
            records.len(),
            directory.display()
        );

        writeln!(self.out, "{}", total_line(&records))?;
        let rendered = self.formatter.format_batch(&records);
        self.out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn report(&mut self, issue: &ListingIssue) -> Result<()> {
        self.outcome.issues += 1;
        writeln!(self.err, "{}: {}", PROGRAM_NAME, issue)?;
        Ok(())
    }
}
