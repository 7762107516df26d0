use crate::formatter::time::TimestampFormatter;
use crate::utils::identity::IdentityResolver;
use chrono::{DateTime, Utc};
use log::debug;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

pub const S_IFMT: u32 = 0o170000;
pub const S_IFSOCK: u32 = 0o140000;
pub const S_IFLNK: u32 = 0o120000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFBLK: u32 = 0o060000;
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFCHR: u32 = 0o020000;
pub const S_IFIFO: u32 = 0o010000;

pub const S_ISUID: u32 = 0o4000;
pub const S_ISGID: u32 = 0o2000;
pub const S_ISVTX: u32 = 0o1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFREG => EntryKind::Regular,
            S_IFDIR => EntryKind::Directory,
            S_IFLNK => EntryKind::Symlink,
            S_IFBLK => EntryKind::BlockDevice,
            S_IFCHR => EntryKind::CharDevice,
            S_IFIFO => EntryKind::Fifo,
            S_IFSOCK => EntryKind::Socket,
            _ => EntryKind::Unknown,
        }
    }

    pub fn type_char(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharDevice => 'c',
            EntryKind::Fifo => 'p',
            EntryKind::Socket => 's',
            EntryKind::Regular | EntryKind::Unknown => '-',
        }
    }
}

/// The subset of `lstat` output a listing row needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawMetadata {
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub blocks: u64,
    pub mtime: i64,
    pub mtime_nsec: i64,
}

impl From<&Metadata> for RawMetadata {
    fn from(meta: &Metadata) -> Self {
        RawMetadata {
            mode: meta.mode(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            blocks: meta.blocks(),
            mtime: meta.mtime(),
            mtime_nsec: meta.mtime_nsec(),
        }
    }
}

impl RawMetadata {
    pub fn modified_at(&self) -> DateTime<Utc> {
        let nanos = u32::try_from(self.mtime_nsec).unwrap_or(0);
        match DateTime::from_timestamp(self.mtime, nanos) {
            Some(modified) => modified,
            None => {
                debug!("mtime {} is out of range, showing the epoch", self.mtime);
                DateTime::default()
            }
        }
    }
}

/// One entry, fully formatted except for its symlink target, which is read
/// when the row is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRecord {
    display_name: String,
    raw_path: PathBuf,
    kind: EntryKind,
    permission_bits: u32,
    link_count: u64,
    size_bytes: u64,
    block_count: u64,
    owner_name: String,
    group_name: String,
    modified_text: String,
}

impl DisplayRecord {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn raw_path(&self) -> &Path {
        &self.raw_path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn permission_bits(&self) -> u32 {
        self.permission_bits
    }

    pub fn link_count(&self) -> u64 {
        self.link_count
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn block_count(&self) -> u64 {
        self.block_count
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn modified_text(&self) -> &str {
        &self.modified_text
    }
}

pub struct EntryBuilder {
    identities: IdentityResolver,
    timestamps: TimestampFormatter,
}

impl EntryBuilder {
    pub fn new(identities: IdentityResolver, timestamps: TimestampFormatter) -> Self {
        Self {
            identities,
            timestamps,
        }
    }

    /// Builds a record against the wall clock as it reads right now.
    pub fn build(
        &mut self,
        display_name: String,
        raw_path: PathBuf,
        raw: &RawMetadata,
    ) -> DisplayRecord {
        self.build_at(display_name, raw_path, raw, Utc::now())
    }

    pub fn build_at(
        &mut self,
        display_name: String,
        raw_path: PathBuf,
        raw: &RawMetadata,
        now: DateTime<Utc>,
    ) -> DisplayRecord {
        let modified_at = raw.modified_at();

        DisplayRecord {
            display_name,
            raw_path,
            kind: EntryKind::from_mode(raw.mode),
            permission_bits: raw.mode,
            link_count: raw.nlink,
            size_bytes: raw.size,
            block_count: raw.blocks,
            owner_name: self.identities.owner_name(raw.uid),
            group_name: self.identities.group_name(raw.gid),
            modified_text: self.timestamps.format(&modified_at, &now),
        }
    }
}
