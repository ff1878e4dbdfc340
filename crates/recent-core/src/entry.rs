//! Filesystem entry as seen by the matcher.

use std::ffi::OsString;
use std::time::{Duration, SystemTime};

/// Kind of filesystem entry. Only directories are treated specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Anything that is not a directory.
    File,
    /// Directory.
    Directory,
}

/// A single entry: its name, modification time and kind.
///
/// For an explicit argument the name is the argument as given. For an entry
/// found in a directory it is the bare file name. Names are kept as raw OS
/// strings so they can be printed back byte for byte.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Name of the entry.
    pub name: OsString,
    /// Last modification time.
    pub modified: SystemTime,
    /// Entry kind.
    pub kind: EntryKind,
}

impl Entry {
    /// Create a file entry.
    pub fn file(name: impl Into<OsString>, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            modified,
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<OsString>, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            modified,
            kind: EntryKind::Directory,
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Check if the name starts with a dot.
    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }

    /// Time elapsed between the modification and `reference`.
    ///
    /// Entries modified after `reference` have an age of zero.
    pub fn age(&self, reference: SystemTime) -> Duration {
        reference
            .duration_since(self.modified)
            .unwrap_or(Duration::ZERO)
    }
}
