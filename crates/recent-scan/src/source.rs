//! Filesystem access used by the matcher.

use std::ffi::OsString;
use std::fs::{self, Metadata, ReadDir};
use std::path::{Path, PathBuf};

use recent_core::{Entry, EntryKind, MatchError};

/// Source of entry metadata and directory listings.
pub trait FileSource {
    /// Lazy, single-pass listing of a directory's immediate children.
    type Entries: Iterator<Item = Result<Entry, MatchError>>;

    /// Look up `path`, following symlinks. The returned entry is named
    /// after `path` exactly as given.
    fn stat(&self, path: &Path) -> Result<Entry, MatchError>;

    /// Open `path` for listing.
    fn read_dir(&self, path: &Path) -> Result<Self::Entries, MatchError>;
}

/// [`FileSource`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSource;

impl OsFileSource {
    /// Create a new source.
    pub fn new() -> Self {
        Self
    }
}

impl FileSource for OsFileSource {
    type Entries = OsEntries;

    fn stat(&self, path: &Path) -> Result<Entry, MatchError> {
        let metadata = fs::metadata(path).map_err(|e| MatchError::io(path, e))?;
        to_entry(path.as_os_str().to_os_string(), &metadata).map_err(|e| MatchError::io(path, e))
    }

    fn read_dir(&self, path: &Path) -> Result<Self::Entries, MatchError> {
        let inner = fs::read_dir(path).map_err(|e| MatchError::io(path, e))?;
        Ok(OsEntries {
            inner,
            dir: path.to_path_buf(),
            done: false,
        })
    }
}

/// Directory listing from [`OsFileSource`].
///
/// Entries use `lstat` metadata, so symlinks are reported as themselves.
/// Entries that disappear between listing and lookup are skipped. After
/// the first error the listing ends.
#[derive(Debug)]
pub struct OsEntries {
    inner: ReadDir,
    dir: PathBuf,
    done: bool,
}

impl Iterator for OsEntries {
    type Item = Result<Entry, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let dir_entry = match self.inner.next()? {
                Ok(dir_entry) => dir_entry,
                Err(err) => {
                    self.done = true;
                    return Some(Err(MatchError::io(&self.dir, err)));
                }
            };

            let metadata = match dir_entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(MatchError::io(dir_entry.path(), err)));
                }
            };

            return Some(
                to_entry(dir_entry.file_name(), &metadata)
                    .map_err(|e| MatchError::io(dir_entry.path(), e)),
            );
        }
        None
    }
}

fn to_entry(name: OsString, metadata: &Metadata) -> std::io::Result<Entry> {
    let kind = if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };
    Ok(Entry {
        name,
        modified: metadata.modified()?,
        kind,
    })
}
