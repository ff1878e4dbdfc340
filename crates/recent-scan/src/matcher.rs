//! Recency matching over named paths and directory listings.

use std::ops::AddAssign;
use std::path::Path;

use tracing::{debug, trace};

use recent_core::{Entry, MatchConfig, format_age};

use crate::path::display_name;
use crate::sink::MatchSink;
use crate::source::{FileSource, OsFileSource};

/// Counters for a matching run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// Entries classified (dot files that were skipped are not counted).
    pub examined: u64,
    /// Entries passed to the sink.
    pub hits: u64,
    /// Errors passed to the sink.
    pub errors: u64,
}

impl AddAssign for MatchSummary {
    fn add_assign(&mut self, other: Self) {
        self.examined += other.examined;
        self.hits += other.hits;
        self.errors += other.errors;
    }
}

/// Classifies entries as recent or not and reports the hits.
pub struct Matcher<F = OsFileSource> {
    config: MatchConfig,
    source: F,
}

impl Matcher<OsFileSource> {
    /// Create a matcher reading the real filesystem.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_source(config, OsFileSource::new())
    }
}

impl<F: FileSource> Matcher<F> {
    /// Create a matcher reading from `source`.
    pub fn with_source(config: MatchConfig, source: F) -> Self {
        Self { config, source }
    }

    /// The configuration this matcher runs with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match paths given explicitly, e.g. on the command line.
    ///
    /// A directory is never reported itself; its children are scanned as
    /// by [`scan_directory`](Self::scan_directory). Anything else is
    /// classified as-is, dot files included.
    pub fn match_named<I, P, S>(&self, paths: I, sink: &mut S) -> MatchSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        S: MatchSink + ?Sized,
    {
        let mut summary = MatchSummary::default();
        for path in paths {
            let path = path.as_ref();
            let entry = match self.source.stat(path) {
                Ok(entry) => entry,
                Err(err) => {
                    summary.errors += 1;
                    sink.report(err);
                    continue;
                }
            };

            if entry.is_dir() {
                summary += self.scan_directory(path, sink);
            } else {
                self.classify(Path::new(""), &entry, sink, &mut summary);
            }
        }
        summary
    }

    /// Match the immediate children of `dir`.
    ///
    /// Dot files are skipped unless the config includes them. A failure to
    /// open or read the directory is reported and ends the scan of `dir`.
    pub fn scan_directory<S>(&self, dir: &Path, sink: &mut S) -> MatchSummary
    where
        S: MatchSink + ?Sized,
    {
        let mut summary = MatchSummary::default();
        debug!(dir = %dir.display(), "scanning directory");

        let entries = match self.source.read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                summary.errors += 1;
                sink.report(err);
                return summary;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    summary.errors += 1;
                    sink.report(err);
                    break;
                }
            };

            if self.config.should_skip_hidden(&entry) {
                continue;
            }
            self.classify(dir, &entry, sink, &mut summary);
        }

        debug!(
            dir = %dir.display(),
            examined = summary.examined,
            hits = summary.hits,
            errors = summary.errors,
            "finished directory"
        );
        summary
    }

    fn classify<S>(&self, prefix: &Path, entry: &Entry, sink: &mut S, summary: &mut MatchSummary)
    where
        S: MatchSink + ?Sized,
    {
        summary.examined += 1;
        let hit = self.config.is_hit(entry);
        trace!(
            name = %entry.name.to_string_lossy(),
            age = %format_age(entry.age(self.config.reference_time)),
            hit,
            "classified entry"
        );
        if !hit {
            return;
        }

        summary.hits += 1;
        let name = display_name(prefix, &entry.name, entry.is_dir(), self.config.no_slash);
        sink.emit(&name);
    }
}
