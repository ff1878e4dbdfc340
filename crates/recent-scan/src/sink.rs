//! Output sinks receiving matches and per-entry errors.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use recent_core::{MatchError, RecentError};

/// Receives the results of a matching run.
pub trait MatchSink {
    /// Called once for each matching entry, with its display name.
    fn emit(&mut self, name: &Path);

    /// Called for each path or directory that could not be read.
    fn report(&mut self, err: MatchError);
}

/// Sink made from a pair of closures.
pub struct FnSink<E, R> {
    emit: E,
    report: R,
}

impl<E, R> FnSink<E, R>
where
    E: FnMut(&Path),
    R: FnMut(MatchError),
{
    /// Create a sink from an emit and a report closure.
    pub fn new(emit: E, report: R) -> Self {
        Self { emit, report }
    }
}

impl<E, R> MatchSink for FnSink<E, R>
where
    E: FnMut(&Path),
    R: FnMut(MatchError),
{
    fn emit(&mut self, name: &Path) {
        (self.emit)(name);
    }

    fn report(&mut self, err: MatchError) {
        (self.report)(err);
    }
}

/// Sink that keeps everything in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub names: Vec<PathBuf>,
    pub errors: Vec<MatchError>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected names as text, sorted. Trailing separators are kept.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .names
            .iter()
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl MatchSink for CollectingSink {
    fn emit(&mut self, name: &Path) {
        self.names.push(name.to_path_buf());
    }

    fn report(&mut self, err: MatchError) {
        self.errors.push(err);
    }
}

/// How matches are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One name per line.
    #[default]
    Lines,
    /// Names terminated by NUL, for `xargs -0`.
    Null,
    /// Nothing is written; only whether anything matched is kept.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the quiet and print0 flags.
    pub fn from_flags(quiet: bool, print0: bool) -> Result<Self, RecentError> {
        match (quiet, print0) {
            (true, true) => Err(RecentError::ConflictingFlags {
                first: "--print0",
                second: "--quiet",
            }),
            (true, false) => Ok(Self::Quiet),
            (false, true) => Ok(Self::Null),
            (false, false) => Ok(Self::Lines),
        }
    }

    /// Byte written after each name, if any.
    pub fn terminator(self) -> Option<u8> {
        match self {
            Self::Lines => Some(b'\n'),
            Self::Null => Some(b'\0'),
            Self::Quiet => None,
        }
    }
}

/// Sink writing matches to `W` and handing errors to a closure.
///
/// The first write failure is kept and returned from [`finish`](Self::finish);
/// later matches are still counted but no longer written.
pub struct WriterSink<W: Write, R> {
    writer: W,
    mode: OutputMode,
    report: R,
    hits: u64,
    write_error: Option<io::Error>,
}

impl<W, R> WriterSink<W, R>
where
    W: Write,
    R: FnMut(MatchError),
{
    /// Create a sink for `mode`.
    pub fn new(writer: W, mode: OutputMode, report: R) -> Self {
        Self {
            writer,
            mode,
            report,
            hits: 0,
            write_error: None,
        }
    }

    /// Number of matches seen so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Whether anything matched.
    pub fn matched(&self) -> bool {
        self.hits > 0
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.write_error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_name(&mut self, name: &Path, terminator: u8) -> io::Result<()> {
        self.writer.write_all(name.as_os_str().as_encoded_bytes())?;
        self.writer.write_all(&[terminator])
    }
}

impl<W, R> MatchSink for WriterSink<W, R>
where
    W: Write,
    R: FnMut(MatchError),
{
    fn emit(&mut self, name: &Path) {
        self.hits += 1;
        if self.write_error.is_some() {
            return;
        }
        if let Some(terminator) = self.mode.terminator() {
            if let Err(err) = self.write_name(name, terminator) {
                self.write_error = Some(err);
            }
        }
    }

    fn report(&mut self, err: MatchError) {
        (self.report)(err);
    }
}
