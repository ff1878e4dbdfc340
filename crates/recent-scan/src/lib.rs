//! Recency matching engine for recent.
//!
//! The [`Matcher`] classifies filesystem entries against a fixed reference
//! time and reports hits through a [`MatchSink`]. It does not recurse:
//! explicitly named directories and the scanned directory are listed one
//! level deep.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use recent_scan::{CollectingSink, MatchConfig, Matcher, TimeWindow};
//!
//! let config = MatchConfig::from_window(&TimeWindow::days(2)).unwrap();
//! let matcher = Matcher::new(config);
//!
//! let mut sink = CollectingSink::new();
//! matcher.scan_directory(Path::new("."), &mut sink);
//!
//! for name in &sink.names {
//!     println!("{}", name.display());
//! }
//! ```

mod matcher;
pub mod path;
mod sink;
mod source;

pub use matcher::{MatchSummary, Matcher};
pub use sink::{CollectingSink, FnSink, MatchSink, OutputMode, WriterSink};
pub use source::{FileSource, OsEntries, OsFileSource};

// Re-export core types for convenience
pub use recent_core::{
    Entry, EntryKind, MatchConfig, MatchError, RecentError, TimeWindow, format_age,
};
