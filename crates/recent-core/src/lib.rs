//! Core types for recent.
//!
//! This crate provides the data structures shared by the matcher and the
//! command-line front end: the time window a run matches against, the
//! match configuration, the entry model, and error types.

mod config;
mod entry;
mod error;
pub mod window;

pub use config::{MatchConfig, MatchConfigBuilder};
pub use entry::{Entry, EntryKind};
pub use error::{MatchError, RecentError};
pub use window::{TimeWindow, format_age};
