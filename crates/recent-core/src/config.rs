//! Match configuration types.

use std::time::{Duration, SystemTime};

use derive_builder::Builder;

use crate::entry::Entry;
use crate::error::RecentError;
use crate::window::{DAY, TimeWindow};

/// Configuration for a matching run.
///
/// Built once before matching starts and never changed afterwards, so every
/// entry in a run is compared against the same reference time.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct MatchConfig {
    /// Report entries that are not recent instead.
    #[builder(default = "false")]
    pub invert: bool,

    /// Consider dot files found while scanning a directory.
    #[builder(default = "false")]
    pub include_dots: bool,

    /// Do not append `/` to directory names.
    #[builder(default = "false")]
    pub no_slash: bool,

    /// Entries younger than this are recent.
    #[builder(default = "Duration::from_secs(DAY)")]
    pub threshold: Duration,

    /// The "now" all ages are measured from.
    #[builder(default = "SystemTime::now()")]
    pub reference_time: SystemTime,
}

impl MatchConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(threshold) = self.threshold {
            if threshold.is_zero() {
                return Err("Threshold must be greater than zero".to_string());
            }
        }
        Ok(())
    }
}

impl MatchConfig {
    /// Create a new match config builder.
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// Create a config for `window`, measured from now.
    pub fn from_window(window: &TimeWindow) -> Result<Self, RecentError> {
        Self::builder()
            .threshold(window.threshold()?)
            .build()
            .map_err(|e| RecentError::InvalidConfig {
                message: e.to_string(),
            })
    }

    /// Check if an entry of the given age is inside the window.
    pub fn is_recent(&self, age: Duration) -> bool {
        age < self.threshold
    }

    /// Check if an entry should be reported, honoring `invert`.
    pub fn is_hit(&self, entry: &Entry) -> bool {
        self.is_recent(entry.age(self.reference_time)) != self.invert
    }

    /// Check if an entry found while scanning should be skipped.
    pub fn should_skip_hidden(&self, entry: &Entry) -> bool {
        !self.include_dots && entry.is_hidden()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            invert: false,
            include_dots: false,
            no_slash: false,
            threshold: Duration::from_secs(DAY),
            reference_time: SystemTime::now(),
        }
    }
}
