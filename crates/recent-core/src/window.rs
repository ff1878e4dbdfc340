//! Recency window built from separate time unit counts.

use std::time::Duration;

use crate::error::RecentError;

/// Seconds in a minute.
pub const MINUTE: u64 = 60;
/// Seconds in an hour.
pub const HOUR: u64 = 60 * MINUTE;
/// Seconds in a day (always 24 hours).
pub const DAY: u64 = 24 * HOUR;
/// Seconds in a month (always 30 days).
pub const MONTH: u64 = 30 * DAY;
/// Seconds in a year (always 365 days).
pub const YEAR: u64 = 365 * DAY;

/// Rough upper bound on the window, in years.
pub const MAX_YEARS: u64 = 290;

/// A recency window expressed as counts of each time unit.
///
/// The counts are added together, so `days: 1, hours: 12` and `hours: 36`
/// describe the same window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub minutes: u64,
    pub hours: u64,
    pub days: u64,
    pub months: u64,
    pub years: u64,
}

impl TimeWindow {
    /// Create a window from year, month, day, hour and minute counts.
    pub fn new(years: u64, months: u64, days: u64, hours: u64, minutes: u64) -> Self {
        Self {
            minutes,
            hours,
            days,
            months,
            years,
        }
    }

    /// A window of whole days.
    pub fn days(days: u64) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    /// Check if every count is zero.
    pub fn is_zero(&self) -> bool {
        self.minutes == 0 && self.hours == 0 && self.days == 0 && self.months == 0 && self.years == 0
    }

    /// Approximate size of the window in whole years.
    ///
    /// Each unit is truncated on its own, so eleven months and 364 days
    /// both count as zero years.
    pub fn approx_years(&self) -> u64 {
        self.years
            .saturating_add(self.months / 12)
            .saturating_add(self.days / 365)
            .saturating_add(self.hours / (24 * 365))
            .saturating_add(self.minutes / (60 * 24 * 365))
    }

    /// Reject windows larger than [`MAX_YEARS`].
    pub fn check_overflow(&self) -> Result<(), RecentError> {
        let years = self.approx_years();
        if years > MAX_YEARS {
            return Err(RecentError::DurationOverflow { years });
        }
        Ok(())
    }

    /// Sum the counts into a single duration.
    ///
    /// Only meaningful after [`check_overflow`](Self::check_overflow) has
    /// passed; use [`threshold`](Self::threshold) for the checked form.
    pub fn to_duration(&self) -> Duration {
        let secs = self.years * YEAR
            + self.months * MONTH
            + self.days * DAY
            + self.hours * HOUR
            + self.minutes * MINUTE;
        Duration::from_secs(secs)
    }

    /// The threshold to match against, defaulting to one day when empty.
    pub fn threshold(&self) -> Result<Duration, RecentError> {
        self.check_overflow()?;
        if self.is_zero() {
            return Ok(Duration::from_secs(DAY));
        }
        Ok(self.to_duration())
    }
}

/// Format a duration in its largest whole unit, or fractional years.
pub fn format_age(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= YEAR {
        return format!("{:.1} years", secs as f64 / YEAR as f64);
    }

    let units = [
        (MONTH, "months"),
        (DAY, "days"),
        (HOUR, "hours"),
        (MINUTE, "minutes"),
    ];
    units
        .into_iter()
        .find(|&(unit, _)| secs >= unit)
        .map(|(unit, label)| format!("{} {label}", secs / unit))
        .unwrap_or_else(|| format!("{secs} seconds"))
}
