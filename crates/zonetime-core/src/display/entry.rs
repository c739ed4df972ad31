//! Single-entry presentation.

use std::fmt;

use crate::error::Result;
use crate::zone::ZoneTime;

/// Presentation wrapper for one report entry.
///
/// Pairs a display label with the outcome of resolving its timezone. On
/// success it renders `"{label}: {HH:MM}"` (with the `(DST)` suffix when
/// applicable); on failure it renders exactly `"{label}: ERROR"` with no
/// diagnostic detail. The error itself stays available to callers that want
/// to log it.
pub struct FormattedEntry<'a> {
    label: &'a str,
    time: &'a Result<ZoneTime>,
}

impl<'a> FormattedEntry<'a> {
    /// Creates a formatted entry from a label and a resolution outcome.
    pub fn new(label: &'a str, time: &'a Result<ZoneTime>) -> Self {
        Self { label, time }
    }
}

impl fmt::Display for FormattedEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Ok(time) => write!(f, "{}: {}", self.label, time),
            Err(_) => write!(f, "{}: ERROR", self.label),
        }
    }
}
