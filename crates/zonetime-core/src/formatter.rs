//! The zone time formatter.

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::display::{FormattedEntry, Report};
use crate::error::Result;
use crate::registry::ZoneEntry;
use crate::zone::{self, ZoneTime};

/// Formats registry entries as report strings.
///
/// The formatter owns the time source. Every call samples the clock
/// independently; there is no snapshot shared across a report, so two
/// entries in one report may legitimately be a second apart.
///
/// This never fails from the caller's point of view: a timezone that cannot
/// be resolved formats as the `ERROR` sentinel, and the cause is only
/// recorded at debug level.
pub struct ZoneTimeFormatter<C = SystemClock> {
    clock: C,
}

impl ZoneTimeFormatter {
    /// Creates a formatter reading the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for ZoneTimeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ZoneTimeFormatter<C> {
    /// Creates a formatter with a custom time source.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Resolves an entry's zone at the current instant.
    pub fn resolve(&self, entry: &ZoneEntry) -> Result<ZoneTime> {
        zone::resolve(entry.zone_id(), self.clock.now())
    }

    /// Formats one entry, converting resolution failures to the sentinel.
    pub fn format_entry(&self, entry: &ZoneEntry) -> String {
        let time = self.resolve(entry);
        if let Err(err) = &time {
            debug!("{}: {err}", entry.label());
        }
        FormattedEntry::new(entry.label(), &time).to_string()
    }

    /// Formats a selection of entries into a report.
    pub fn report<'a, I>(&self, entries: I) -> Report
    where
        I: IntoIterator<Item = &'a ZoneEntry>,
    {
        Report(
            entries
                .into_iter()
                .map(|entry| self.format_entry(entry))
                .collect(),
        )
    }
}
