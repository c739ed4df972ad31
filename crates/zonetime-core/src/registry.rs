//! The timezone registry.
//!
//! An ordered, immutable mapping from short display labels (airport
//! mnemonics) to canonical IANA timezone identifiers. The registry is built
//! once at startup and only read afterwards; insertion order defines the
//! display order of the `all` report.

use crate::params::ReportMode;

/// Labels selected by the default report, in display order.
const DEFAULT_LABELS: [&str; 3] = ["UTC", "IAD", "SFO"];

/// Labels selected by the `us` report, in display order.
const US_LABELS: [&str; 5] = ["IAD", "ORD", "DEN", "SFO", "HNL"];

/// One registry entry: a display label paired with the IANA timezone
/// identifier it stands for.
///
/// The label is used verbatim as the output key and is decoupled from the
/// identifier, so e.g. `IAD` can map to `America/New_York`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    label: String,
    zone_id: String,
}

impl ZoneEntry {
    /// Creates an entry from a label and a timezone identifier.
    pub fn new(label: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            zone_id: zone_id.into(),
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The IANA timezone identifier.
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }
}

/// Ordered collection of zone entries.
///
/// Labels are unique and case-sensitive. The collection is never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    entries: Vec<ZoneEntry>,
}

impl ZoneRegistry {
    /// Creates a registry from a list of entries.
    ///
    /// Entries are kept in the given order. Labels are expected to be unique;
    /// lookups return the first match.
    pub fn new(entries: Vec<ZoneEntry>) -> Self {
        Self { entries }
    }

    /// The standard registry of configured locations.
    pub fn standard() -> Self {
        Self::new(vec![
            ZoneEntry::new("UTC", "UTC"),
            ZoneEntry::new("CDG", "Europe/Paris"),
            ZoneEntry::new("LHR", "Europe/London"),
            ZoneEntry::new("IAD", "America/New_York"),
            ZoneEntry::new("ORD", "America/Chicago"),
            ZoneEntry::new("DEN", "America/Denver"),
            ZoneEntry::new("SFO", "America/Los_Angeles"),
            ZoneEntry::new("HNL", "Pacific/Honolulu"),
            ZoneEntry::new("HYD", "Asia/Kolkata"),
            ZoneEntry::new("SIN", "Asia/Singapore"),
            ZoneEntry::new("NRT", "Asia/Tokyo"),
        ])
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its display label.
    pub fn get(&self, label: &str) -> Option<&ZoneEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Iterator over all entries in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, ZoneEntry> {
        self.entries.iter()
    }

    /// The entries a report in the given mode covers.
    pub fn entries_for(&self, mode: ReportMode) -> Vec<&ZoneEntry> {
        match mode {
            ReportMode::Default => self.select(&DEFAULT_LABELS),
            ReportMode::Us => self.select(&US_LABELS),
            ReportMode::All => self.entries.iter().collect(),
        }
    }

    /// Resolves a label list against the registry, keeping the list's order.
    fn select(&self, labels: &[&str]) -> Vec<&ZoneEntry> {
        labels.iter().filter_map(|label| self.get(label)).collect()
    }
}

impl<'a> IntoIterator for &'a ZoneRegistry {
    type Item = &'a ZoneEntry;
    type IntoIter = std::slice::Iter<'a, ZoneEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
