//! Display formatting wrappers.
//!
//! Presentation is kept out of the resolution logic: the core produces
//! `Result<ZoneTime>` values, and the newtype wrappers here turn those into
//! the strings the report prints. This is where a resolution failure
//! collapses into the `ERROR` sentinel, and where entries are joined into
//! the one-line report.
//!
//! ## Module Organization
//!
//! - [`entry`]: single-entry presentation ([`FormattedEntry`])
//! - [`report`]: joined report line ([`Report`])

pub mod entry;
pub mod report;

// Re-export commonly used types for convenience
pub use entry::FormattedEntry;
pub use report::Report;
