//! Parameter types shared across interfaces.
//!
//! The report mode lives here, free of CLI-framework derives, so the clap
//! layer converts its raw argument into this type and the core stays
//! interface-agnostic.

/// Which slice of the registry a report covers.
///
/// An unrecognized mode argument selects [`ReportMode::Default`] at the CLI
/// boundary; there is no error path for bad modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// UTC plus the two coastal US zones
    Default,
    /// The US zones only
    Us,
    /// Every registered zone, in registry order
    All,
}
