//! Error types for the zonetime library.

use thiserror::Error;

/// Error type for timezone operations.
///
/// The only failure the system knows is a timezone identifier that cannot be
/// resolved against the timezone database. Callers at the presentation
/// boundary convert this into the `ERROR` sentinel instead of propagating it,
/// so a single bad registry entry never aborts a report.
#[derive(Error, Debug)]
pub enum ZoneError {
    /// The identifier is unknown to the timezone database
    #[error("Cannot resolve timezone '{id}'")]
    Resolution {
        id: String,
        #[source]
        source: jiff::Error,
    },
}

impl ZoneError {
    /// Creates a resolution error for the given identifier.
    pub fn resolution(id: impl Into<String>, source: jiff::Error) -> Self {
        Self::Resolution {
            id: id.into(),
            source,
        }
    }
}

/// Result type alias for zonetime operations
pub type Result<T> = std::result::Result<T, ZoneError>;
