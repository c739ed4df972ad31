//! Mode dispatch and report driving.
//!
//! The raw mode string from the command line is converted into a core
//! [`ReportMode`] here, keeping the core crate free of CLI concerns. There
//! is no error path for unknown modes: any unrecognized word is a request
//! for the default report.

use zonetime_core::{ReportMode, ZoneRegistry, ZoneTimeFormatter};

/// What a parsed command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the usage text and exit
    Help,
    /// Print a report for the given selection
    Report(ReportMode),
}

impl Mode {
    /// Maps the raw mode argument to a [`Mode`].
    ///
    /// Absent or unrecognized arguments select the default report.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("help") => Mode::Help,
            Some("all") => Mode::Report(ReportMode::All),
            Some("us") => Mode::Report(ReportMode::Us),
            _ => Mode::Report(ReportMode::Default),
        }
    }
}

/// CLI driver owning the registry and formatter.
pub struct Cli {
    registry: ZoneRegistry,
    formatter: ZoneTimeFormatter,
}

impl Cli {
    /// Creates a driver over the standard registry and the system clock.
    pub fn new() -> Self {
        Self {
            registry: ZoneRegistry::standard(),
            formatter: ZoneTimeFormatter::new(),
        }
    }

    /// Renders the report line for the given selection.
    pub fn report(&self, mode: ReportMode) -> String {
        self.formatter
            .report(self.registry.entries_for(mode))
            .to_string()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the usage statement.
pub fn print_usage() {
    println!();
    println!("Usage: zt [mode]");
    println!("  help           Display this help");
    println!("  all            Display all configured time zones");
    println!("  us             Display only US time zones");
    println!("  * or {{blank}}   Display UTC, IAD and SFO time only");
    println!();
    println!("Version {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_recognized_args() {
        assert_eq!(Mode::from_arg(Some("help")), Mode::Help);
        assert_eq!(Mode::from_arg(Some("all")), Mode::Report(ReportMode::All));
        assert_eq!(Mode::from_arg(Some("us")), Mode::Report(ReportMode::Us));
    }

    #[test]
    fn test_mode_falls_back_to_default() {
        assert_eq!(Mode::from_arg(None), Mode::Report(ReportMode::Default));
        assert_eq!(
            Mode::from_arg(Some("everything")),
            Mode::Report(ReportMode::Default)
        );
        // Case-sensitive: only the exact words are recognized
        assert_eq!(Mode::from_arg(Some("ALL")), Mode::Report(ReportMode::Default));
    }
}
