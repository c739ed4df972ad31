use clap::Parser;

/// Command-line interface for the zonetime world clock
///
/// Prints the current local time for a fixed set of world locations on a
/// single line, marking zones currently observing daylight-saving time. The
/// optional mode argument selects which locations appear; anything it does
/// not recognize falls back to the default selection.
#[derive(Parser)]
#[command(version, about, name = "zt")]
pub struct Args {
    /// Report mode: `help`, `all`, `us`; anything else shows UTC, IAD and
    /// SFO only
    pub mode: Option<String>,
}
