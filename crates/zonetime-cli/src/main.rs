//! Zonetime CLI Application
//!
//! World clock for the command line: one report line per invocation.

mod args;
mod cli;

use anyhow::Result;
use args::Args;
use clap::Parser;
use cli::{Cli, Mode};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let Args { mode } = Args::parse();

    info!("Zonetime started");

    match Mode::from_arg(mode.as_deref()) {
        Mode::Help => cli::print_usage(),
        Mode::Report(mode) => println!("{}", Cli::new().report(mode)),
    }

    Ok(())
}
