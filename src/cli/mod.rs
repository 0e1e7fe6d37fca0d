//! Command-line interface for Leakgate
//!
//! This module provides the main CLI structure and command handling for
//! Leakgate. It uses clap for argument parsing and keeps the default
//! invocation (no subcommand) wired to the stdin secret scan so the tool
//! drops into CI pipelines as `... | leakgate`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

pub use output::Output;

/// Leakgate - Secret-Scanning Policy Gate
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan standard input for likely secrets (the default command)
    Scan,
    /// Show version information
    Version,
    /// Removable-media device reports
    #[command(subcommand)]
    Device(DeviceCommands),
}

/// Device report subcommands
#[derive(Subcommand)]
pub enum DeviceCommands {
    /// Describe a discovered device for the auto-eject reporting pipeline
    Describe {
        /// Device path to look up (e.g. /dev/sdb1)
        #[arg(short, long)]
        path: String,

        /// JSON device list to read instead of standard input
        #[arg(short, long, value_name = "FILE")]
        input: Option<String>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            // Bare `leakgate` is the gate: scan whatever is piped in.
            Some(Commands::Scan) | None => commands::scan::execute(&output),
            Some(Commands::Version) => commands::version::execute(&output),
            Some(Commands::Device(cmd)) => commands::device::execute(cmd, &output),
        }
    }
}
