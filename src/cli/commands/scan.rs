//! Stdin scan command
//!
//! Reads all of standard input, runs the fixed detection patterns over it and
//! turns the findings into the gate decision: exit 0 silent when clean, exit 1
//! with a single summary line on stdout when anything credential-like matched.

use crate::cli::Output;
use crate::scanner::{SecretScanner, summary_line};
use anyhow::{Context, Result};
use std::io::Read;

/// Execute the scan command
pub fn execute(output: &Output) -> Result<()> {
    // The whole blob is buffered before matching starts; a read failure here
    // is fatal and propagates as-is.
    let mut data = String::new();
    std::io::stdin()
        .read_to_string(&mut data)
        .context("Failed to read standard input")?;

    output.verbose(&format!("Scanning {} bytes from stdin", data.len()));

    let scanner = SecretScanner::new()?;
    let findings = scanner.scan(&data);

    if findings.is_empty() {
        output.verbose("No secrets found");
        return Ok(());
    }

    // The summary line is the machine-readable contract: plain stdout,
    // unstyled, never suppressed by quiet mode.
    println!("{}", summary_line(&findings));
    std::process::exit(1);
}
