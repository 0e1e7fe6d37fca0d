//! Device report command implementations
//!
//! Commands for shaping discovered removable-media devices into the stable
//! JSON reports the auto-eject pipeline persists for follow-up operations.

use crate::cli::{DeviceCommands, Output};
use crate::device::{Device, describe_device};
use anyhow::{Context, Result};
use std::io::Read;

/// Execute device commands
pub fn execute(cmd: DeviceCommands, output: &Output) -> Result<()> {
    match cmd {
        DeviceCommands::Describe { path, input } => describe(&path, input.as_deref(), output),
    }
}

/// Describe the device whose path matches the target
fn describe(path: &str, input: Option<&str>, output: &Output) -> Result<()> {
    let raw = match input {
        Some(file) => std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read device list: {}", file))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read device list from standard input")?;
            buf
        }
    };

    let devices: Vec<Device> =
        serde_json::from_str(&raw).context("Device list is not a JSON array of devices")?;

    output.verbose(&format!(
        "Looking up {} among {} discovered devices",
        path,
        devices.len()
    ));

    let report = describe_device(&devices, path);
    if report.system_id.is_none() {
        // The Windows eject helper cannot offline the disk without it.
        output.warning(&format!("No system_id known for {}", path));
    }

    // The report itself is the contract: plain JSON on stdout.
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
