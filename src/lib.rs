//! # Leakgate - Secret-Scanning Policy Gate
//!
//! A small, fast gate for automated checks: pipe text through `leakgate` and
//! the exit code tells the pipeline whether credential-like material slipped
//! into it. Also ships the removable-media metadata helper used by the
//! post-flash auto-eject reporting pipeline.
//!
//! ## Features
//!
//! - **Exit-code-as-signal**: `0` clean, `1` at least one likely secret
//! - **Fixed pattern list**: AWS access-key ids and password assignments
//! - **Placeholder aware**: documented dummy passwords never trip the gate
//! - **Device reports**: stable JSON metadata for flashed removable media
//!
//! ## Quick Start
//!
//! ```bash
//! # Gate a diff before it merges
//! git diff | leakgate
//!
//! # Describe a flashed device for the eject pipeline
//! flash-tool list --json | leakgate device describe --path /dev/sdb1
//! ```

pub mod cli;
pub mod device;
pub mod scanner;

pub use cli::{Cli, Output};
pub use scanner::SecretScanner;

/// Result type alias for Leakgate operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
