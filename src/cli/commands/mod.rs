//! Command implementations for Leakgate CLI
//!
//! This module contains the actual implementations for each CLI command.
//! Each command is organized into its own module for better maintainability.

pub mod device;
pub mod scan;
pub mod version;
