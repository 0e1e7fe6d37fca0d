//! Secret detection for Leakgate
//!
//! This module provides the core scanning functionality: a fixed, ordered
//! list of detection patterns applied to one in-memory text blob, with
//! placeholder filtering for the password-assignment pattern.

pub mod core;
pub mod patterns;

#[cfg(test)]
mod tests;

pub use self::core::{SecretScanner, summary_line};
pub use patterns::{PLACEHOLDER_VALUES, PatternKind, SecretPattern, detection_patterns};

/// A matched likely secret, destined for the human-readable summary line
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Name of the pattern that matched
    pub pattern_name: String,

    /// The full matched text (pattern plus value for password assignments)
    pub text: String,
}
