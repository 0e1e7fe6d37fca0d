//! Secret scanner implementation
//!
//! This module provides the core secret scanning functionality: one pass per
//! pattern over the full blob, placeholder filtering for password values, and
//! the summary line the gate prints on failure.

use super::patterns::{PLACEHOLDER_VALUES, PatternKind, SecretPattern, detection_patterns};
use super::Finding;
use anyhow::Result;
use tracing::debug;

/// Secret scanner for detecting likely credentials in a text blob
pub struct SecretScanner {
    patterns: Vec<SecretPattern>,
}

impl SecretScanner {
    /// Create a new secret scanner with the fixed pattern list
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: detection_patterns()?,
        })
    }

    /// Scan a blob for every non-overlapping occurrence of each pattern
    ///
    /// Findings preserve pattern list order first, then match order within
    /// each pattern's pass over the blob.
    pub fn scan(&self, data: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for pattern in &self.patterns {
            for caps in pattern.regex.captures_iter(data) {
                // Full match, never just the captured value
                let matched = &caps[0];

                if pattern.kind == PatternKind::PasswordAssignment {
                    let value = normalize_password_value(&caps[1]);
                    if PLACEHOLDER_VALUES.contains(value.as_str()) {
                        debug!("Ignoring placeholder password value: {}", value);
                        continue;
                    }
                }

                debug!("{} matched: {}", pattern.name, matched);
                findings.push(Finding {
                    pattern_name: pattern.name.clone(),
                    text: matched.to_string(),
                });
            }
        }

        findings
    }
}

/// Normalize a captured password value for placeholder comparison
///
/// Lowercases, then strips one leading and one trailing quote character
/// (`'` or `"`) if present. Inner quotes are kept as-is.
fn normalize_password_value(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = lowered
        .strip_prefix(['\'', '"'])
        .unwrap_or(&lowered);
    let stripped = stripped
        .strip_suffix(['\'', '"'])
        .unwrap_or(stripped);
    stripped.to_string()
}

/// Render the single-line summary printed when the gate fails
pub fn summary_line(findings: &[Finding]) -> String {
    let texts: Vec<&str> = findings.iter().map(|f| f.text.as_str()).collect();
    format!("Potential secrets found: {}", texts.join(", "))
}
