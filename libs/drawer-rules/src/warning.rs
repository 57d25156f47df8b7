//! Severity-ranked validation warnings.

use serde::Serialize;

/// Severity of a validation warning.
///
/// Declaration order doubles as sort order: errors first, advisory
/// information last. `Error` means the configuration should be rejected
/// before any mesh construction is attempted; `Warning` and `Info` are
/// advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single triggered validation rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub severity: Severity,
    /// Stable rule identifier, used for deterministic ordering and for
    /// suppressing individual rules in the presentation layer.
    pub rule: &'static str,
    pub message: String,
}

impl Warning {
    pub fn new(severity: Severity, rule: &'static str, message: String) -> Self {
        Self {
            severity,
            rule,
            message,
        }
    }

    pub fn error(rule: &'static str, message: String) -> Self {
        Self::new(Severity::Error, rule, message)
    }

    pub fn warning(rule: &'static str, message: String) -> Self {
        Self::new(Severity::Warning, rule, message)
    }

    pub fn info(rule: &'static str, message: String) -> Self {
        Self::new(Severity::Info, rule, message)
    }
}

// =============================================================================
// TESTS
// =============================================================================
