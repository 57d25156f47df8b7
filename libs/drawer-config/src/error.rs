//! # Material Errors
//!
//! Error types for material selector resolution.

use thiserror::Error;

/// Errors raised by the material table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialError {
    /// Selector does not name a supported material. Caller error,
    /// surfaced immediately and never retried.
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_selector() {
        let err = MaterialError::UnknownMaterial("wood".to_string());
        assert!(err.to_string().contains("Unknown material"));
        assert!(err.to_string().contains("wood"));
    }

    /// Errors cross thread boundaries in concurrent configurators.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MaterialError>();
    }
}
