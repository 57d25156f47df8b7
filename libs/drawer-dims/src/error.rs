//! # Derivation Errors
//!
//! Error types for the dimension derivation engine. All errors are explicit
//! and carry the offending dimension and value.
//!
//! ## Error Policy
//!
//! - NO clamping or silent defaults when a formula fails
//! - All failures name the dimension so the caller can present an
//!   actionable message
//! - Both kinds are fatal to the single `derive` call that raised them

use thiserror::Error;

use drawer_config::MaterialError;

/// Errors that can occur during dimension derivation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeriveError {
    /// Material selector did not resolve against the material table.
    #[error(transparent)]
    UnknownMaterial(#[from] MaterialError),

    /// A derived length would be non-positive, or a structural invariant
    /// is violated. The caller must adjust inputs.
    #[error("Invalid geometry: {dimension} = {value:.3} mm ({reason})")]
    InvalidGeometry {
        /// Name of the offending derived dimension.
        dimension: &'static str,
        /// The computed value that failed the check.
        value: f64,
        /// What the check required.
        reason: String,
    },
}

/// Result type alias for derivation operations.
pub type DeriveResult<T> = Result<T, DeriveError>;

// =============================================================================
// TESTS
// =============================================================================
