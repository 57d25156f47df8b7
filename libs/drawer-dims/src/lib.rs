//! # Drawer Dims
//!
//! Dimension derivation engine for the two-part parametric enclosure
//! (fixed shell plus sliding drawer).
//!
//! ## Architecture
//!
//! ```text
//! BaseConfig → drawer-dims (DerivedDimensions) → drawer-rules (Warnings)
//! ```
//!
//! The engine is pure and stateless: no I/O, no shared mutable state, no
//! suspension points. Every call receives its own `BaseConfig` and returns
//! its own `DerivedDimensions`, so concurrent callers need no locking and
//! repeated calls with identical input are bit-for-bit idempotent.
//!
//! ## Example
//!
//! ```rust
//! use drawer_config::BaseConfig;
//! use drawer_dims::derive;
//!
//! let dims = derive(&BaseConfig::default()).unwrap();
//! assert!(dims.drawer_final_width < dims.space_between_rails);
//! ```

pub mod dims;
pub mod error;

mod engine;

// Re-export public API
pub use config::constants::DesignConstants;
pub use dims::DerivedDimensions;
pub use error::{DeriveError, DeriveResult};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Derive every manufacturing dimension from a base configuration using
/// the default design constants.
///
/// ## Returns
///
/// `Result<DerivedDimensions, DeriveError>` - the full dimension set, or
/// `UnknownMaterial` / `InvalidGeometry` naming the offending input.
///
/// ## Example
///
/// ```rust
/// use drawer_config::BaseConfig;
/// use drawer_dims::derive;
///
/// let dims = derive(&BaseConfig::default()).unwrap();
/// assert!(dims.inner_width > 0.0);
/// ```
pub fn derive(config: &drawer_config::BaseConfig) -> DeriveResult<DerivedDimensions> {
    engine::run(config, &DesignConstants::default())
}

/// Derive with an explicit design-constant snapshot, for product variants
/// that override the fixed lengths (rail offset, clearances, top lip).
pub fn derive_with(
    config: &drawer_config::BaseConfig,
    constants: &DesignConstants,
) -> DeriveResult<DerivedDimensions> {
    engine::run(config, constants)
}
