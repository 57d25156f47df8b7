//! # Drawer Rules
//!
//! Validation over the fully derived dimension set.
//!
//! ## Architecture
//!
//! ```text
//! BaseConfig → drawer-dims (DerivedDimensions) → drawer-rules (Vec<Warning>)
//! ```
//!
//! Validation never mutates a dimension and never fails: the result is
//! data for the caller to act on. Error-severity warnings tell the caller
//! to reject the configuration before mesh construction; warning/info are
//! advisory.
//!
//! ## Example
//!
//! ```rust
//! use drawer_config::BaseConfig;
//! use drawer_dims::derive;
//! use drawer_rules::{has_errors, validate};
//!
//! let config = BaseConfig::default();
//! let dims = derive(&config).unwrap();
//! let warnings = validate(&config, &dims);
//! assert!(!has_errors(&warnings));
//! ```

pub mod rules;
pub mod warning;

// Re-export public API
pub use rules::{has_errors, validate};
pub use warning::{Severity, Warning};
