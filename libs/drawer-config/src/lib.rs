//! # Drawer Config
//!
//! Validated user input for the drawer-box dimension pipeline.
//!
//! ## Architecture
//!
//! ```text
//! BaseConfig + ToleranceProfile → drawer-dims (DerivedDimensions) → drawer-rules
//! ```
//!
//! The user specifies only outer dimensions and preferences; everything
//! else is derived downstream. The material table here is a pure lookup:
//! a selector resolves to a [`ToleranceProfile`] or fails with
//! [`MaterialError::UnknownMaterial`].
//!
//! ## Example
//!
//! ```rust
//! use drawer_config::{resolve, BaseConfig};
//!
//! let config = BaseConfig::default();
//! let profile = resolve(&config.material).unwrap();
//! assert_eq!(profile.slide_clearance, 0.3);
//! ```

pub mod base;
pub mod error;
pub mod material;

// Re-export public API
pub use base::{BaseConfig, ThicknessPolicy};
pub use error::MaterialError;
pub use material::{resolve, Material, ToleranceProfile};
