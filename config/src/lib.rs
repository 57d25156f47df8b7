//! # Config Crate
//!
//! Centralized design constants for the drawer-box dimension pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RAIL_OFFSET, EPSILON, approx_equal};
//!
//! // Use EPSILON/approx_equal for derived-length comparisons
//! let rail_height = 2.0 + RAIL_OFFSET;
//! assert!(approx_equal(rail_height, 17.0));
//! assert!((rail_height - 17.0).abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimeters Everywhere**: Every length constant is in mm
//! - **Overridable**: `DesignConstants` snapshots the fixed lengths so
//!   product variants can adjust them without touching formulas
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
