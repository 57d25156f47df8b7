//! # Base Configuration
//!
//! Immutable user-facing parameters. The user specifies outer dimensions
//! and preferences; every internal dimension is derived downstream by the
//! `drawer-dims` crate.

use serde::{Deserialize, Serialize};

use config::constants::DEFAULT_RAIL_WIDTH;

/// Two-case thickness policy: an explicit override or automatic derivation.
///
/// Resolved exactly once at the top of the derivation pipeline so that every
/// downstream formula consumes a single scalar instead of re-deriving policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThicknessPolicy {
    /// Use the given thickness (mm) verbatim.
    Explicit(f64),
    /// Derive the thickness from the configuration.
    Auto,
}

impl ThicknessPolicy {
    /// Resolves the policy to a single scalar. `auto_value` is what the
    /// pipeline computes when no override is present.
    pub fn resolve(self, auto_value: f64) -> f64 {
        match self {
            ThicknessPolicy::Explicit(value) => value,
            ThicknessPolicy::Auto => auto_value,
        }
    }

    /// True when the caller overrode the automatic derivation.
    pub fn is_explicit(self) -> bool {
        matches!(self, ThicknessPolicy::Explicit(_))
    }
}

impl Default for ThicknessPolicy {
    fn default() -> Self {
        ThicknessPolicy::Auto
    }
}

/// Main configuration for the drawer box.
///
/// Constructed once from validated user input and immutable thereafter.
/// All lengths are millimeters. The material field is the raw selector
/// handed over by the configurator; it is resolved against the material
/// table inside `derive`, so an unknown selector surfaces there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseConfig {
    /// Outer shell width.
    pub outer_width: f64,
    /// Outer shell depth.
    pub outer_depth: f64,
    /// Outer shell height.
    pub outer_height: f64,
    /// Shell wall thickness policy.
    pub wall_thickness: ThicknessPolicy,
    /// Shell floor thickness policy.
    pub floor_thickness: ThicknessPolicy,
    /// Front panel thickness policy (Auto follows the wall thickness).
    pub front_panel_thickness: ThicknessPolicy,
    /// Rail width on each inner side wall.
    pub rail_width: f64,
    /// Material selector, e.g. `"hyper_pla"`, `"petg"`, `"abs"`.
    pub material: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            outer_width: 200.0,
            outer_depth: 220.0,
            outer_height: 80.0,
            wall_thickness: ThicknessPolicy::Auto,
            floor_thickness: ThicknessPolicy::Auto,
            front_panel_thickness: ThicknessPolicy::Auto,
            rail_width: DEFAULT_RAIL_WIDTH,
            material: "hyper_pla".to_string(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
