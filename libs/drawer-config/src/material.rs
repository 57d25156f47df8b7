//! # Material Table
//!
//! Maps a material selector to its print clearance profile. Pure lookup,
//! total over the closed enumeration of supported materials.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MaterialError;

/// Snap-fit clearance relative to the sliding clearance (tighter).
const SNAP_FACTOR: f64 = 0.7;

/// Press-fit clearance relative to the sliding clearance (very tight,
/// magnets and inserts).
const PRESSFIT_FACTOR: f64 = 0.5;

/// Supported print materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// High-flow PLA, slide clearance 0.30 mm.
    HyperPla,
    /// PETG, slide clearance 0.40 mm.
    Petg,
    /// ABS, slide clearance 0.35 mm.
    Abs,
}

impl Material {
    /// Base sliding clearance (mm) for this material.
    fn base_clearance(self) -> f64 {
        match self {
            Material::HyperPla => 0.30,
            Material::Petg => 0.40,
            Material::Abs => 0.35,
        }
    }

    /// Clearance profile for this material.
    pub fn profile(self) -> ToleranceProfile {
        let base = self.base_clearance();
        ToleranceProfile {
            slide_clearance: base,
            snap_clearance: base * SNAP_FACTOR,
            pressfit_clearance: base * PRESSFIT_FACTOR,
        }
    }

    /// Canonical lowercase selector for this material.
    pub fn selector(self) -> &'static str {
        match self {
            Material::HyperPla => "hyper_pla",
            Material::Petg => "petg",
            Material::Abs => "abs",
        }
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(selector: &str) -> Result<Self, MaterialError> {
        match selector {
            "hyper_pla" => Ok(Material::HyperPla),
            "petg" => Ok(Material::Petg),
            "abs" => Ok(Material::Abs),
            other => Err(MaterialError::UnknownMaterial(other.to_string())),
        }
    }
}

/// Per-material print clearances (mm). Looked up, never mutated.
///
/// `slide_clearance` is the dominant driver of every derived gap in the
/// dimension engine; the snap and press-fit values are consumed by the
/// external feature builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceProfile {
    /// Per-side gap for drawer/rail sliding fit.
    pub slide_clearance: f64,
    /// Gap for snap-fit connections.
    pub snap_clearance: f64,
    /// Gap for press-fit pockets.
    pub pressfit_clearance: f64,
}

/// Resolves a material selector to its clearance profile.
///
/// Total function over the supported materials; fails with
/// [`MaterialError::UnknownMaterial`] for any other selector.
///
/// ## Example
///
/// ```rust
/// use drawer_config::resolve;
///
/// let profile = resolve("petg").unwrap();
/// assert_eq!(profile.slide_clearance, 0.4);
/// assert!(resolve("unknown_material").is_err());
/// ```
pub fn resolve(selector: &str) -> Result<ToleranceProfile, MaterialError> {
    Ok(selector.parse::<Material>()?.profile())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::approx_equal;

    /// Test every supported selector resolves.
    #[test]
    fn test_resolve_supported_materials() {
        assert_eq!(resolve("hyper_pla").unwrap().slide_clearance, 0.30);
        assert_eq!(resolve("petg").unwrap().slide_clearance, 0.40);
        assert_eq!(resolve("abs").unwrap().slide_clearance, 0.35);
    }

    /// Test unknown selectors fail with the offending name.
    #[test]
    fn test_resolve_unknown_material() {
        let err = resolve("unknown_material").unwrap_err();
        assert_eq!(
            err,
            MaterialError::UnknownMaterial("unknown_material".to_string())
        );
    }

    /// Selectors are case-sensitive; the web layer lowercases upstream.
    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(resolve("PETG").is_err());
    }

    /// Test snap and press-fit clearances derive from the slide clearance.
    #[test]
    fn test_profile_factors() {
        for material in [Material::HyperPla, Material::Petg, Material::Abs] {
            let profile = material.profile();
            assert!(approx_equal(
                profile.snap_clearance,
                profile.slide_clearance * 0.7
            ));
            assert!(approx_equal(
                profile.pressfit_clearance,
                profile.slide_clearance * 0.5
            ));
        }
    }

    /// Test selector round-trips through FromStr.
    #[test]
    fn test_selector_round_trip() {
        for material in [Material::HyperPla, Material::Petg, Material::Abs] {
            assert_eq!(material.selector().parse::<Material>(), Ok(material));
        }
    }
}
