//! # Derived Dimensions
//!
//! The flat set of named scalar lengths handed to the mesh-building and
//! presentation collaborators. Fully determined by `BaseConfig` and the
//! resolved `ToleranceProfile`; recomputed from scratch on every call and
//! never partially mutated.

use serde::{Deserialize, Serialize};

/// Every manufacturing-consistent dimension of the enclosure (mm).
///
/// No hidden state and no lifecycle: this is a pure function's return
/// value. External layers serialize it as a key/value map of named lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedDimensions {
    // --- Shell cavity ---
    /// Clear width between the shell side walls.
    pub inner_width: f64,
    /// Clear depth between the shell front and back walls.
    pub inner_depth: f64,
    /// Clear height above the shell floor.
    pub inner_height: f64,

    // --- Rail placement ---
    /// Rail underside height measured from the shell outside bottom.
    pub rail_height_from_floor: f64,
    /// Clear width between the opposing rail faces.
    pub space_between_rails: f64,

    // --- Drawer envelope ---
    /// Drawer body width before the self-centering grooves are cut.
    pub drawer_outer_width: f64,
    /// Drawer width that actually contacts the rails after the groove cut.
    pub drawer_final_width: f64,
    /// Drawer outer depth.
    pub drawer_depth: f64,
    /// Drawer outer height.
    pub drawer_outer_height: f64,

    // --- Drawer cavity ---
    /// Usable width inside the drawer.
    pub drawer_inner_width: f64,
    /// Usable depth inside the drawer.
    pub drawer_inner_depth: f64,
    /// Usable height inside the drawer.
    pub drawer_inner_height: f64,

    // --- Front opening ---
    /// Clear aperture width in the shell front.
    pub front_opening_width: f64,
    /// Clear aperture height below the retained top lip.
    pub front_opening_height: f64,

    // --- Resolved thicknesses ---
    /// Shell wall thickness after policy resolution.
    pub wall_thickness: f64,
    /// Shell floor thickness after policy resolution.
    pub floor_thickness: f64,
    /// Drawer wall thickness.
    pub drawer_wall_thickness: f64,
    /// Drawer floor thickness.
    pub drawer_floor_thickness: f64,
}

impl DerivedDimensions {
    /// Usable drawer volume in cm3, the figure the rules engine checks
    /// against the minimum useful threshold.
    pub fn drawer_inner_volume_cm3(&self) -> f64 {
        self.drawer_inner_width * self.drawer_inner_depth * self.drawer_inner_height / 1000.0
    }

    /// Human-readable summary for the presentation layer.
    pub fn summary(&self) -> String {
        format!(
            "Shell cavity: {:.1} x {:.1} x {:.1} mm\n\
             Drawer: {:.1} x {:.1} x {:.1} mm (contact width {:.1} mm)\n\
             Usable space: {:.1} x {:.1} x {:.1} mm ({:.0} cm3)\n\
             Front opening: {:.1} x {:.1} mm\n\
             Wall {:.1} mm, floor {:.1} mm",
            self.inner_width,
            self.inner_depth,
            self.inner_height,
            self.drawer_outer_width,
            self.drawer_depth,
            self.drawer_outer_height,
            self.drawer_final_width,
            self.drawer_inner_width,
            self.drawer_inner_depth,
            self.drawer_inner_height,
            self.drawer_inner_volume_cm3(),
            self.front_opening_width,
            self.front_opening_height,
            self.wall_thickness,
            self.floor_thickness,
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use drawer_config::BaseConfig;

    use crate::derive;

    #[test]
    fn test_volume_in_cubic_centimeters() {
        let dims = derive(&BaseConfig::default()).unwrap();
        let mm3 = dims.drawer_inner_width * dims.drawer_inner_depth * dims.drawer_inner_height;
        assert!((dims.drawer_inner_volume_cm3() - mm3 / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_mentions_key_dimensions() {
        let dims = derive(&BaseConfig::default()).unwrap();
        let text = dims.summary();
        assert!(text.contains("Shell cavity"));
        assert!(text.contains("Front opening"));
    }
}
