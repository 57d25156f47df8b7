//! Centralized design values shared across the drawer-box pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals. All lengths are millimeters.

use std::fmt;

/// Numerical tolerance used when comparing derived lengths.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Vertical clearance reserved below the rail for the structural floor and
/// debris fallout. The drawer sits on the rail, not on the shell floor, so
/// this offset participates in the vertical budget.
///
/// # Examples
/// ```
/// use config::constants::RAIL_OFFSET;
/// assert!(RAIL_OFFSET > 10.0);
/// ```
pub const RAIL_OFFSET: f64 = 15.0;

/// Gap reserved behind the drawer so it never bottoms against the back wall.
///
/// # Examples
/// ```
/// use config::constants::BACK_CLEARANCE;
/// assert!(BACK_CLEARANCE >= 3.0);
/// ```
pub const BACK_CLEARANCE: f64 = 5.0;

/// Headroom between the drawer top and the shell ceiling.
///
/// # Examples
/// ```
/// use config::constants::TOP_CLEARANCE;
/// assert!(TOP_CLEARANCE >= 2.0);
/// ```
pub const TOP_CLEARANCE: f64 = 5.0;

/// Per-side stock added to the drawer body so the self-centering V-groove
/// cut returns the contact width to the intended sliding width.
///
/// # Examples
/// ```
/// use config::constants::GROOVE_ALLOWANCE;
/// assert!(GROOVE_ALLOWANCE > 0.0);
/// ```
pub const GROOVE_ALLOWANCE: f64 = 2.0;

/// Lip retained at the top of the front opening for structural continuity
/// of the shell roof.
///
/// # Examples
/// ```
/// use config::constants::TOP_LIP;
/// assert!(TOP_LIP >= 4.0);
/// ```
pub const TOP_LIP: f64 = 6.0;

/// Minimum floor thickness that is structurally printable regardless of the
/// chosen wall thickness.
///
/// # Examples
/// ```
/// use config::constants::STRUCTURAL_MIN_FLOOR;
/// assert!(STRUCTURAL_MIN_FLOOR >= 1.2);
/// ```
pub const STRUCTURAL_MIN_FLOOR: f64 = 1.6;

/// Hard lower ratio between floor and wall thickness. An explicit floor
/// override below `FLOOR_TO_WALL_MIN_RATIO * wall` is rejected.
pub const FLOOR_TO_WALL_MIN_RATIO: f64 = 0.8;

/// FDM nozzle width; auto wall thickness steps are multiples of it.
pub const NOZZLE_WIDTH: f64 = 0.4;

// =============================================================================
// AUTO WALL THICKNESS STEPS
// =============================================================================

/// Footprint area (cm2) above which the medium wall step applies.
pub const AUTO_WALL_AREA_MEDIUM_CM2: f64 = 300.0;

/// Footprint area (cm2) above which the thick wall step applies.
pub const AUTO_WALL_AREA_LARGE_CM2: f64 = 600.0;

/// Wall thickness for small footprints.
pub const AUTO_WALL_THIN: f64 = 2.0;

/// Wall thickness for medium footprints.
pub const AUTO_WALL_MEDIUM: f64 = 2.4;

/// Wall thickness for large footprints.
pub const AUTO_WALL_THICK: f64 = 3.2;

// =============================================================================
// INPUT RANGES AND RULE THRESHOLDS
// =============================================================================

/// Valid outer width range (mm). Widths below the minimum leave no room
/// for a usable drawer; widths above it risk warping.
pub const OUTER_WIDTH_RANGE: (f64, f64) = (60.0, 400.0);

/// Valid outer depth range (mm).
pub const OUTER_DEPTH_RANGE: (f64, f64) = (80.0, 400.0);

/// Valid outer height range (mm).
pub const OUTER_HEIGHT_RANGE: (f64, f64) = (30.0, 200.0);

/// Minimum printable wall thickness for all supported materials.
pub const MIN_WALL: f64 = 1.6;

/// Maximum sensible wall thickness before material waste dominates.
pub const MAX_WALL: f64 = 4.8;

/// Minimum drawer wall thickness for structural integrity.
pub const MIN_DRAWER_WALL: f64 = 1.2;

/// Recommended sliding clearance band shared by all supported materials.
pub const SLIDE_CLEARANCE_BAND: (f64, f64) = (0.15, 0.5);

/// Rail width must not exceed this fraction of the outer width.
pub const MAX_RAIL_WIDTH_FRACTION: f64 = 0.1;

/// Minimum usable drawer volume (cm3) before the box stops being useful.
pub const MIN_DRAWER_VOLUME_CM3: f64 = 30.0;

/// Minimum front opening height (mm) for finger access to the drawer.
pub const MIN_FINGER_OPENING: f64 = 20.0;

/// Default rail width (mm) used by `BaseConfig::default`.
pub const DEFAULT_RAIL_WIDTH: f64 = 5.0;

// =============================================================================
// DESIGN CONSTANTS SNAPSHOT
// =============================================================================

/// Immutable snapshot of the fixed design lengths consumed by the derivation
/// engine. Product variants override individual fields and validate the
/// result once; the engine itself never re-checks them.
///
/// # Examples
/// ```
/// use config::constants::DesignConstants;
/// let consts = DesignConstants::default();
/// assert_eq!(consts.rail_offset, 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConstants {
    /// Vertical clearance reserved below the rail.
    pub rail_offset: f64,
    /// Gap behind the drawer.
    pub back_clearance: f64,
    /// Headroom below the shell ceiling.
    pub top_clearance: f64,
    /// Per-side groove stock on the drawer body.
    pub groove_allowance: f64,
    /// Lip above the front opening.
    pub top_lip: f64,
    /// Structural floor minimum.
    pub structural_min_floor: f64,
}

impl DesignConstants {
    /// Validates an overridden snapshot. Every length must be non-negative
    /// and the structural floor minimum strictly positive.
    ///
    /// # Examples
    /// ```
    /// use config::constants::DesignConstants;
    /// let variant = DesignConstants { top_lip: 4.0, ..DesignConstants::default() };
    /// assert!(variant.validated().is_ok());
    /// ```
    pub fn validated(self) -> Result<Self, ConfigError> {
        let lengths = [
            ("rail_offset", self.rail_offset),
            ("back_clearance", self.back_clearance),
            ("top_clearance", self.top_clearance),
            ("groove_allowance", self.groove_allowance),
            ("top_lip", self.top_lip),
        ];
        for (name, value) in lengths {
            if value < 0.0 {
                return Err(ConfigError::NegativeLength(name, value));
            }
        }
        if self.structural_min_floor <= 0.0 {
            return Err(ConfigError::NegativeLength(
                "structural_min_floor",
                self.structural_min_floor,
            ));
        }
        Ok(self)
    }
}

impl Default for DesignConstants {
    fn default() -> Self {
        Self {
            rail_offset: RAIL_OFFSET,
            back_clearance: BACK_CLEARANCE,
            top_clearance: TOP_CLEARANCE,
            groove_allowance: GROOVE_ALLOWANCE,
            top_lip: TOP_LIP,
            structural_min_floor: STRUCTURAL_MIN_FLOOR,
        }
    }
}

/// Error returned when an overridden design constant is invalid.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a design length is negative (or zero where a strictly
    /// positive value is required).
    NegativeLength(&'static str, f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeLength(name, value) => {
                write!(f, "design constant {name} must not be negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// FLOAT HELPERS
// =============================================================================

/// Compares two lengths within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(185.4, 186.0 - 0.6));
/// ```
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks whether a length is zero within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(1.0e-12));
/// ```
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
