//! # Validation Rules
//!
//! Each rule is an independent predicate over `(BaseConfig,
//! DerivedDimensions)` producing zero or one warning. Rules never mutate
//! a dimension and never depend on each other; the aggregate result is
//! the union of triggered warnings sorted by severity then rule id.

use config::constants::{
    MAX_RAIL_WIDTH_FRACTION, MAX_WALL, MIN_DRAWER_VOLUME_CM3, MIN_DRAWER_WALL, MIN_FINGER_OPENING,
    MIN_WALL, OUTER_DEPTH_RANGE, OUTER_HEIGHT_RANGE, OUTER_WIDTH_RANGE, SLIDE_CLEARANCE_BAND,
};
use drawer_config::{resolve, BaseConfig};
use drawer_dims::DerivedDimensions;

use crate::warning::Warning;

type Rule = fn(&BaseConfig, &DerivedDimensions) -> Option<Warning>;

/// Every rule in the set. Order here is irrelevant; `validate` sorts the
/// triggered warnings deterministically.
const RULES: &[Rule] = &[
    wall_below_minimum,
    wall_above_maximum,
    drawer_wall_below_minimum,
    floor_thinner_than_wall,
    slide_clearance_outside_band,
    rail_width_fraction,
    drawer_volume_minimum,
    finger_access,
    outer_width_range,
    outer_depth_range,
    outer_height_range,
];

/// Runs every rule against the configuration and its derived dimensions.
///
/// Pure and order-insensitive; the result is sorted by severity rank then
/// stable rule identifier.
pub fn validate(config: &BaseConfig, derived: &DerivedDimensions) -> Vec<Warning> {
    let mut warnings: Vec<Warning> = RULES
        .iter()
        .filter_map(|rule| rule(config, derived))
        .collect();
    warnings.sort_by(|a, b| a.severity.cmp(&b.severity).then_with(|| a.rule.cmp(b.rule)));
    warnings
}

/// True when any triggered warning carries error severity, meaning the
/// caller should refuse to hand the dimension set to mesh construction.
pub fn has_errors(warnings: &[Warning]) -> bool {
    warnings
        .iter()
        .any(|warning| warning.severity == crate::warning::Severity::Error)
}

// =============================================================================
// RULES
// =============================================================================

fn wall_below_minimum(_config: &BaseConfig, derived: &DerivedDimensions) -> Option<Warning> {
    (derived.wall_thickness < MIN_WALL).then(|| {
        Warning::error(
            "wall-below-minimum",
            format!(
                "Wall thickness {:.1} mm is below the printable minimum {:.1} mm",
                derived.wall_thickness, MIN_WALL
            ),
        )
    })
}

fn wall_above_maximum(_config: &BaseConfig, derived: &DerivedDimensions) -> Option<Warning> {
    (derived.wall_thickness > MAX_WALL).then(|| {
        Warning::warning(
            "wall-above-maximum",
            format!(
                "Wall thickness {:.1} mm exceeds {:.1} mm; material waste dominates",
                derived.wall_thickness, MAX_WALL
            ),
        )
    })
}

fn drawer_wall_below_minimum(
    _config: &BaseConfig,
    derived: &DerivedDimensions,
) -> Option<Warning> {
    (derived.drawer_wall_thickness < MIN_DRAWER_WALL).then(|| {
        Warning::error(
            "drawer-wall-below-minimum",
            format!(
                "Drawer wall {:.1} mm is below the structural minimum {:.1} mm",
                derived.drawer_wall_thickness, MIN_DRAWER_WALL
            ),
        )
    })
}

fn floor_thinner_than_wall(_config: &BaseConfig, derived: &DerivedDimensions) -> Option<Warning> {
    // Only reachable with an explicit floor override; the auto policy
    // already floors at the wall thickness.
    (derived.floor_thickness < derived.wall_thickness).then(|| {
        Warning::warning(
            "floor-thinner-than-wall",
            format!(
                "Explicit floor {:.1} mm is thinner than the {:.1} mm wall",
                derived.floor_thickness, derived.wall_thickness
            ),
        )
    })
}

fn slide_clearance_outside_band(
    config: &BaseConfig,
    _derived: &DerivedDimensions,
) -> Option<Warning> {
    let slide = resolve(&config.material).ok()?.slide_clearance;
    let (lo, hi) = SLIDE_CLEARANCE_BAND;
    (slide < lo || slide > hi).then(|| {
        Warning::warning(
            "slide-clearance-outside-band",
            format!(
                "Slide clearance {:.2} mm is outside the recommended {:.2}-{:.2} mm band",
                slide, lo, hi
            ),
        )
    })
}

fn rail_width_fraction(config: &BaseConfig, _derived: &DerivedDimensions) -> Option<Warning> {
    let limit = config.outer_width * MAX_RAIL_WIDTH_FRACTION;
    (config.rail_width > limit).then(|| {
        Warning::warning(
            "rail-width-fraction",
            format!(
                "Rail width {:.1} mm exceeds {:.0}% of the outer width ({:.1} mm)",
                config.rail_width,
                MAX_RAIL_WIDTH_FRACTION * 100.0,
                limit
            ),
        )
    })
}

fn drawer_volume_minimum(_config: &BaseConfig, derived: &DerivedDimensions) -> Option<Warning> {
    let volume = derived.drawer_inner_volume_cm3();
    (volume < MIN_DRAWER_VOLUME_CM3).then(|| {
        Warning::warning(
            "drawer-volume-minimum",
            format!(
                "Usable drawer volume {:.0} cm3 is below the useful minimum {:.0} cm3",
                volume, MIN_DRAWER_VOLUME_CM3
            ),
        )
    })
}

fn finger_access(_config: &BaseConfig, derived: &DerivedDimensions) -> Option<Warning> {
    (derived.front_opening_height < MIN_FINGER_OPENING).then(|| {
        Warning::warning(
            "finger-access",
            format!(
                "Front opening height {:.1} mm leaves less than {:.0} mm for finger access",
                derived.front_opening_height, MIN_FINGER_OPENING
            ),
        )
    })
}

fn outer_width_range(config: &BaseConfig, _derived: &DerivedDimensions) -> Option<Warning> {
    range_warning("outer-width-range", "width", config.outer_width, OUTER_WIDTH_RANGE)
}

fn outer_depth_range(config: &BaseConfig, _derived: &DerivedDimensions) -> Option<Warning> {
    range_warning("outer-depth-range", "depth", config.outer_depth, OUTER_DEPTH_RANGE)
}

fn outer_height_range(config: &BaseConfig, _derived: &DerivedDimensions) -> Option<Warning> {
    range_warning("outer-height-range", "height", config.outer_height, OUTER_HEIGHT_RANGE)
}

fn range_warning(
    rule: &'static str,
    axis: &str,
    value: f64,
    (lo, hi): (f64, f64),
) -> Option<Warning> {
    (value < lo || value > hi).then(|| {
        Warning::info(
            rule,
            format!("Outer {axis} {value:.0} mm is outside the supported {lo:.0}-{hi:.0} mm range"),
        )
    })
}
