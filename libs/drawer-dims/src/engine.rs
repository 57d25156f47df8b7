//! # Derivation Engine
//!
//! Computes every member of [`DerivedDimensions`] in a fixed topological
//! order. Each formula consumes explicit arguments computed earlier in the
//! pipeline, never an implicit shared-object field, so a clearance can only
//! be applied where it is written down once.
//!
//! ## Pipeline
//!
//! ```text
//! thicknesses → shell cavity → rail placement → drawer envelope
//!             → drawer cavity → front opening
//! ```

use config::constants::{
    DesignConstants, AUTO_WALL_AREA_LARGE_CM2, AUTO_WALL_AREA_MEDIUM_CM2, AUTO_WALL_MEDIUM,
    AUTO_WALL_THICK, AUTO_WALL_THIN, FLOOR_TO_WALL_MIN_RATIO,
};
use drawer_config::{resolve, BaseConfig};

use crate::dims::DerivedDimensions;
use crate::error::{DeriveError, DeriveResult};

/// Checks a derived length is strictly positive; the engine rejects
/// impossible geometry instead of clamping.
fn positive(dimension: &'static str, value: f64) -> DeriveResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DeriveError::InvalidGeometry {
            dimension,
            value,
            reason: "must be strictly positive".to_string(),
        })
    }
}

/// Auto wall thickness: monotonic step function of the outer footprint
/// area. Larger footprints get thicker walls; every step is a nozzle-width
/// multiple.
pub(crate) fn auto_wall_thickness(outer_width: f64, outer_depth: f64) -> f64 {
    let area_cm2 = outer_width * outer_depth / 100.0;
    if area_cm2 > AUTO_WALL_AREA_LARGE_CM2 {
        AUTO_WALL_THICK
    } else if area_cm2 > AUTO_WALL_AREA_MEDIUM_CM2 {
        AUTO_WALL_MEDIUM
    } else {
        AUTO_WALL_THIN
    }
}

/// Resolves the floor policy. Auto floors never resolve thinner than the
/// wall; an explicit override below `0.8 * wall` is structurally unsound
/// and rejected.
fn resolve_floor(config: &BaseConfig, wall: f64, consts: &DesignConstants) -> DeriveResult<f64> {
    let floor = config
        .floor_thickness
        .resolve(consts.structural_min_floor.max(wall));
    if floor < FLOOR_TO_WALL_MIN_RATIO * wall {
        return Err(DeriveError::InvalidGeometry {
            dimension: "floor_thickness",
            value: floor,
            reason: format!(
                "floor must be at least {:.1} mm for a {:.1} mm wall",
                FLOOR_TO_WALL_MIN_RATIO * wall,
                wall
            ),
        });
    }
    positive("floor_thickness", floor)
}

pub(crate) fn run(
    config: &BaseConfig,
    consts: &DesignConstants,
) -> DeriveResult<DerivedDimensions> {
    let profile = resolve(&config.material)?;
    let slide = profile.slide_clearance;

    // Thickness policies resolve once, at the top of the pipeline.
    let wall_thickness = positive(
        "wall_thickness",
        config
            .wall_thickness
            .resolve(auto_wall_thickness(config.outer_width, config.outer_depth)),
    )?;
    let floor_thickness = resolve_floor(config, wall_thickness, consts)?;
    let drawer_wall_thickness = wall_thickness;
    let drawer_floor_thickness = floor_thickness;
    let front_panel_thickness = positive(
        "front_panel_thickness",
        config.front_panel_thickness.resolve(wall_thickness),
    )?;

    // Shell cavity.
    let inner_width = positive(
        "inner_width",
        config.outer_width - 2.0 * wall_thickness,
    )?;
    let inner_depth = positive(
        "inner_depth",
        config.outer_depth - 2.0 * wall_thickness,
    )?;
    let inner_height = positive("inner_height", config.outer_height - floor_thickness)?;

    // Rail placement. A non-positive gap here is the 2*rail_width >=
    // inner_width invariant violation.
    let rail_height_from_floor = positive(
        "rail_height_from_floor",
        floor_thickness + consts.rail_offset,
    )?;
    let space_between_rails = positive(
        "space_between_rails",
        inner_width - 2.0 * config.rail_width,
    )?;

    // Drawer width budget: the sliding clearance is subtracted exactly once.
    // The groove allowance is stock the self-centering cut removes again, so
    // the post-cut contact width stays drawer_final_width.
    let drawer_final_width = positive(
        "drawer_final_width",
        space_between_rails - 2.0 * slide,
    )?;
    let drawer_outer_width = drawer_final_width + 2.0 * consts.groove_allowance;

    // Drawer depth and height. The drawer sits on the rail, not on the
    // shell floor, so the height budget subtracts rail_height_from_floor.
    let drawer_depth = positive(
        "drawer_depth",
        inner_depth - consts.back_clearance - front_panel_thickness,
    )?;
    let drawer_outer_height = positive(
        "drawer_outer_height",
        config.outer_height - rail_height_from_floor - consts.top_clearance - slide,
    )?;

    // Drawer cavity: walls reduce width and depth, the floor reduces height.
    let drawer_inner_width = positive(
        "drawer_inner_width",
        drawer_final_width - 2.0 * drawer_wall_thickness,
    )?;
    let drawer_inner_depth = positive(
        "drawer_inner_depth",
        drawer_depth - 2.0 * drawer_wall_thickness,
    )?;
    let drawer_inner_height = positive(
        "drawer_inner_height",
        drawer_outer_height - drawer_floor_thickness,
    )?;

    // Front opening, derived last.
    let front_opening_width = inner_width;
    let front_opening_height = positive(
        "front_opening_height",
        inner_height - consts.top_lip,
    )?;

    Ok(DerivedDimensions {
        inner_width,
        inner_depth,
        inner_height,
        rail_height_from_floor,
        space_between_rails,
        drawer_outer_width,
        drawer_final_width,
        drawer_depth,
        drawer_outer_height,
        drawer_inner_width,
        drawer_inner_depth,
        drawer_inner_height,
        front_opening_width,
        front_opening_height,
        wall_thickness,
        floor_thickness,
        drawer_wall_thickness,
        drawer_floor_thickness,
    })
}

// =============================================================================
// TESTS
// =============================================================================
