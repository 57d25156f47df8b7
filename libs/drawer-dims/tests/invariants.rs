//! Property checks over the valid input space: idempotence, budget
//! closure, clearance accounting, and positivity.

use config::constants::{approx_equal, DesignConstants, TOP_CLEARANCE};
use drawer_config::{resolve, BaseConfig, ThicknessPolicy};
use drawer_dims::{derive, derive_with, DerivedDimensions};

/// A spread of configurations inside the declared valid ranges.
fn valid_configs() -> Vec<BaseConfig> {
    let mut configs = vec![BaseConfig::default()];
    for (width, depth, height) in [
        (60.0, 80.0, 30.0),
        (100.0, 100.0, 40.0),
        (200.0, 220.0, 80.0),
        (300.0, 350.0, 120.0),
        (400.0, 400.0, 200.0),
    ] {
        for material in ["hyper_pla", "petg", "abs"] {
            configs.push(BaseConfig {
                outer_width: width,
                outer_depth: depth,
                outer_height: height,
                material: material.to_string(),
                ..BaseConfig::default()
            });
        }
    }
    configs.push(BaseConfig {
        wall_thickness: ThicknessPolicy::Explicit(2.0),
        floor_thickness: ThicknessPolicy::Explicit(2.4),
        front_panel_thickness: ThicknessPolicy::Explicit(3.0),
        ..BaseConfig::default()
    });
    configs
}

fn all_lengths(dims: &DerivedDimensions) -> [(&'static str, f64); 18] {
    [
        ("inner_width", dims.inner_width),
        ("inner_depth", dims.inner_depth),
        ("inner_height", dims.inner_height),
        ("rail_height_from_floor", dims.rail_height_from_floor),
        ("space_between_rails", dims.space_between_rails),
        ("drawer_outer_width", dims.drawer_outer_width),
        ("drawer_final_width", dims.drawer_final_width),
        ("drawer_depth", dims.drawer_depth),
        ("drawer_outer_height", dims.drawer_outer_height),
        ("drawer_inner_width", dims.drawer_inner_width),
        ("drawer_inner_depth", dims.drawer_inner_depth),
        ("drawer_inner_height", dims.drawer_inner_height),
        ("front_opening_width", dims.front_opening_width),
        ("front_opening_height", dims.front_opening_height),
        ("wall_thickness", dims.wall_thickness),
        ("floor_thickness", dims.floor_thickness),
        ("drawer_wall_thickness", dims.drawer_wall_thickness),
        ("drawer_floor_thickness", dims.drawer_floor_thickness),
    ]
}

#[test]
fn derive_is_idempotent() {
    for config in valid_configs() {
        let first = derive(&config).unwrap();
        let second = derive(&config).unwrap();
        assert_eq!(first, second, "non-identical output for {config:?}");
    }
}

#[test]
fn slide_clearance_applied_exactly_once() {
    for config in valid_configs() {
        let dims = derive(&config).unwrap();
        let slide = resolve(&config.material).unwrap().slide_clearance;
        assert!(
            approx_equal(dims.space_between_rails - dims.drawer_final_width, 2.0 * slide),
            "clearance miscounted for {config:?}"
        );
    }
}

#[test]
fn vertical_budget_closes() {
    for config in valid_configs() {
        let dims = derive(&config).unwrap();
        let slide = resolve(&config.material).unwrap().slide_clearance;
        let budget = dims.drawer_outer_height + dims.rail_height_from_floor + TOP_CLEARANCE + slide;
        assert!(
            approx_equal(budget, config.outer_height),
            "vertical budget open for {config:?}: {budget} vs {}",
            config.outer_height
        );
    }
}

#[test]
fn vertical_budget_closes_with_variant_constants() {
    let consts = DesignConstants {
        rail_offset: 12.0,
        top_clearance: 3.0,
        ..DesignConstants::default()
    };
    let config = BaseConfig::default();
    let dims = derive_with(&config, &consts).unwrap();
    let slide = resolve(&config.material).unwrap().slide_clearance;
    assert!(approx_equal(
        dims.drawer_outer_height + dims.rail_height_from_floor + consts.top_clearance + slide,
        config.outer_height
    ));
}

#[test]
fn all_derived_lengths_positive() {
    for config in valid_configs() {
        let dims = derive(&config).unwrap();
        for (name, value) in all_lengths(&dims) {
            assert!(value > 0.0, "{name} = {value} for {config:?}");
        }
    }
}

#[test]
fn auto_floor_never_thinner_than_wall() {
    for config in valid_configs() {
        if config.floor_thickness.is_explicit() {
            continue;
        }
        let dims = derive(&config).unwrap();
        assert!(
            dims.floor_thickness >= dims.wall_thickness,
            "auto floor thinner than wall for {config:?}"
        );
    }
}

#[test]
fn drawer_fits_between_rails_strictly() {
    for config in valid_configs() {
        let dims = derive(&config).unwrap();
        assert!(dims.drawer_final_width < dims.space_between_rails);
        assert!(dims.drawer_outer_width > dims.drawer_final_width);
    }
}

#[test]
fn drawer_cavity_uses_matching_axes() {
    // Depth comes from depth, height from height: a transposition would
    // show up as cavity depth exceeding the drawer body depth or cavity
    // height exceeding the body height.
    for config in valid_configs() {
        let dims = derive(&config).unwrap();
        assert!(approx_equal(
            dims.drawer_depth - dims.drawer_inner_depth,
            2.0 * dims.drawer_wall_thickness
        ));
        assert!(approx_equal(
            dims.drawer_outer_height - dims.drawer_inner_height,
            dims.drawer_floor_thickness
        ));
    }
}

#[test]
fn front_opening_matches_cavity_width() {
    for config in valid_configs() {
        let dims = derive(&config).unwrap();
        assert!(approx_equal(dims.front_opening_width, dims.inner_width));
        assert!(dims.front_opening_height < dims.inner_height);
    }
}
