//! Tests for the centralized design constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::DesignConstants;
/// let consts = DesignConstants::default();
/// assert!(consts.rail_offset > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let consts = DesignConstants::default();
    assert!(consts.validated().is_ok());
    assert!(consts.rail_offset > 0.0);
    assert!(consts.structural_min_floor > 0.0);
}

/// Validates that negative overrides are rejected with the field name.
#[test]
fn validated_rejects_negative_lengths() {
    let consts = DesignConstants {
        back_clearance: -1.0,
        ..DesignConstants::default()
    };
    assert_eq!(
        consts.validated().unwrap_err(),
        ConfigError::NegativeLength("back_clearance", -1.0)
    );
}

/// A zero structural floor minimum would let auto floors collapse.
#[test]
fn validated_rejects_zero_structural_floor() {
    let consts = DesignConstants {
        structural_min_floor: 0.0,
        ..DesignConstants::default()
    };
    assert!(consts.validated().is_err());
}

/// Zero clearances are legal overrides (e.g. resin variants).
#[test]
fn validated_accepts_zero_clearances() {
    let consts = DesignConstants {
        top_clearance: 0.0,
        back_clearance: 0.0,
        ..DesignConstants::default()
    };
    assert!(consts.validated().is_ok());
}
