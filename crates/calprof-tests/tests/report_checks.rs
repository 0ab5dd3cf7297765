//! Report analysis sanity tests
//!
//! Known-illuminant CCT values, u′v′ distance behavior, and the
//! improved/regressed verdicts for before/after comparisons.

use anyhow::Result;
use calprof_core::report::{CCT_RELIABLE_MAX, CCT_RELIABLE_MIN};
use calprof_core::{Chromaticity, D65, compare_gamma, compare_white_point, delta_uv, xy_to_cct};

const D50: Chromaticity = Chromaticity::new(0.3457, 0.3585);
const ILLUMINANT_A: Chromaticity = Chromaticity::new(0.4476, 0.4074);

#[test]
fn cct_matches_standard_illuminants() -> Result<()> {
    let d65 = xy_to_cct(D65)?;
    assert!((d65.kelvin - 6500.0).abs() < 50.0, "D65 kelvin={}", d65.kelvin);

    let d50 = xy_to_cct(D50)?;
    assert!((d50.kelvin - 5000.0).abs() < 60.0, "D50 kelvin={}", d50.kelvin);
    assert!(d50.reliable);

    let a = xy_to_cct(ILLUMINANT_A)?;
    assert!((a.kelvin - 2856.0).abs() < 100.0, "A kelvin={}", a.kelvin);
    Ok(())
}

#[test]
fn cct_outside_fitted_range_is_flagged() -> Result<()> {
    let blue_shifted = xy_to_cct(Chromaticity::new(0.25, 0.25))?;
    assert!(blue_shifted.kelvin > CCT_RELIABLE_MAX);
    assert!(!blue_shifted.reliable);

    let red_shifted = xy_to_cct(Chromaticity::new(0.50, 0.41))?;
    assert!(red_shifted.kelvin < CCT_RELIABLE_MIN, "kelvin={}", red_shifted.kelvin);
    assert!(!red_shifted.reliable);
    Ok(())
}

#[test]
fn cct_rejects_degenerate_chromaticity() {
    assert!(xy_to_cct(Chromaticity::new(0.4, 0.0)).is_err());
    assert!(xy_to_cct(Chromaticity::new(0.4, 0.1858)).is_err());
}

#[test]
fn delta_uv_is_a_distance() -> Result<()> {
    assert_eq!(delta_uv(D65, D65)?, 0.0);
    assert_eq!(delta_uv(D65, D50)?, delta_uv(D50, D65)?);

    // D65 to D50 is a clearly visible but not extreme shift
    let d = delta_uv(D65, D50)?;
    assert!(d > 0.005 && d < 0.05, "delta={d}");

    // A nearby point sits much closer than D50
    let near = Chromaticity::new(0.3130, 0.3292);
    assert!(delta_uv(D65, near)? < d / 10.0);
    Ok(())
}

#[test]
fn gamma_comparison_verdicts() {
    let fixed = compare_gamma(2.8, 2.2, 2.2);
    assert!(fixed.improved);
    assert!((fixed.delta + 0.6).abs() < 1e-12);

    let regressed = compare_gamma(2.2, 2.8, 2.2);
    assert!(!regressed.improved);
    assert!((regressed.delta - 0.6).abs() < 1e-12);

    // Equal distance from target does not count as improvement
    let sideways = compare_gamma(2.0, 2.4, 2.2);
    assert!(!sideways.improved);
}

#[test]
fn white_point_comparison_toward_d65() -> Result<()> {
    let before = Chromaticity::new(0.300, 0.315);
    let cmp = compare_white_point(before, D65, 6500.0)?;

    assert!(cmp.improved);
    assert!(cmp.delta_uv > 0.0);
    assert_eq!(cmp.delta_uv, delta_uv(before, D65)?);
    assert!((cmp.after.kelvin - 6500.0).abs() < (cmp.before.kelvin - 6500.0).abs());
    Ok(())
}

#[test]
fn white_point_comparison_away_from_target() -> Result<()> {
    let cmp = compare_white_point(D65, Chromaticity::new(0.300, 0.315), 6500.0)?;
    assert!(!cmp.improved);
    Ok(())
}

#[test]
fn white_point_comparison_propagates_degenerate_input() {
    assert!(compare_white_point(Chromaticity::new(0.4, 0.0), D65, 6500.0).is_err());
}
