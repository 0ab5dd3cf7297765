//! Calibration Report Analysis
//!
//! Pure computations over before/after measurement pairs: correlated
//! color temperature via McCamy's polynomial, color difference in the
//! CIE 1976 u′v′ plane, and improvement deltas. A report/UI layer turns
//! the returned records into human-readable output.

use crate::color::Chromaticity;
use crate::error::{Error, Result};
use serde::Serialize;

/// Lower bound of McCamy's trustworthy CCT range (illuminant A)
pub const CCT_RELIABLE_MIN: f64 = 2856.0;
/// Upper bound of McCamy's trustworthy CCT range (D65)
pub const CCT_RELIABLE_MAX: f64 = 6504.0;

// Pole of McCamy's n = (x - 0.3320) / (0.1858 - y)
const MCCAMY_Y_POLE: f64 = 0.1858;

/// Correlated color temperature estimate
///
/// `reliable` is false when the estimate falls outside the polynomial's
/// fitted range; such values should be flagged, not trusted silently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CctEstimate {
    pub kelvin: f64,
    pub reliable: bool,
}

/// Estimate correlated color temperature from xy chromaticity
///
/// McCamy's approximation:
/// n = (x − 0.3320) / (0.1858 − y), CCT = 449n³ + 3525n² + 6823.3n + 5520.33.
pub fn xy_to_cct(c: Chromaticity) -> Result<CctEstimate> {
    if c.y == 0.0 || (MCCAMY_Y_POLE - c.y).abs() < 1e-9 {
        return Err(Error::InvalidChromaticity { x: c.x, y: c.y });
    }
    let n = (c.x - 0.3320) / (MCCAMY_Y_POLE - c.y);
    let kelvin = 449.0 * n.powi(3) + 3525.0 * n.powi(2) + 6823.3 * n + 5520.33;
    Ok(CctEstimate {
        kelvin,
        reliable: (CCT_RELIABLE_MIN..=CCT_RELIABLE_MAX).contains(&kelvin),
    })
}

fn uv_prime(c: Chromaticity) -> Result<(f64, f64)> {
    let denom = -2.0 * c.x + 12.0 * c.y + 3.0;
    if denom == 0.0 {
        return Err(Error::InvalidChromaticity { x: c.x, y: c.y });
    }
    Ok((4.0 * c.x / denom, 9.0 * c.y / denom))
}

/// Color difference between two chromaticities in the u′v′ plane
///
/// u′ = 4x/(−2x+12y+3), v′ = 9y/(−2x+12y+3); returns the Euclidean
/// distance between the two projected points.
pub fn delta_uv(a: Chromaticity, b: Chromaticity) -> Result<f64> {
    let (u1, v1) = uv_prime(a)?;
    let (u2, v2) = uv_prime(b)?;
    Ok(((u2 - u1).powi(2) + (v2 - v1).powi(2)).sqrt())
}

/// Before/after gamma comparison record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GammaComparison {
    pub before: f64,
    pub after: f64,
    pub target: f64,
    pub improved: bool,
    pub delta: f64,
}

/// Compare measured gamma before and after calibration
///
/// Improved iff the post-calibration value is strictly closer to target.
pub fn compare_gamma(before: f64, after: f64, target: f64) -> GammaComparison {
    GammaComparison {
        before,
        after,
        target,
        improved: (target - after).abs() < (target - before).abs(),
        delta: after - before,
    }
}

/// Before/after white point comparison record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhitePointComparison {
    pub before: CctEstimate,
    pub after: CctEstimate,
    pub target_kelvin: f64,
    pub improved: bool,
    pub delta_uv: f64,
}

/// Compare measured white points before and after calibration
pub fn compare_white_point(
    before: Chromaticity,
    after: Chromaticity,
    target_kelvin: f64,
) -> Result<WhitePointComparison> {
    let before_cct = xy_to_cct(before)?;
    let after_cct = xy_to_cct(after)?;
    Ok(WhitePointComparison {
        before: before_cct,
        after: after_cct,
        target_kelvin,
        improved: (target_kelvin - after_cct.kelvin).abs()
            < (target_kelvin - before_cct.kelvin).abs(),
        delta_uv: delta_uv(before, after)?,
    })
}
