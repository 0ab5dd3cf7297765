//! HDR transfer functions
//!
//! This module provides:
//! - SMPTE ST 2084 Perceptual Quantizer (PQ), mapping absolute luminance
//!   in cd/m² (nits) to a perceptually uniform code value in [0, 1]
//! - ITU-R BT.2100 Hybrid Log-Gamma (HLG) on normalized scene light
//!
//! The plain functions clamp out-of-domain input; the `try_` variants
//! reject it with [`Error::DomainRange`] instead. Both behaviors are
//! deterministic and side-effect free.

use crate::error::{Error, Result};

/// Maximum luminance the PQ curve encodes, in cd/m² (nits)
pub const PQ_MAX_NITS: f64 = 10000.0;

// PQ constants from SMPTE ST 2084
const M1: f64 = 0.1593017578125;
const M2: f64 = 78.84375;
const C1: f64 = 0.8359375;
const C2: f64 = 18.8515625;
const C3: f64 = 18.6875;

// The inverse denominator c2 - c3·p vanishes as p -> c2/c3 ≈ 1.0088,
// just above the valid code range. Clamp it away from zero so slightly
// out-of-range inputs stay finite.
const MIN_DENOMINATOR: f64 = 1e-10;

/// PQ encode: absolute luminance (nits) to code value in [0, 1]
///
/// Input is clamped to [0, 10000] nits; negative luminance encodes as 0.
#[inline]
pub fn nits_to_code(nits: f64) -> f64 {
    let y = (nits / PQ_MAX_NITS).clamp(0.0, 1.0);
    let yp = y.powf(M1);
    let code = ((C1 + C2 * yp) / (1.0 + C3 * yp)).powf(M2);
    code.clamp(0.0, 1.0)
}

/// PQ decode: code value in [0, 1] to absolute luminance (nits)
///
/// Exact algebraic inverse of [`nits_to_code`]; input is clamped to [0, 1].
#[inline]
pub fn code_to_nits(code: f64) -> f64 {
    let p = code.clamp(0.0, 1.0).powf(1.0 / M2);
    let num = (p - C1).max(0.0);
    let den = (C2 - C3 * p).max(MIN_DENOMINATOR);
    (num / den).powf(1.0 / M1) * PQ_MAX_NITS
}

/// Checked PQ encode: rejects luminance outside [0, 10000] nits
pub fn try_nits_to_code(nits: f64) -> Result<f64> {
    if !(0.0..=PQ_MAX_NITS).contains(&nits) {
        return Err(Error::DomainRange {
            value: nits,
            min: 0.0,
            max: PQ_MAX_NITS,
        });
    }
    Ok(nits_to_code(nits))
}

/// Checked PQ decode: rejects code values outside [0, 1]
pub fn try_code_to_nits(code: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&code) {
        return Err(Error::DomainRange {
            value: code,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(code_to_nits(code))
}

// HLG constants from ITU-R BT.2100
const HLG_A: f64 = 0.17883277;
const HLG_B: f64 = 0.28466892; // 1 - 4a
const HLG_C: f64 = 0.55991073; // 0.5 - a·ln(4a)

/// HLG OETF: normalized scene light [0, 1] to HLG signal [0, 1]
#[inline]
pub fn hlg_oetf(e: f64) -> f64 {
    if e <= 0.0 {
        0.0
    } else if e <= 1.0 / 12.0 {
        (3.0 * e).sqrt()
    } else {
        HLG_A * (12.0 * e - HLG_B).ln() + HLG_C
    }
}

/// HLG inverse OETF: HLG signal [0, 1] to normalized scene light [0, 1]
#[inline]
pub fn hlg_inverse_oetf(ep: f64) -> f64 {
    if ep <= 0.0 {
        0.0
    } else if ep <= 0.5 {
        ep * ep / 3.0
    } else {
        (((ep - HLG_C) / HLG_A).exp() + HLG_B) / 12.0
    }
}
