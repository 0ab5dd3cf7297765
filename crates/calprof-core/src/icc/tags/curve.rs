//! Curve Tag Encoding
//!
//! Tone reproduction curves (TRC) use the `curv` type: a u32 entry count
//! followed by big-endian u16 values. A count of zero means the identity
//! curve. See ICC.1:2022 Section 10.6.

use crate::error::{Error, Result};
use crate::icc::types::TypeSignature;
use serde::Serialize;

/// Number of entries in a gamma-derived curve table
pub const CURVE_TABLE_SIZE: usize = 256;

/// Tone response of a display channel
///
/// Serializes untagged so the JSON mirror shows a bare gamma number or a
/// bare value array, matching the mirror's historical shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToneResponse {
    /// Simple power-law response
    Gamma(f64),
    /// Explicit lookup table, conventionally monotone non-decreasing
    Table(Vec<u16>),
}

impl ToneResponse {
    /// Evaluate the response at input x in [0, 1]
    ///
    /// Tables are linearly interpolated between entries.
    pub fn eval(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Self::Gamma(g) => x.powf(*g),
            Self::Table(table) => {
                if table.is_empty() {
                    return x;
                }
                if table.len() == 1 {
                    return table[0] as f64 / 65535.0;
                }
                let pos = x * (table.len() - 1) as f64;
                let idx = pos.floor() as usize;
                if idx >= table.len() - 1 {
                    return table[table.len() - 1] as f64 / 65535.0;
                }
                let frac = pos - idx as f64;
                let v0 = table[idx] as f64;
                let v1 = table[idx + 1] as f64;
                (v0 + frac * (v1 - v0)) / 65535.0
            }
        }
    }
}

/// Build a 256-entry curve table from a gamma exponent
///
/// value[i] = round((i/255)^gamma × 65535). Gamma must be positive.
pub fn gamma_table(gamma: f64) -> Result<Vec<u16>> {
    if !(gamma > 0.0) {
        return Err(Error::InvalidGamma(gamma));
    }
    Ok((0..CURVE_TABLE_SIZE)
        .map(|i| {
            let normalized = i as f64 / (CURVE_TABLE_SIZE - 1) as f64;
            (normalized.powf(gamma) * 65535.0).round() as u16
        })
        .collect())
}

/// Encode a tone response as a `curv` tag payload
///
/// Gamma exactly 1.0 encodes as the identity curve (count 0, no
/// entries); any other gamma expands to a 256-entry table. Explicit
/// tables encode verbatim and must be non-empty.
pub fn encode_curve_tag(tone: &ToneResponse) -> Result<Vec<u8>> {
    match tone {
        ToneResponse::Gamma(g) if !(*g > 0.0) => Err(Error::InvalidGamma(*g)),
        ToneResponse::Gamma(g) if *g == 1.0 => Ok(encode_table(&[])),
        ToneResponse::Gamma(g) => Ok(encode_table(&gamma_table(*g)?)),
        ToneResponse::Table(t) if t.is_empty() => Err(Error::EmptyCurve),
        ToneResponse::Table(t) => Ok(encode_table(t)),
    }
}

fn encode_table(values: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + values.len() * 2);
    out.extend_from_slice(&TypeSignature::CURVE.as_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&(values.len() as u32).to_be_bytes());
    for v in values {
        out.extend_from_slice(&v.to_be_bytes());
    }
    out
}
