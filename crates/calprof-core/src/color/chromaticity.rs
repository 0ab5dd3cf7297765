//! CIE xy Chromaticity Coordinates
//!
//! Chromaticity is the 2D projection of XYZ that discards luminance.
//! Calibration measurements report white points and primaries in xy;
//! the ICC encoder converts them to XYZ on demand.

use crate::color::Xyz;
use crate::error::{Error, Result};
use serde::Serialize;

/// CIE 1931 xy chromaticity coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    /// Create a new chromaticity pair
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to XYZ at the given luminance Y
    ///
    /// X = (x/y)·Y, Z = ((1−x−y)/y)·Y. Fails with
    /// [`Error::InvalidChromaticity`] when y is zero, before any profile
    /// bytes are produced.
    pub fn to_xyz(&self, luminance: f64) -> Result<Xyz> {
        if self.y == 0.0 {
            return Err(Error::InvalidChromaticity {
                x: self.x,
                y: self.y,
            });
        }
        Ok(Xyz::new(
            (self.x / self.y) * luminance,
            luminance,
            ((1.0 - self.x - self.y) / self.y) * luminance,
        ))
    }
}

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Correlated Color Temperature: ~6504K.
/// Default white point for sRGB and most display calibration targets.
pub const D65: Chromaticity = Chromaticity::new(0.3127, 0.3290);

/// RGB display primaries as chromaticity coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Primaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
}

impl Primaries {
    /// sRGB / Rec.709 primaries
    pub const SRGB: Self = Self {
        red: Chromaticity::new(0.640, 0.330),
        green: Chromaticity::new(0.300, 0.600),
        blue: Chromaticity::new(0.150, 0.060),
    };
}

impl Default for Primaries {
    fn default() -> Self {
        Self::SRGB
    }
}
