//! Display Calibration Profile
//!
//! [`DisplayProfile`] is the value object a calibration workflow
//! populates and the encoder consumes: white/black point, primaries,
//! tone response, peak luminance, and optional per-patch measurements.
//! Encoding produces an immutable byte buffer; the profile itself has no
//! persistence beyond the files written at the boundary.

use serde::{Serialize, Serializer};
use std::path::Path;

use crate::color::{Chromaticity, D65, Primaries};
use crate::error::{Error, Result};
use crate::icc::encoder;
use crate::icc::tags::curve::{CURVE_TABLE_SIZE, ToneResponse, gamma_table};
use crate::icc::types::DateTimeNumber;

/// White point as chromaticity plus relative luminance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhitePoint {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "Y")]
    pub luminance: f64,
}

impl WhitePoint {
    /// The chromaticity part
    pub const fn chromaticity(&self) -> Chromaticity {
        Chromaticity::new(self.x, self.y)
    }
}

impl Default for WhitePoint {
    /// D65 at unit luminance
    fn default() -> Self {
        Self {
            x: D65.x,
            y: D65.y,
            luminance: 1.0,
        }
    }
}

/// Black point: luminance only
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BlackPoint {
    #[serde(rename = "Y")]
    pub luminance: f64,
}

/// One calibration sample: device RGB input and measured XYZ output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// Device RGB stimulus, 8-bit per channel
    pub input: [u8; 3],
    /// Measured XYZ response
    pub output: [f64; 3],
}

/// Calibration parameters for one display
///
/// Constructed with defaults (D65, sRGB primaries, gamma 2.2, 100 nits),
/// adjusted through the setters, then consumed by [`encode`](Self::encode).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayProfile {
    pub display_name: String,
    #[serde(skip)]
    pub copyright: String,
    #[serde(serialize_with = "serialize_iso8601")]
    pub creation_date: DateTimeNumber,
    pub white_point: WhitePoint,
    pub black_point: BlackPoint,
    #[serde(rename = "gamma")]
    pub tone: ToneResponse,
    pub primaries: Primaries,
    /// Peak luminance in cd/m² (nits)
    pub luminance: f64,
    pub measurements: Vec<Measurement>,
}

fn serialize_iso8601<S: Serializer>(dt: &DateTimeNumber, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&dt.iso8601())
}

impl DisplayProfile {
    /// Create a profile with calibration defaults
    ///
    /// The creation timestamp is captured here, once; encoding never
    /// reads the clock, so re-encoding is deterministic.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            copyright: String::from("Copyright 2024"),
            creation_date: DateTimeNumber::now(),
            white_point: WhitePoint::default(),
            black_point: BlackPoint::default(),
            tone: ToneResponse::Gamma(2.2),
            primaries: Primaries::SRGB,
            luminance: 100.0,
            measurements: Vec::new(),
        }
    }

    /// Set the display gamma exponent
    pub fn set_gamma(&mut self, gamma: f64) -> Result<()> {
        if !(gamma > 0.0) {
            return Err(Error::InvalidGamma(gamma));
        }
        self.tone = ToneResponse::Gamma(gamma);
        Ok(())
    }

    /// Set an explicit tone curve table
    pub fn set_tone_table(&mut self, table: Vec<u16>) -> Result<()> {
        if table.is_empty() {
            return Err(Error::EmptyCurve);
        }
        self.tone = ToneResponse::Table(table);
        Ok(())
    }

    /// Set the white point chromaticity and relative luminance
    pub fn set_white_point(&mut self, x: f64, y: f64, luminance: f64) -> Result<()> {
        if y == 0.0 {
            return Err(Error::InvalidChromaticity { x, y });
        }
        self.white_point = WhitePoint { x, y, luminance };
        Ok(())
    }

    /// Set the black point luminance
    pub fn set_black_point(&mut self, luminance: f64) {
        self.black_point = BlackPoint { luminance };
    }

    /// Set the RGB primaries
    pub fn set_primaries(&mut self, primaries: Primaries) {
        self.primaries = primaries;
    }

    /// Set the peak luminance in cd/m²
    pub fn set_luminance(&mut self, nits: f64) {
        self.luminance = nits;
    }

    /// Add a calibration measurement point
    pub fn add_measurement(&mut self, input: [u8; 3], output: [f64; 3]) {
        self.measurements.push(Measurement { input, output });
    }

    /// Per-channel tone responses for the TRC tags
    ///
    /// Without measurements all three channels share the configured
    /// response. With measurements each channel becomes a 256-entry
    /// table interpolated from its samples, falling back to the
    /// configured response outside the measured range.
    pub fn channel_responses(&self) -> Result<[ToneResponse; 3]> {
        match &self.tone {
            ToneResponse::Gamma(g) if !(*g > 0.0) => return Err(Error::InvalidGamma(*g)),
            ToneResponse::Table(t) if t.is_empty() => return Err(Error::EmptyCurve),
            _ => {}
        }
        if self.measurements.is_empty() {
            return Ok([self.tone.clone(), self.tone.clone(), self.tone.clone()]);
        }
        let curves = self.tone_curves()?;
        Ok(curves.map(ToneResponse::Table))
    }

    /// Per-channel 256-entry tone curves derived from measurements
    ///
    /// Each channel's (input, output) samples are sorted by input and
    /// linearly interpolated over the full 8-bit range.
    pub fn tone_curves(&self) -> Result<[Vec<u16>; 3]> {
        if self.measurements.is_empty() {
            let table = match &self.tone {
                ToneResponse::Gamma(g) => gamma_table(*g)?,
                ToneResponse::Table(t) if t.is_empty() => return Err(Error::EmptyCurve),
                ToneResponse::Table(t) => t.clone(),
            };
            return Ok([table.clone(), table.clone(), table]);
        }

        let mut curves: [Vec<u16>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for channel in 0..3 {
            let mut points: Vec<(u8, f64)> = self
                .measurements
                .iter()
                .map(|m| (m.input[channel], m.output[channel]))
                .collect();
            points.sort_by_key(|p| p.0);
            curves[channel] = self.interpolate_channel(&points);
        }
        Ok(curves)
    }

    fn interpolate_channel(&self, points: &[(u8, f64)]) -> Vec<u16> {
        let mut curve = Vec::with_capacity(CURVE_TABLE_SIZE);
        for i in 0..CURVE_TABLE_SIZE {
            let mut lower: Option<(u8, f64)> = None;
            let mut upper: Option<(u8, f64)> = None;
            for &(x, y) in points {
                if x as usize <= i {
                    lower = Some((x, y));
                }
                if x as usize >= i && upper.is_none() {
                    upper = Some((x, y));
                }
            }
            let output = match (lower, upper) {
                (Some(l), Some(u)) if l.0 != u.0 => {
                    let t = (i as f64 - l.0 as f64) / (u.0 as f64 - l.0 as f64);
                    l.1 + t * (u.1 - l.1)
                }
                (Some(l), _) => l.1,
                (None, Some(u)) => u.1,
                (None, None) => self.tone.eval(i as f64 / (CURVE_TABLE_SIZE - 1) as f64),
            };
            curve.push((output.clamp(0.0, 1.0) * 65535.0).round() as u16);
        }
        curve
    }

    /// Encode this profile as ICC bytes
    pub fn encode(&self) -> Result<Vec<u8>> {
        encoder::encode_profile(self)
    }

    /// JSON mirror of the profile for inspection (not re-import)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encode and write the ICC profile to a file
    ///
    /// Validation happens entirely in memory; nothing is written unless
    /// encoding succeeded.
    pub fn save_icc(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Write the JSON mirror to a file
    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
