//! ICC Profile Basic Types
//!
//! Binary primitives shared by the header and tag encoders. Everything in
//! an ICC profile is big-endian; these types own the byte conversions so
//! the encoders above them deal only in values.

use crate::color::Xyz;
use crate::error::{Error, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// ICC Tag Signature (4-byte ASCII code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSignature(pub u32);

impl TagSignature {
    /// Create from 4 ASCII characters
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    /// The 4 raw signature bytes
    pub const fn as_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Convert to ASCII string (lossy for non-ASCII bytes)
    pub fn to_string(&self) -> String {
        String::from_utf8_lossy(&self.as_bytes()).into_owned()
    }

    // Tags this encoder emits
    pub const DESC: Self = Self::from_bytes(*b"desc");
    pub const MEDIA_WHITE: Self = Self::from_bytes(*b"wtpt");
    pub const MEDIA_BLACK: Self = Self::from_bytes(*b"bkpt");
    pub const RED_COLORANT: Self = Self::from_bytes(*b"rXYZ");
    pub const GREEN_COLORANT: Self = Self::from_bytes(*b"gXYZ");
    pub const BLUE_COLORANT: Self = Self::from_bytes(*b"bXYZ");
    pub const RED_TRC: Self = Self::from_bytes(*b"rTRC");
    pub const GREEN_TRC: Self = Self::from_bytes(*b"gTRC");
    pub const BLUE_TRC: Self = Self::from_bytes(*b"bTRC");
    pub const COPYRIGHT: Self = Self::from_bytes(*b"cprt");
    pub const DMND: Self = Self::from_bytes(*b"dmnd");
    pub const LUMINANCE: Self = Self::from_bytes(*b"lumi");
}

/// Type signatures for ICC tag data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSignature(pub u32);

impl TypeSignature {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const fn as_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub const XYZ: Self = Self::from_bytes(*b"XYZ ");
    pub const CURVE: Self = Self::from_bytes(*b"curv");
    pub const TEXT: Self = Self::from_bytes(*b"text");
    pub const DESC: Self = Self::from_bytes(*b"desc");
}

/// Largest value representable as s15Fixed16 (32767 + 65535/65536)
pub const S15_FIXED16_MAX: f64 = 32768.0 - 1.0 / 65536.0;

/// s15Fixed16Number - 16.16 fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct S15Fixed16(pub i32);

impl S15Fixed16 {
    /// Create from raw i32 value
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Create from f64, rejecting values outside the representable range
    ///
    /// The fractional part truncates toward zero (value × 65536 as i32),
    /// matching how display profiles are conventionally written.
    pub fn try_from_f64(val: f64) -> Result<Self> {
        if !(-32768.0..=S15_FIXED16_MAX).contains(&val) {
            return Err(Error::EncodingOverflow(val));
        }
        Ok(Self((val * 65536.0) as i32))
    }

    /// Convert to f64
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 65536.0
    }

    /// Big-endian encoding
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Parse from big-endian bytes
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(i32::from_be_bytes(bytes))
    }
}

/// XYZNumber - ICC XYZ value (3 × s15Fixed16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XyzNumber {
    pub x: S15Fixed16,
    pub y: S15Fixed16,
    pub z: S15Fixed16,
}

impl XyzNumber {
    /// Convert from an XYZ value, rejecting unrepresentable components
    pub fn try_from_xyz(xyz: Xyz) -> Result<Self> {
        Ok(Self {
            x: S15Fixed16::try_from_f64(xyz.x)?,
            y: S15Fixed16::try_from_f64(xyz.y)?,
            z: S15Fixed16::try_from_f64(xyz.z)?,
        })
    }

    /// Encode as 12 big-endian bytes
    pub fn to_bytes(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        out[0..4].copy_from_slice(&self.x.to_be_bytes());
        out[4..8].copy_from_slice(&self.y.to_be_bytes());
        out[8..12].copy_from_slice(&self.z.to_be_bytes());
        out
    }

    /// Parse from 12 bytes (big-endian)
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 12 {
            return None;
        }
        Some(Self {
            x: S15Fixed16::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            y: S15Fixed16::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            z: S15Fixed16::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        })
    }

    /// Convert back to an XYZ value
    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(self.x.to_f64(), self.y.to_f64(), self.z.to_f64())
    }
}

/// dateTimeNumber - ICC date/time (six big-endian u16 fields)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeNumber {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
}

impl DateTimeNumber {
    /// Encode as 12 big-endian bytes
    pub fn to_bytes(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        for (i, field) in [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ]
        .into_iter()
        .enumerate()
        {
            out[i * 2..i * 2 + 2].copy_from_slice(&field.to_be_bytes());
        }
        out
    }

    /// Convert from seconds since the Unix epoch (UTC)
    pub fn from_unix_seconds(secs: u64) -> Self {
        let days = (secs / 86400) as i64;
        let rem = secs % 86400;
        let (year, month, day) = civil_from_days(days);
        Self {
            year: year as u16,
            month: month as u16,
            day: day as u16,
            hour: (rem / 3600) as u16,
            minute: (rem % 3600 / 60) as u16,
            second: (rem % 60) as u16,
        }
    }

    /// Capture the current UTC time
    ///
    /// The encoder itself never reads the clock; callers capture a
    /// timestamp once and pass it in.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_seconds(secs)
    }

    /// ISO-8601 representation, used by the JSON mirror
    pub fn iso8601(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// Gregorian calendar date from days since 1970-01-01 (Hinnant's
// civil_from_days algorithm).
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (y + (m <= 2) as i64, m, d)
}
