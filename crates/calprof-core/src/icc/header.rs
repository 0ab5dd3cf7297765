//! ICC Profile Header
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile
//! information. See ICC.1:2022 Section 7.2. This encoder always emits a
//! version 4.3 display (`mntr`) profile with an RGB data space and XYZ
//! connection space.

use super::types::{DateTimeNumber, S15Fixed16};

/// Profile file signature - must be 'acsp'
pub const PROFILE_SIGNATURE: [u8; 4] = *b"acsp";

/// Preferred CMM type written into new profiles
pub const CMM_TYPE: [u8; 4] = *b"calp";

/// Profile creator signature
pub const CREATOR: [u8; 4] = *b"calp";

/// Profile version 4.3.0.0
pub const PROFILE_VERSION: u32 = 0x0430_0000;

/// Header length in bytes
pub const HEADER_SIZE: usize = 128;

/// PCS illuminant at header offset 68
///
/// The canonical ICC raw encoding of the D50 connection-space illuminant
/// (X=0.9642, Y=1.0, Z=0.8249).
pub const PCS_ILLUMINANT: [S15Fixed16; 3] = [
    S15Fixed16::from_raw(0x0000_F6D6),
    S15Fixed16::from_raw(0x0001_0000),
    S15Fixed16::from_raw(0x0000_D32D),
];

/// ICC Profile Class (Device Class)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileClass {
    /// Display device (monitor)
    #[default]
    Display,
    /// Input device (scanner, camera)
    Input,
    /// Output device (printer)
    Output,
    /// Color space conversion
    ColorSpace,
}

impl ProfileClass {
    /// The 4-character class signature
    pub const fn signature(&self) -> [u8; 4] {
        match self {
            Self::Display => *b"mntr",
            Self::Input => *b"scnr",
            Self::Output => *b"prtr",
            Self::ColorSpace => *b"spac",
        }
    }
}

/// ICC Color Space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// RGB
    Rgb,
    /// XYZ (connection space)
    Xyz,
    /// Grayscale
    Gray,
}

impl ColorSpace {
    /// The 4-character color space signature
    pub const fn signature(&self) -> [u8; 4] {
        match self {
            Self::Rgb => *b"RGB ",
            Self::Xyz => *b"XYZ ",
            Self::Gray => *b"GRAY",
        }
    }
}

/// ICC Rendering Intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingIntent {
    /// Perceptual - best for photographs
    #[default]
    Perceptual,
    /// Relative colorimetric - preserves in-gamut colors
    RelativeColorimetric,
    /// Saturation - maintains saturation
    Saturation,
    /// Absolute colorimetric - preserves white point
    AbsoluteColorimetric,
}

impl RenderingIntent {
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Perceptual => 0,
            Self::RelativeColorimetric => 1,
            Self::Saturation => 2,
            Self::AbsoluteColorimetric => 3,
        }
    }
}

/// ICC Profile Header fields that vary per profile
///
/// Flags, manufacturer, model, attributes, and the profile ID stay zero,
/// as is conventional for freshly written display profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileHeader {
    /// Device class (display for calibration profiles)
    pub device_class: ProfileClass,
    /// Color space of device data
    pub color_space: ColorSpace,
    /// Profile connection space
    pub pcs: ColorSpace,
    /// Date and time the profile was created
    pub creation_date: DateTimeNumber,
    /// Primary platform signature
    pub platform: [u8; 4],
    /// Rendering intent
    pub rendering_intent: RenderingIntent,
}

impl Default for ProfileHeader {
    fn default() -> Self {
        Self {
            device_class: ProfileClass::Display,
            color_space: ColorSpace::Rgb,
            pcs: ColorSpace::Xyz,
            creation_date: DateTimeNumber::default(),
            platform: *b"MSFT",
            rendering_intent: RenderingIntent::Perceptual,
        }
    }
}

impl ProfileHeader {
    /// Encode the 128-byte header, big-endian
    ///
    /// The total-size field at bytes 0..4 is left zero; assembly patches
    /// it once the full profile length is known.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut h = [0u8; HEADER_SIZE];
        h[4..8].copy_from_slice(&CMM_TYPE);
        h[8..12].copy_from_slice(&PROFILE_VERSION.to_be_bytes());
        h[12..16].copy_from_slice(&self.device_class.signature());
        h[16..20].copy_from_slice(&self.color_space.signature());
        h[20..24].copy_from_slice(&self.pcs.signature());
        h[24..36].copy_from_slice(&self.creation_date.to_bytes());
        h[36..40].copy_from_slice(&PROFILE_SIGNATURE);
        h[40..44].copy_from_slice(&self.platform);
        h[64..68].copy_from_slice(&self.rendering_intent.to_u32().to_be_bytes());
        h[68..72].copy_from_slice(&PCS_ILLUMINANT[0].to_be_bytes());
        h[72..76].copy_from_slice(&PCS_ILLUMINANT[1].to_be_bytes());
        h[76..80].copy_from_slice(&PCS_ILLUMINANT[2].to_be_bytes());
        h[80..84].copy_from_slice(&CREATOR);
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_fixed_fields() {
        let h = ProfileHeader::default().encode();
        assert_eq!(&h[0..4], &[0, 0, 0, 0]); // size patched later
        assert_eq!(&h[8..12], &0x0430_0000u32.to_be_bytes());
        assert_eq!(&h[12..16], b"mntr");
        assert_eq!(&h[16..20], b"RGB ");
        assert_eq!(&h[20..24], b"XYZ ");
        assert_eq!(&h[36..40], b"acsp");
        assert_eq!(&h[64..68], &[0, 0, 0, 0]); // perceptual
    }

    #[test]
    fn test_encode_illuminant() {
        let h = ProfileHeader::default().encode();
        assert_eq!(&h[68..72], &[0x00, 0x00, 0xF6, 0xD6]);
        assert_eq!(&h[72..76], &[0x00, 0x01, 0x00, 0x00]);
        assert_eq!(&h[76..80], &[0x00, 0x00, 0xD3, 0x2D]);
        // Values decode to D50
        assert!((PCS_ILLUMINANT[0].to_f64() - 0.9642).abs() < 0.001);
        assert!((PCS_ILLUMINANT[2].to_f64() - 0.8249).abs() < 0.001);
    }

    #[test]
    fn test_encode_creation_date() {
        let header = ProfileHeader {
            creation_date: DateTimeNumber {
                year: 2024,
                month: 12,
                day: 31,
                hour: 23,
                minute: 59,
                second: 58,
            },
            ..Default::default()
        };
        let h = header.encode();
        assert_eq!(&h[24..26], &2024u16.to_be_bytes());
        assert_eq!(&h[26..28], &12u16.to_be_bytes());
        assert_eq!(&h[34..36], &58u16.to_be_bytes());
    }

    #[test]
    fn test_class_signatures() {
        assert_eq!(ProfileClass::Display.signature(), *b"mntr");
        assert_eq!(ColorSpace::Rgb.signature(), *b"RGB ");
        assert_eq!(RenderingIntent::AbsoluteColorimetric.to_u32(), 3);
    }
}
