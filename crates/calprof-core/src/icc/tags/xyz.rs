//! XYZ Tag Encoding
//!
//! The XYZType holds one XYZ value encoded as three s15Fixed16 numbers.
//! Used for the white point, black point, colorant, and luminance tags.
//! See ICC.1:2022 Section 10.31.

use crate::color::Xyz;
use crate::error::Result;
use crate::icc::types::{TypeSignature, XyzNumber};

/// Encoded XYZ tag length: signature + reserved + 3 × s15Fixed16
pub const XYZ_TAG_SIZE: usize = 20;

/// Encode a single XYZ value as an `XYZ ` tag payload
///
/// Chromaticity inputs must be converted to XYZ first (see
/// [`Chromaticity::to_xyz`](crate::color::Chromaticity::to_xyz)), so an
/// invalid white point fails before any tag bytes exist. Components
/// outside the s15Fixed16 range fail with `EncodingOverflow`.
pub fn encode_xyz_tag(xyz: Xyz) -> Result<Vec<u8>> {
    let number = XyzNumber::try_from_xyz(xyz)?;
    let mut out = Vec::with_capacity(XYZ_TAG_SIZE);
    out.extend_from_slice(&TypeSignature::XYZ.as_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&number.to_bytes());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::D65;
    use crate::error::Error;
    use crate::icc::types::S15Fixed16;

    #[test]
    fn test_encode_layout() {
        let tag = encode_xyz_tag(Xyz::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(tag.len(), XYZ_TAG_SIZE);
        assert_eq!(&tag[0..4], b"XYZ ");
        assert_eq!(&tag[4..8], &[0, 0, 0, 0]);
        assert_eq!(&tag[8..12], &[0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_d65_decodes_back() {
        let tag = encode_xyz_tag(D65.to_xyz(1.0).unwrap()).unwrap();
        let decoded = XyzNumber::from_bytes(&tag[8..20]).unwrap().to_xyz();
        assert!((decoded.x - 0.9505).abs() < 1e-3);
        assert!((decoded.y - 1.0).abs() < 1e-3);
        assert!((decoded.z - 1.0891).abs() < 1e-3);
    }

    #[test]
    fn test_overflow_rejected() {
        let result = encode_xyz_tag(Xyz::new(0.0, 40000.0, 0.0));
        assert!(matches!(result, Err(Error::EncodingOverflow(_))));
    }

    #[test]
    fn test_negative_components_encode() {
        let tag = encode_xyz_tag(Xyz::new(-1.5, 0.0, 0.0)).unwrap();
        let x = S15Fixed16::from_be_bytes([tag[8], tag[9], tag[10], tag[11]]);
        assert!((x.to_f64() + 1.5).abs() < 1e-4);
    }
}
