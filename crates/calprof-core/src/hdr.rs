//! HDR session configuration
//!
//! An [`HdrContext`] is selected once per calibration session and never
//! mutated while patterns render: peak luminance, output bit depth, the
//! container color space, and which EOTF the display expects.

use crate::transfer;

/// Electro-optical transfer function family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eotf {
    /// SMPTE ST 2084 Perceptual Quantizer (HDR10, Dolby Vision)
    Pq,
    /// ITU-R BT.2100 Hybrid Log-Gamma (broadcast)
    Hlg,
}

/// Fixed per-session HDR output configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HdrContext {
    /// Peak luminance in cd/m² (nits)
    pub peak_nits: f64,
    /// Signal bit depth (10 or 12 in practice)
    pub bit_depth: u32,
    /// Container color space tag
    pub color_space: &'static str,
    /// Transfer function the display applies
    pub eotf: Eotf,
}

impl HdrContext {
    /// HDR10: 10-bit PQ in Rec.2020
    pub const HDR10: Self = Self {
        peak_nits: 10000.0,
        bit_depth: 10,
        color_space: "rec2020",
        eotf: Eotf::Pq,
    };

    /// HDR10+: 10-bit PQ in Rec.2020 with dynamic metadata
    pub const HDR10_PLUS: Self = Self {
        peak_nits: 10000.0,
        bit_depth: 10,
        color_space: "rec2020",
        eotf: Eotf::Pq,
    };

    /// Dolby Vision: 12-bit PQ in Rec.2020
    pub const DOLBY_VISION: Self = Self {
        peak_nits: 10000.0,
        bit_depth: 12,
        color_space: "rec2020",
        eotf: Eotf::Pq,
    };

    /// HLG broadcast: 10-bit, nominal 1000 nit peak
    pub const HLG: Self = Self {
        peak_nits: 1000.0,
        bit_depth: 10,
        color_space: "rec2020",
        eotf: Eotf::Hlg,
    };

    /// Largest code value at this context's bit depth
    #[inline]
    pub const fn max_code(&self) -> u32 {
        (1u32 << self.bit_depth) - 1
    }

    /// Quantize a luminance level to a code value at this bit depth
    ///
    /// PQ encodes absolute nits; HLG encodes scene light normalized to
    /// the context's peak.
    pub fn code_value(&self, nits: f64) -> u32 {
        let signal = match self.eotf {
            Eotf::Pq => transfer::nits_to_code(nits),
            Eotf::Hlg => transfer::hlg_oetf((nits / self.peak_nits).clamp(0.0, 1.0)),
        };
        (signal * self.max_code() as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_code() {
        assert_eq!(HdrContext::HDR10.max_code(), 1023);
        assert_eq!(HdrContext::DOLBY_VISION.max_code(), 4095);
    }

    #[test]
    fn test_pq_code_value_extremes() {
        assert_eq!(HdrContext::HDR10.code_value(0.0), 0);
        assert_eq!(HdrContext::HDR10.code_value(10000.0), 1023);
        assert_eq!(HdrContext::DOLBY_VISION.code_value(10000.0), 4095);
    }

    #[test]
    fn test_pq_code_value_reference_white() {
        // 100 nits ≈ 0.508 PQ, so ≈ 520 at 10 bits
        let code = HdrContext::HDR10.code_value(100.0);
        let expected = (transfer::nits_to_code(100.0) * 1023.0).round() as u32;
        assert_eq!(code, expected);
        assert!((515..=525).contains(&code));
    }

    #[test]
    fn test_hlg_code_value_extremes() {
        assert_eq!(HdrContext::HLG.code_value(0.0), 0);
        assert_eq!(HdrContext::HLG.code_value(1000.0), 1023);
        // Above peak clamps rather than wrapping
        assert_eq!(HdrContext::HLG.code_value(4000.0), 1023);
    }
}
