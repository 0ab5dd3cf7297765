//! CIE XYZ Color Space
//!
//! XYZ is the profile connection space for display profiles: white point,
//! black point, and colorant tags are all stored as XYZ values.

/// CIE 1931 XYZ tristimulus values
///
/// Y represents luminance. For colorant and white point tags Y is relative
/// (1.0 = media white); for the luminance tag Y is absolute cd/m².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ value
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert to xyY chromaticity coordinates
    ///
    /// Returns (x, y, Y) where x and y are chromaticity and Y is luminance.
    /// A black (all-zero) value maps to (0, 0, 0).
    #[inline]
    pub fn to_xyy(&self) -> (f64, f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            (self.x / sum, self.y / sum, self.y)
        } else {
            (0.0, 0.0, 0.0)
        }
    }

    /// Check if approximately equal to another XYZ value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let xyz = Xyz::new(0.5, 0.6, 0.7);
        assert_eq!(xyz.x, 0.5);
        assert_eq!(xyz.y, 0.6);
        assert_eq!(xyz.z, 0.7);
    }

    #[test]
    fn test_to_xyy() {
        let xyz = Xyz::new(0.9505, 1.0, 1.0890);
        let (x, y, big_y) = xyz.to_xyy();
        assert!((x - 0.3127).abs() < 0.001);
        assert!((y - 0.3290).abs() < 0.001);
        assert!((big_y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_xyy_black() {
        assert_eq!(Xyz::default().to_xyy(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_array_conversion() {
        let arr = [0.1, 0.2, 0.3];
        let xyz: Xyz = arr.into();
        assert_eq!(xyz.to_array(), arr);
    }
}
