//! Color coordinate types
//!
//! This module provides:
//! - CIE XYZ tristimulus values
//! - CIE xy chromaticity coordinates
//! - Standard white point and display primary constants

pub mod chromaticity;
pub mod xyz;

pub use chromaticity::{Chromaticity, D65, Primaries};
pub use xyz::Xyz;
