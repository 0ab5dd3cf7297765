//! # calprof - Display Calibration Profile Toolkit
//!
//! Core library for exporting manual display-calibration results:
//!
//! - **ICC encoding**: serialize a [`DisplayProfile`] into a v4 display
//!   (`mntr`) profile the operating system can install, plus a JSON
//!   mirror for inspection
//! - **HDR transfer math**: PQ (SMPTE ST 2084) nits ↔ code value and
//!   HLG (BT.2100) conversions for HDR test patterns
//! - **Report analysis**: CCT estimation and before/after calibration
//!   deltas
//!
//! Everything is a pure, synchronous computation over in-memory values;
//! file writes happen only at the explicit `save_*`/`export_*` boundary
//! after encoding has fully succeeded.
//!
//! ## Quick Start
//!
//! ```no_run
//! use calprof_core::DisplayProfile;
//!
//! let mut profile = DisplayProfile::new("Calibrated Display");
//! profile.set_gamma(2.2)?;
//! profile.set_white_point(0.3127, 0.3290, 1.0)?;
//! profile.set_luminance(120.0);
//!
//! profile.save_icc("calibrated.icc")?;
//! profile.export_json("calibrated.json")?;
//! # Ok::<(), calprof_core::Error>(())
//! ```

pub mod color;
pub mod error;
pub mod hdr;
pub mod icc;
pub mod profile;
pub mod report;
pub mod transfer;

pub use color::{Chromaticity, D65, Primaries, Xyz};
pub use error::{Error, Result};
pub use hdr::{Eotf, HdrContext};
pub use icc::encoder::encode_profile;
pub use icc::tags::ToneResponse;
pub use profile::{BlackPoint, DisplayProfile, Measurement, WhitePoint};
pub use report::{
    CctEstimate, GammaComparison, WhitePointComparison, compare_gamma, compare_white_point,
    delta_uv, xy_to_cct,
};

/// Version of calprof
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
