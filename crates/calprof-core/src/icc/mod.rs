//! ICC Profile Encoding
//!
//! Serializes a [`DisplayProfile`](crate::profile::DisplayProfile) into a
//! binary ICC/ICM profile that operating-system color management can
//! install for a calibrated display.
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag directory listing signature, offset, and length per tag
//! 3. Tag payloads, each 4-byte aligned
//!
//! This encoder writes version 4.3 display (`mntr`) profiles with the
//! RGB data space, XYZ connection space, and the tag set display
//! calibration needs: `desc`, `wtpt`/`bkpt`, colorants, per-channel
//! TRCs, `cprt`, `dmnd`, and `lumi`.

pub mod encoder;
pub mod header;
pub mod tags;
pub mod types;

pub use encoder::{build_tags, encode_profile, layout_tag_table};
pub use header::{ColorSpace, ProfileClass, ProfileHeader, RenderingIntent};
pub use types::{DateTimeNumber, S15Fixed16, TagSignature, TypeSignature, XyzNumber};
