//! Tag Payload Encoders
//!
//! Each encoder produces a complete tag payload: the 4-character type
//! signature, 4 reserved zero bytes, then the type-specific data.
//! Payload lengths are what the tag directory declares; alignment
//! padding between payloads is added during assembly and never counted.

pub mod curve;
pub mod text;
pub mod xyz;

pub use curve::{CURVE_TABLE_SIZE, ToneResponse, encode_curve_tag, gamma_table};
pub use text::{encode_desc_tag, encode_text_tag};
pub use xyz::encode_xyz_tag;
