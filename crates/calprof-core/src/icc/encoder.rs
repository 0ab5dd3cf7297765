//! Profile Assembly
//!
//! Builds the full profile byte sequence: 128-byte header, tag directory,
//! then each tag payload 4-byte aligned. Offsets in the directory point at
//! the exact start of each payload; declared lengths are the unpadded
//! payload sizes. The total-length field at byte 0 is patched last, so a
//! returned buffer is always complete and internally consistent.

use crate::color::Xyz;
use crate::error::Result;
use crate::icc::header::{HEADER_SIZE, ProfileHeader};
use crate::icc::tags::{encode_curve_tag, encode_desc_tag, encode_text_tag, encode_xyz_tag};
use crate::icc::types::TagSignature;
use crate::profile::DisplayProfile;

/// Size of one tag directory entry: signature, offset, length
pub const TAG_ENTRY_SIZE: usize = 12;

/// Round a length up to the next 4-byte boundary
#[inline]
pub(crate) const fn aligned_len(len: usize) -> usize {
    (len + 3) & !3
}

/// Build all tag payloads for a profile, in directory order
///
/// Order matches what calibration tools conventionally write: the
/// description first, then colorimetry, tone curves, and the optional
/// text and luminance tags. All validation happens here; no byte of the
/// final profile exists until every payload has encoded successfully.
pub fn build_tags(profile: &DisplayProfile) -> Result<Vec<(TagSignature, Vec<u8>)>> {
    let white = profile
        .white_point
        .chromaticity()
        .to_xyz(profile.white_point.luminance)?;
    // Black point and luminance are absolute XYZ values, not chromaticities
    let black = Xyz::new(0.0, profile.black_point.luminance, 0.0);
    let luminance = Xyz::new(0.0, profile.luminance, 0.0);
    let red = profile.primaries.red.to_xyz(1.0)?;
    let green = profile.primaries.green.to_xyz(1.0)?;
    let blue = profile.primaries.blue.to_xyz(1.0)?;
    let trc = profile.channel_responses()?;

    let mut tags = Vec::with_capacity(12);
    tags.push((
        TagSignature::DESC,
        encode_desc_tag(&profile.display_name, "display_name")?,
    ));
    tags.push((TagSignature::MEDIA_WHITE, encode_xyz_tag(white)?));
    tags.push((TagSignature::MEDIA_BLACK, encode_xyz_tag(black)?));
    tags.push((TagSignature::RED_COLORANT, encode_xyz_tag(red)?));
    tags.push((TagSignature::GREEN_COLORANT, encode_xyz_tag(green)?));
    tags.push((TagSignature::BLUE_COLORANT, encode_xyz_tag(blue)?));
    tags.push((TagSignature::RED_TRC, encode_curve_tag(&trc[0])?));
    tags.push((TagSignature::GREEN_TRC, encode_curve_tag(&trc[1])?));
    tags.push((TagSignature::BLUE_TRC, encode_curve_tag(&trc[2])?));
    tags.push((
        TagSignature::COPYRIGHT,
        encode_text_tag(&profile.copyright, "copyright")?,
    ));
    tags.push((
        TagSignature::DMND,
        encode_text_tag(&profile.display_name, "display_name")?,
    ));
    tags.push((TagSignature::LUMINANCE, encode_xyz_tag(luminance)?));
    Ok(tags)
}

/// Encode the tag directory: u32 tag count, then one 12-byte entry per
/// tag (signature, offset from file start, unpadded payload length)
///
/// The first payload starts right after the directory; each subsequent
/// offset advances by the previous payload length rounded up to a 4-byte
/// boundary, so every offset is itself 4-byte aligned.
pub fn layout_tag_table(tags: &[(TagSignature, Vec<u8>)]) -> Vec<u8> {
    let mut table = Vec::with_capacity(4 + tags.len() * TAG_ENTRY_SIZE);
    table.extend_from_slice(&(tags.len() as u32).to_be_bytes());

    let mut offset = HEADER_SIZE + 4 + tags.len() * TAG_ENTRY_SIZE;
    for (signature, data) in tags {
        table.extend_from_slice(&signature.as_bytes());
        table.extend_from_slice(&(offset as u32).to_be_bytes());
        table.extend_from_slice(&(data.len() as u32).to_be_bytes());
        offset += aligned_len(data.len());
    }
    table
}

/// Assemble a complete ICC profile for a display calibration
///
/// Concatenates header, directory, and aligned payloads, then patches
/// bytes 0..4 with the final total length (big-endian u32).
pub fn encode_profile(profile: &DisplayProfile) -> Result<Vec<u8>> {
    let tags = build_tags(profile)?;
    let header = ProfileHeader {
        creation_date: profile.creation_date,
        ..Default::default()
    };

    let mut out = Vec::with_capacity(1024);
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(&layout_tag_table(&tags));
    for (_, data) in &tags {
        out.extend_from_slice(data);
        out.resize(aligned_len(out.len()), 0);
    }

    let total = out.len() as u32;
    out[0..4].copy_from_slice(&total.to_be_bytes());
    Ok(out)
}
