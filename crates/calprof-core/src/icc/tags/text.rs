//! Text Tag Encoding
//!
//! Two text layouts are emitted:
//! - `text`: null-terminated ASCII (copyright, device strings)
//! - `desc`: the v2 profileDescription layout with its mandatory empty
//!   Unicode and ScriptCode sub-blocks (broadly compatible, and what
//!   display calibration tools conventionally write)
//!
//! See ICC.1:2022 Sections 10.24 (text) and ICC.1:2001-04 6.5.17 (desc).

use crate::error::{Error, Result};
use crate::icc::types::TypeSignature;

// The ScriptCode block carries a fixed 67-byte Macintosh description
// field, zeroed when unused.
const SCRIPTCODE_DESC_LEN: usize = 67;

fn ascii_bytes<'a>(text: &'a str, field: &'static str) -> Result<&'a [u8]> {
    if !text.is_ascii() {
        return Err(Error::NonAsciiText { field });
    }
    Ok(text.as_bytes())
}

fn pad_to_boundary(out: &mut Vec<u8>) {
    while out.len() % 4 != 0 {
        out.push(0);
    }
}

/// Encode a `text` tag payload: ASCII bytes, null terminator, zero
/// padding to a 4-byte boundary
pub fn encode_text_tag(text: &str, field: &'static str) -> Result<Vec<u8>> {
    let ascii = ascii_bytes(text, field)?;
    let mut out = Vec::with_capacity(8 + ascii.len() + 4);
    out.extend_from_slice(&TypeSignature::TEXT.as_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(ascii);
    out.push(0);
    pad_to_boundary(&mut out);
    Ok(out)
}

/// Encode a `desc` tag payload
///
/// Layout: u32 ASCII count (including the null), the ASCII description,
/// an empty Unicode block (language code and count both zero), and an
/// empty ScriptCode block (code, count, and the fixed description field
/// all zero), padded to a 4-byte boundary.
pub fn encode_desc_tag(text: &str, field: &'static str) -> Result<Vec<u8>> {
    let ascii = ascii_bytes(text, field)?;
    let mut out = Vec::with_capacity(12 + ascii.len() + 1 + 8 + 3 + SCRIPTCODE_DESC_LEN + 4);
    out.extend_from_slice(&TypeSignature::DESC.as_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&((ascii.len() + 1) as u32).to_be_bytes());
    out.extend_from_slice(ascii);
    out.push(0);
    // Unicode language code and character count, both empty
    out.extend_from_slice(&[0u8; 8]);
    // ScriptCode code (u16), count (u8), Macintosh description
    out.extend_from_slice(&[0u8; 2]);
    out.push(0);
    out.extend_from_slice(&[0u8; SCRIPTCODE_DESC_LEN]);
    pad_to_boundary(&mut out);
    Ok(out)
}
