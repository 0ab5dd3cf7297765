//! Minimal read-back of encoded profile bytes
//!
//! Test helpers only: they panic on malformed input rather than
//! returning errors, and they parse just the fields the structural
//! tests assert on.

/// Header fields the structural tests inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFields {
    pub size: u32,
    pub version: u32,
    pub device_class: [u8; 4],
    pub color_space: [u8; 4],
    pub pcs: [u8; 4],
    pub creation_date: [u16; 6],
    pub signature: [u8; 4],
    pub rendering_intent: u32,
}

/// One tag directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    pub signature: [u8; 4],
    pub offset: u32,
    pub size: u32,
}

impl TagEntry {
    /// The tag's declared payload slice within the profile
    pub fn payload<'a>(&self, profile: &'a [u8]) -> &'a [u8] {
        &profile[self.offset as usize..(self.offset + self.size) as usize]
    }
}

pub fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(data[offset..offset + 4].try_into().unwrap())
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes(data[offset..offset + 2].try_into().unwrap())
}

fn read_4cc(data: &[u8], offset: usize) -> [u8; 4] {
    data[offset..offset + 4].try_into().unwrap()
}

/// Parse the 128-byte header
pub fn read_header(data: &[u8]) -> HeaderFields {
    assert!(data.len() >= 128, "profile shorter than header");
    HeaderFields {
        size: read_u32(data, 0),
        version: read_u32(data, 8),
        device_class: read_4cc(data, 12),
        color_space: read_4cc(data, 16),
        pcs: read_4cc(data, 20),
        creation_date: [
            read_u16(data, 24),
            read_u16(data, 26),
            read_u16(data, 28),
            read_u16(data, 30),
            read_u16(data, 32),
            read_u16(data, 34),
        ],
        signature: read_4cc(data, 36),
        rendering_intent: read_u32(data, 64),
    }
}

/// Parse the tag directory that follows the header
pub fn read_tag_table(data: &[u8]) -> Vec<TagEntry> {
    let count = read_u32(data, 128) as usize;
    (0..count)
        .map(|i| {
            let base = 132 + i * 12;
            TagEntry {
                signature: read_4cc(data, base),
                offset: read_u32(data, base + 4),
                size: read_u32(data, base + 8),
            }
        })
        .collect()
}
