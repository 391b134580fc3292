//! Per-depth pixel readers.
//!
//! Each reader takes one stored row (already located in the file), an
//! image-space x coordinate and the palette, and returns the opaque color.
//! `None` means the row is too short or the palette index is out of range.

use rgb::RGBA8;

use crate::pixel::BitDepth;

pub(crate) type ReadPixel = fn(row: &[u8], x: usize, palette: &[RGBA8]) -> Option<RGBA8>;

/// Pick the reader for `depth`. Called once per image.
pub(crate) fn read_pixel_fn(depth: BitDepth) -> ReadPixel {
    match depth {
        BitDepth::One => read_1bit,
        BitDepth::Four => read_4bit,
        BitDepth::Eight => read_8bit,
        BitDepth::TwentyFour => read_24bit,
        BitDepth::ThirtyTwo => read_32bit,
    }
}

// Bit 0 of each byte is the leftmost pixel.
fn read_1bit(row: &[u8], x: usize, palette: &[RGBA8]) -> Option<RGBA8> {
    let byte = *row.get(x >> 3)?;
    let index = (byte >> (x & 7)) & 1;
    palette.get(usize::from(index)).copied()
}

fn read_4bit(row: &[u8], x: usize, palette: &[RGBA8]) -> Option<RGBA8> {
    let byte = *row.get(x >> 1)?;
    let index = if x & 1 == 0 { byte >> 4 } else { byte & 0x0f };
    palette.get(usize::from(index)).copied()
}

fn read_8bit(row: &[u8], x: usize, palette: &[RGBA8]) -> Option<RGBA8> {
    let index = *row.get(x)?;
    palette.get(usize::from(index)).copied()
}

fn read_24bit(row: &[u8], x: usize, _palette: &[RGBA8]) -> Option<RGBA8> {
    let off = x.checked_mul(3)?;
    let bgr = row.get(off..off + 3)?;
    Some(RGBA8::new(bgr[2], bgr[1], bgr[0], 255))
}

// The fourth byte is never surfaced as alpha.
fn read_32bit(row: &[u8], x: usize, _palette: &[RGBA8]) -> Option<RGBA8> {
    let off = x.checked_mul(4)?;
    let bgrx = row.get(off..off + 4)?;
    Some(RGBA8::new(bgrx[2], bgrx[1], bgrx[0], 255))
}
