use crate::error::BitmapError;
use crate::pixel::BitDepth;

/// Header information from a BMP, read without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
    /// Stored row size in bytes, including padding.
    pub stride: usize,
    /// Absolute offset of the pixel array (`bfOffBits`).
    pub data_offset: usize,
    pub info_header_size: u32,
    /// Palette entries that a decode reads (0 for direct color).
    pub palette_len: usize,
}

impl ImageInfo {
    /// Probe BMP headers.
    ///
    /// Applies the same header checks as a full decode, so any header that
    /// probes successfully is one [`crate::decode_bmp`] will attempt.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        crate::bmp::probe(data)
    }
}
