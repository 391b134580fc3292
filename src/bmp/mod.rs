//! BMP decoder (internal).
//!
//! Use top-level [`crate::decode_bmp`] or [`crate::DecodeRequest`].

mod decode;
mod utils;

use crate::error::BitmapError;
use crate::image::RawImage;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::log::debug;
use enough::Stop;

/// Decode BMP data to opaque RGBA8, top row first.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<RawImage, BitmapError> {
    let header = decode::parse_bmp_header(data)?;
    check_limits(limits, header.width, header.height)?;
    stop.check()?;
    let pixels = decode::decode_bmp_pixels(data, &header, stop)?;
    debug!(
        "decoded {}x{} {}-bit BMP",
        header.width,
        header.height,
        header.depth.bits()
    );
    Ok(RawImage::new(pixels, header.width, header.height))
}

/// Parse headers only.
pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, BitmapError> {
    let header = decode::parse_bmp_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        depth: header.depth,
        stride: header.stride,
        data_offset: header.data_offset,
        info_header_size: header.info_size,
        palette_len: header.palette_len,
    })
}

fn check_limits(limits: Option<&Limits>, width: u32, height: u32) -> Result<(), BitmapError> {
    if let Some(limits) = limits {
        limits.check(width, height)?;
        let out_bytes = u64::from(width) * u64::from(height) * RawImage::BYTES_PER_PIXEL;
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}
