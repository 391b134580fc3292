//! BMP header parsing and pixel decoding.
//!
//! Handles the uncompressed BITMAPINFOHEADER subset: 1/4/8-bit palette
//! images and 24/32-bit direct color, stored bottom-up. Header fields past
//! the first 40 bytes are skipped, including the compression field, so an
//! RLE file is read as if it were raw rows.

use alloc::vec::Vec;

use enough::Stop;
use rgb::RGBA8;

use super::utils::read_pixel_fn;
use crate::error::BitmapError;
use crate::log::trace;
use crate::pixel::BitDepth;

/// `BITMAPFILEHEADER` size; the info header starts here.
const FILE_HEADER_SIZE: usize = 14;

/// Smallest info header we accept (`BITMAPINFOHEADER`).
const MIN_INFO_HEADER_SIZE: u32 = 40;

/// Bytes between the end of `biBitCount` and `biClrUsed`
/// (compression, image size, x/y resolution).
const BYTES_BEFORE_CLR_USED: usize = 16;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BitmapError> {
        if pos > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        let new_pos = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        self.set_position(new_pos)
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let end = self.pos.checked_add(N).ok_or(BitmapError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BitmapError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Parsed BMP header info ──────────────────────────────────────────

pub(crate) struct BmpHeader {
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
    /// Stored row size in bytes, padded to a multiple of 4.
    pub stride: usize,
    /// Absolute offset of the first stored (bottom) row.
    pub data_offset: usize,
    pub info_size: u32,
    /// Absolute offset of the palette (end of the info header).
    pub palette_offset: usize,
    pub palette_len: usize,
}

/// Parse the file and info headers.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpHeader, BitmapError> {
    let mut bytes = Cursor::new(data);

    if bytes.read_fixed_bytes::<2>()? != *b"BM" {
        return Err(BitmapError::UnrecognizedFormat);
    }
    // File size and reserved words
    bytes.skip(8)?;
    let data_offset = bytes.get_u32_le()?;

    let begin = bytes.position();
    let info_size = bytes.get_u32_le()?;
    if info_size < MIN_INFO_HEADER_SIZE {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP info header size {info_size} is below {MIN_INFO_HEADER_SIZE}"
        )));
    }

    let width = bytes.get_i32_le()?;
    let height = bytes.get_i32_le()?;
    if width <= 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP width {width} is not positive"
        )));
    }
    if height < 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "top-down BMP (height {height}) is not supported"
        )));
    }
    if height == 0 {
        return Err(BitmapError::InvalidHeader("BMP height is zero".into()));
    }

    // Planes, unchecked
    bytes.skip(2)?;
    let bit_count = bytes.get_u16_le()?;
    let depth = BitDepth::from_bit_count(bit_count).ok_or_else(|| {
        BitmapError::UnsupportedVariant(alloc::format!(
            "unknown BMP format: bit depth {bit_count}"
        ))
    })?;

    bytes.skip(BYTES_BEFORE_CLR_USED)?;
    let colors_used = bytes.get_u32_le()?;

    let width = width.unsigned_abs();
    let height = height.unsigned_abs();
    let stride = depth
        .stride(width as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    // Skip whatever the header carries past the fields above.
    let palette_offset = begin
        .checked_add(info_size as usize)
        .ok_or(BitmapError::UnexpectedEof)?;
    bytes.set_position(palette_offset)?;

    let data_offset = data_offset as usize;
    let max_colors = depth.palette_len();
    let declared = match usize::try_from(colors_used) {
        Ok(n) if n != 0 && n <= max_colors => n,
        _ => max_colors,
    };
    // The palette ends at the pixel array, or at end of input when the
    // pixel array does not follow it. Only whole entries count.
    let palette_end = if data_offset > palette_offset {
        data_offset.min(data.len())
    } else {
        data.len()
    };
    let palette_len = declared.min((palette_end - palette_offset) / 4);

    trace!("BMP width: {width}");
    trace!("BMP height: {height}");
    trace!("BMP depth: {bit_count}, stride: {stride}, info header: {info_size}");
    trace!("BMP pixel data offset: {data_offset}, palette entries: {palette_len}");

    Ok(BmpHeader {
        width,
        height,
        depth,
        stride,
        data_offset,
        info_size,
        palette_offset,
        palette_len,
    })
}

/// Read the palette that follows the info header, as opaque RGBA.
fn read_palette(data: &[u8], header: &BmpHeader) -> Result<Vec<RGBA8>, BitmapError> {
    if !header.depth.is_indexed() {
        return Ok(Vec::new());
    }
    let mut bytes = Cursor::new(data);
    bytes.set_position(header.palette_offset)?;

    let mut palette = Vec::with_capacity(header.palette_len);
    for _ in 0..header.palette_len {
        let [b, g, r, _] = bytes.read_fixed_bytes::<4>()?;
        palette.push(RGBA8::new(r, g, b, 255));
    }
    Ok(palette)
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode all pixels in image order (top row first).
pub(crate) fn decode_bmp_pixels(
    data: &[u8],
    header: &BmpHeader,
    stop: &dyn Stop,
) -> Result<Vec<RGBA8>, BitmapError> {
    let too_large = || BitmapError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };
    let width = header.width as usize;
    let height = header.height as usize;

    let palette = read_palette(data, header)?;

    // Every stored row must be present before anything is allocated.
    let row_bytes = header
        .depth
        .packed_row_bytes(width)
        .ok_or_else(too_large)?;
    let body_end = header
        .stride
        .checked_mul(height - 1)
        .and_then(|n| n.checked_add(row_bytes))
        .and_then(|n| n.checked_add(header.data_offset))
        .ok_or_else(too_large)?;
    if body_end > data.len() {
        return Err(BitmapError::UnexpectedEof);
    }

    let pixel_count = width.checked_mul(height).ok_or_else(too_large)?;
    let mut pixels = Vec::with_capacity(pixel_count);

    let read_pixel = read_pixel_fn(header.depth);
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        let row_start = header.data_offset + header.stride * (height - 1 - y);
        let row = data
            .get(row_start..row_start + row_bytes)
            .ok_or(BitmapError::UnexpectedEof)?;
        for x in 0..width {
            let pixel = read_pixel(row, x, &palette).ok_or_else(|| {
                BitmapError::InvalidData(alloc::format!(
                    "palette index out of range at ({x}, {y}); palette has {} entries",
                    palette.len()
                ))
            })?;
            pixels.push(pixel);
        }
    }

    Ok(pixels)
}
