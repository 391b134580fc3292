//! # texbmp
//!
//! Decoder for uncompressed Windows BMP files, producing opaque RGBA8 images
//! ready for texture upload.
//!
//! ## Supported Formats
//!
//! - `BITMAPINFOHEADER` (40 bytes) or any larger info header; fields past the
//!   first 40 bytes are skipped
//! - 1, 4 and 8-bit palette images (palette entries are B, G, R, reserved)
//! - 24-bit BGR and 32-bit BGRX direct color
//! - Bottom-up rows padded to 4 bytes (the usual BMP layout)
//!
//! Every decoded pixel is fully opaque; the fourth byte of 32-bit pixels is
//! ignored.
//!
//! ## Non-Goals
//!
//! - RLE and other compressed variants. The compression field is not read,
//!   so an RLE file decodes as garbage rather than failing
//! - Top-down (negative height) bitmaps
//! - 16-bit pixels, bitfield masks, V4/V5 color spaces
//! - Encoding
//!
//! Truncated input is always an error ([`BitmapError::UnexpectedEof`]),
//! never a panic.
//!
//! ## Usage
//!
//! ```no_run
//! use texbmp::{ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.depth);
//!
//! let image = texbmp::decode_bmp(data, Unstoppable)?;
//! let rgba: &[u8] = image.as_bytes();
//! # let _ = rgba;
//! # Ok::<(), texbmp::BitmapError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod log;

mod bmp;
mod decode;
mod error;
mod image;
mod info;
mod limits;
mod pixel;

// Re-exports
pub use decode::{DecodeRequest, decode_bmp};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::BitmapError;
pub use image::RawImage;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::BitDepth;
pub use rgb::RGBA8;
