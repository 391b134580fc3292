use alloc::vec::Vec;

use rgb::{ComponentBytes as _, RGBA8};

/// A decoded bitmap: `width * height` opaque RGBA8 pixels, row-major, top
/// row first.
///
/// Produced once by a successful decode and immutable afterwards. Hand it to
/// a texture upload routine via [`RawImage::as_bytes`] or iterate it with
/// [`RawImage::rows`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImage {
    pixels: Vec<RGBA8>,
    width: u32,
    height: u32,
}

impl RawImage {
    pub(crate) const BYTES_PER_PIXEL: u64 = 4;

    pub(crate) fn new(pixels: Vec<RGBA8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, with `y = 0` the top row. `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<RGBA8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[RGBA8]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Pixel data as `R, G, B, A` bytes, ready for an RGBA texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<RGBA8> {
        self.pixels
    }

    /// Whether both dimensions are powers of two, i.e. the texture can be
    /// mipmapped and repeat-wrapped on every GL profile.
    pub fn is_power_of_two(&self) -> bool {
        self.width.is_power_of_two() && self.height.is_power_of_two()
    }

    /// Borrowed [`imgref::ImgRef`] view of the pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGBA8> {
        imgref::ImgRef::new(&self.pixels[..], self.width as usize, self.height as usize)
    }
}
