use enough::Stop;

use crate::error::BitmapError;
use crate::image::RawImage;
use crate::limits::Limits;

/// Decode a BMP with no resource limits.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<RawImage, BitmapError> {
    crate::bmp::decode(data, None, &stop)
}

/// A configured decode of one BMP buffer.
///
/// ```
/// use texbmp::{DecodeRequest, Limits, Unstoppable};
///
/// # fn main() -> Result<(), texbmp::BitmapError> {
/// # let data: &[u8] = &[];
/// # if data.is_empty() { return Ok(()); }
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or output size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. `stop` is polled before allocation and every 16 rows.
    pub fn decode(self, stop: impl Stop) -> Result<RawImage, BitmapError> {
        crate::bmp::decode(self.data, self.limits, &stop)
    }
}
