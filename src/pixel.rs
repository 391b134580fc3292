/// Bits per pixel of a supported BMP.
///
/// 1, 4 and 8-bit images index into a palette; 24 and 32-bit images store
/// B, G, R (and an ignored fourth byte) directly.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    One,
    Four,
    Eight,
    TwentyFour,
    ThirtyTwo,
}

impl BitDepth {
    /// Map the header's `biBitCount` to a supported depth.
    pub fn from_bit_count(bit_count: u16) -> Option<Self> {
        match bit_count {
            1 => Some(Self::One),
            4 => Some(Self::Four),
            8 => Some(Self::Eight),
            24 => Some(Self::TwentyFour),
            32 => Some(Self::ThirtyTwo),
            _ => None,
        }
    }

    /// Bits per pixel.
    pub fn bits(&self) -> usize {
        match self {
            Self::One => 1,
            Self::Four => 4,
            Self::Eight => 8,
            Self::TwentyFour => 24,
            Self::ThirtyTwo => 32,
        }
    }

    /// Maximum palette entries for this depth (0 for direct color).
    pub fn palette_len(&self) -> usize {
        match self {
            Self::One => 2,
            Self::Four => 16,
            Self::Eight => 256,
            Self::TwentyFour | Self::ThirtyTwo => 0,
        }
    }

    /// Whether pixels are palette indices.
    pub fn is_indexed(&self) -> bool {
        self.palette_len() != 0
    }

    /// Bytes actually occupied by `width` pixels, without row padding.
    pub(crate) fn packed_row_bytes(&self, width: usize) -> Option<usize> {
        width
            .checked_mul(self.bits())
            .map(|bits| bits.div_ceil(8))
    }

    /// Stored row size: `ceil(width * bits / 32) * 4`.
    pub(crate) fn stride(&self, width: usize) -> Option<usize> {
        width
            .checked_mul(self.bits())
            .and_then(|bits| bits.div_ceil(32).checked_mul(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_uncompressed_depths_are_known() {
        for bits in [1u16, 4, 8, 24, 32] {
            let depth = BitDepth::from_bit_count(bits).unwrap();
            assert_eq!(depth.bits(), bits as usize);
            assert_eq!(depth.is_indexed(), bits <= 8);
        }
        for bits in [0u16, 2, 15, 16, 48, 64] {
            assert_eq!(BitDepth::from_bit_count(bits), None);
        }
    }

    #[test]
    fn stride_rounds_up_to_four_bytes() {
        assert_eq!(BitDepth::TwentyFour.stride(3), Some(12));
        assert_eq!(BitDepth::TwentyFour.stride(4), Some(12));
        assert_eq!(BitDepth::ThirtyTwo.stride(3), Some(12));
        assert_eq!(BitDepth::Eight.stride(5), Some(8));
        assert_eq!(BitDepth::Four.stride(9), Some(8));
        assert_eq!(BitDepth::One.stride(1), Some(4));
        assert_eq!(BitDepth::One.stride(33), Some(8));
    }

    #[test]
    fn packed_row_bytes_excludes_padding() {
        assert_eq!(BitDepth::TwentyFour.packed_row_bytes(3), Some(9));
        assert_eq!(BitDepth::Four.packed_row_bytes(3), Some(2));
        assert_eq!(BitDepth::One.packed_row_bytes(9), Some(2));
    }
}
