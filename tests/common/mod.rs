//! Minimal BMP writer for building test inputs.
#![allow(dead_code)]

use texbmp::RGBA8;

pub const RED: RGBA8 = RGBA8 {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};
pub const GREEN: RGBA8 = RGBA8 {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};
pub const BLUE: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 255,
    a: 255,
};
pub const WHITE: RGBA8 = RGBA8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
pub const BLACK: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Builder for a BMP file. Rows are given in file order (bottom row first)
/// and unpadded; `to_bytes` pads each to the stride.
#[derive(Clone, Debug)]
pub struct TestBmp {
    pub width: i32,
    pub height: i32,
    pub bit_count: u16,
    pub info_size: u32,
    pub colors_used: u32,
    pub palette: Vec<RGBA8>,
    /// Extra bytes between the palette and the pixel array.
    pub gap: usize,
    pub file_rows: Vec<Vec<u8>>,
}

impl TestBmp {
    pub fn new(width: i32, height: i32, bit_count: u16) -> Self {
        Self {
            width,
            height,
            bit_count,
            info_size: 40,
            colors_used: 0,
            palette: Vec::new(),
            gap: 0,
            file_rows: Vec::new(),
        }
    }

    pub fn stride(&self) -> usize {
        (self.width.unsigned_abs() as usize * self.bit_count as usize).div_ceil(32) * 4
    }

    pub fn data_offset(&self) -> usize {
        14 + self.info_size as usize + self.palette.len() * 4 + self.gap
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let stride = self.stride();
        let data_offset = self.data_offset();
        let pixel_data_size = stride * self.file_rows.len();
        let file_size = data_offset + pixel_data_size;

        let mut out = Vec::with_capacity(file_size);
        // File header (14 bytes)
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // reserved
        out.extend_from_slice(&(data_offset as u32).to_le_bytes());

        // Info header
        out.extend_from_slice(&self.info_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // compression
        out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
        out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
        out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // important colors
        out.resize(14 + self.info_size as usize, 0);

        for c in &self.palette {
            out.extend_from_slice(&[c.b, c.g, c.r, 0]);
        }
        out.resize(data_offset, 0);

        for row in &self.file_rows {
            assert!(row.len() <= stride, "row longer than stride");
            out.extend_from_slice(row);
            out.resize(out.len() + stride - row.len(), 0);
        }
        out
    }
}

/// Encode top-row-first pixels as 24-bit or 32-bit BMP. For 32-bit the
/// pixel's alpha goes into the fourth byte.
pub fn encode_direct(pixels: &[RGBA8], width: usize, height: usize, bit_count: u16) -> Vec<u8> {
    assert_eq!(pixels.len(), width * height);
    let mut bmp = TestBmp::new(width as i32, height as i32, bit_count);
    for y in (0..height).rev() {
        let mut row = Vec::new();
        for p in &pixels[y * width..(y + 1) * width] {
            row.extend_from_slice(&[p.b, p.g, p.r]);
            if bit_count == 32 {
                row.push(p.a);
            }
        }
        bmp.file_rows.push(row);
    }
    bmp.to_bytes()
}

/// Pack palette indices for a 1, 4 or 8-bit row.
///
/// 1-bit puts pixel `x` in bit `x % 8`; 4-bit puts even x in the high nibble.
pub fn pack_indices(indices: &[u8], bit_count: u16) -> Vec<u8> {
    match bit_count {
        1 => indices
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (bit, &idx)| byte | ((idx & 1) << bit))
            })
            .collect(),
        4 => indices
            .chunks(2)
            .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
            .collect(),
        8 => indices.to_vec(),
        other => panic!("not an indexed depth: {other}"),
    }
}

/// Build an indexed BMP from top-row-first palette indices.
pub fn encode_indexed(
    indices: &[u8],
    width: usize,
    height: usize,
    bit_count: u16,
    palette: &[RGBA8],
) -> TestBmp {
    assert_eq!(indices.len(), width * height);
    let mut bmp = TestBmp::new(width as i32, height as i32, bit_count);
    bmp.palette = palette.to_vec();
    bmp.colors_used = palette.len() as u32;
    for y in (0..height).rev() {
        bmp.file_rows
            .push(pack_indices(&indices[y * width..(y + 1) * width], bit_count));
    }
    bmp
}

pub fn checkerboard(w: usize, h: usize) -> Vec<RGBA8> {
    (0..w * h)
        .map(|i| {
            let (x, y) = (i % w, i / w);
            if (x + y) % 2 == 0 {
                RGBA8::new(200, 220, 240, 255)
            } else {
                RGBA8::new(10, 40, 70, 255)
            }
        })
        .collect()
}

pub fn noise_pattern(w: usize, h: usize) -> Vec<RGBA8> {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    (0..w * h)
        .map(|_| RGBA8::new(next(), next(), next(), 255))
        .collect()
}
