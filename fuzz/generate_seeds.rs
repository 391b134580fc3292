#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32, bpp: u16, palette_entries: u32, data_len: usize) -> Vec<u8> {
    let data_offset = 54 + palette_entries * 4;
    let file_size = data_offset as usize + data_len;
    let mut bmp = vec![0u8; data_offset as usize];
    bmp[0..2].copy_from_slice(b"BM");
    bmp[2..6].copy_from_slice(&(file_size as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&data_offset.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp[46..50].copy_from_slice(&palette_entries.to_le_bytes()); // colors used
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 24-bit
    let mut bmp = header(1, 1, 24, 0, 4);
    bmp.extend_from_slice(&[0xff, 0x00, 0x00, 0x00]); // BGR + pad
    fs::write(format!("{dir}/bmp24_1x1.bmp"), bmp).unwrap();

    // 2x1 32-bit
    let mut bmp = header(2, 1, 32, 0, 8);
    bmp.extend_from_slice(&[0, 0, 255, 0, 0, 255, 0, 128]);
    fs::write(format!("{dir}/bmp32_2x1.bmp"), bmp).unwrap();

    // 4x1 8-bit, 4-entry palette
    let mut bmp = header(4, 1, 8, 4, 4);
    bmp[54..70].copy_from_slice(&[0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0, 0, 255, 255, 255, 0]);
    bmp.extend_from_slice(&[0, 1, 2, 3]);
    fs::write(format!("{dir}/bmp8_4x1.bmp"), bmp).unwrap();

    // 3x2 4-bit, 2-entry palette
    let mut bmp = header(3, 2, 4, 2, 8);
    bmp[54..62].copy_from_slice(&[0, 0, 0, 0, 255, 255, 255, 0]);
    bmp.extend_from_slice(&[0x10, 0x10, 0, 0, 0x01, 0x00, 0, 0]);
    fs::write(format!("{dir}/bmp4_3x2.bmp"), bmp).unwrap();

    // 9x1 1-bit
    let mut bmp = header(9, 1, 1, 2, 4);
    bmp[54..62].copy_from_slice(&[0, 0, 0, 0, 255, 255, 255, 0]);
    bmp.extend_from_slice(&[0b1010_0101, 0b1, 0, 0]);
    fs::write(format!("{dir}/bmp1_9x1.bmp"), bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut top_down = header(1, -1, 24, 0, 4);
    top_down.extend_from_slice(&[0; 4]);
    fs::write(format!("{dir}/top_down.bin"), top_down).unwrap();

    println!("Generated seed corpus in {dir}/");
}
