#![no_main]
use libfuzzer_sys::fuzz_target;
use texbmp::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(image) = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable) else {
        return;
    };

    // Anything that decodes must also probe, with the same dimensions.
    let info = ImageInfo::from_bytes(data).expect("decodable input failed to probe");
    assert_eq!(info.width, image.width());
    assert_eq!(info.height, image.height());
    assert_eq!(image.pixels().len(), info.width as usize * info.height as usize);
    assert!(image.pixels().iter().all(|p| p.a == 255), "non-opaque pixel");
    assert_eq!(image.as_imgref().width(), info.width as usize);
});
