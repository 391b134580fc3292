#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input.
    let limits = texbmp::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let _ = texbmp::ImageInfo::from_bytes(data);
    let _ = texbmp::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
