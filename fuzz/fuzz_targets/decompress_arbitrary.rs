#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes fed to the decompressor must never panic; an error
    // result is fine and expected for most inputs.
    let _ = lza::decompress(data);

    // Same via the buffer-contract entry point, with a few destination
    // sizes that exercise different bounds-check paths.
    for &cap in &[0usize, 64, data.len()] {
        let mut dest = vec![0u8; cap];
        let _ = lza::decompress_into(data, &mut dest);
    }
});
