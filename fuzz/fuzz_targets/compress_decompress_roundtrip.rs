#![no_main]
use libfuzzer_sys::fuzz_target;

#[derive(arbitrary::Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    window: u32,
}

fuzz_target!(|input: Input| {
    let window = (input.window % 2048).max(1);
    let (compressed, _) = lza::compress(&input.data, window).expect("compress never fails on valid input");
    let recovered = lza::decompress(&compressed).expect("decompress of our own output must succeed");
    assert_eq!(recovered, input.data, "round-trip mismatch at window={window}");
});
