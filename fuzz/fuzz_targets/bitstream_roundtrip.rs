#![no_main]
use libfuzzer_sys::fuzz_target;
use lza::bitstream::{BitEmitter, BitStream};

fuzz_target!(|bits: Vec<bool>| {
    if bits.len() > 1 << 20 {
        return; // bound memory use on pathological inputs
    }
    let mut buf = vec![0u8; bits.len() / 8 + 16];
    let mut em = BitEmitter::new(&mut buf);
    for &b in &bits {
        em.emit_bit(b as u32);
    }
    let n = em.emit_tail();
    buf.truncate(n);

    let mut st = BitStream::new(&buf);
    for &b in &bits {
        assert_eq!(st.get_one_bit(), b as u32);
    }
});
