//! Integration tests for the MSB-first bit packer/reader.

use lza::bitstream::{BitEmitter, BitStream};

#[test]
fn arbitrary_bit_sequence_round_trips() {
    let bits: Vec<u32> = (0..137).map(|i| (i * 7 + 3) % 2).collect();
    let mut buf = vec![0u8; 64];
    let mut em = BitEmitter::new(&mut buf);
    for &b in &bits {
        em.emit_bit(b);
    }
    let n = em.emit_tail();
    buf.truncate(n);

    let mut st = BitStream::new(&buf);
    for &b in &bits {
        assert_eq!(st.get_one_bit(), b);
    }
}

#[test]
fn mixed_width_fields_round_trip() {
    let fields: &[(u32, u32)] = &[(0b1, 1), (0b101, 3), (0xBEEF, 16), (0x7F, 7), (0, 4)];
    let mut buf = vec![0u8; 32];
    let mut em = BitEmitter::new(&mut buf);
    for &(value, width) in fields {
        em.emit_bits(value, width);
    }
    em.emit_tail();

    let mut st = BitStream::new(&buf);
    for &(value, width) in fields {
        assert_eq!(st.get_bits(width), value);
    }
}

#[test]
fn bits_read_tracks_consumption() {
    let mut buf = vec![0u8; 8];
    let mut em = BitEmitter::new(&mut buf);
    em.emit_bits(0xABCD, 16);
    em.emit_tail();

    let mut st = BitStream::new(&buf);
    assert_eq!(st.bits_read(), 0);
    st.get_bits(16);
    assert_eq!(st.bits_read(), 16);
}
