//! Container framing and the top-level `compress`/`decompress` entry
//! points (spec.md §6).
//!
//! On-wire layout, all integers written low-to-high through the same
//! distance-prefix code used by the OFFSET stream (so the header shares
//! its bit-packing code with the payload it describes):
//!
//! ```text
//! [u32 LE: header byte length]
//! [header bits: original_len | window_size(16 raw bits) | 5 stream lengths]
//! [arithmetic-coded payload: the 5 packet streams concatenated]
//! ```
//!
//! The header is written as a plain (non-arithmetic-coded) bit stream so
//! its fields — crucially the five stream lengths — can be read back
//! before the arithmetic coder needs a `dest_len` to decode towards. This
//! is the resolution to spec.md §9's header/payload bootstrapping: the
//! header never goes through [`crate::arith`] at all.

use crate::arith;
use crate::bitstream::{BitEmitter, BitStream};
use crate::config::PROB_WINDOW_DEFAULT;
use crate::error::CoreError;
use crate::finder::MatchFinder;
use crate::packet::{self, decode_distance_code, encode_distance_code, PacketStreams};

/// Diagnostics accumulated during compression (spec.md §9 "Compression
/// statistics"). Never read back on decode; purely informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub literals: u64,
    pub matches: u64,
    pub rep_matches: u64,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

const HEADER_LEN_PREFIX: usize = 4;

fn build_header(original_len: usize, window_size: u32, stream_lens: [usize; 5]) -> Vec<u8> {
    // Six distance-coded fields (original_len, five stream lengths) at up to
    // ~5 bytes each in the worst case, plus the raw 16-bit window field and
    // emit_tail's sentinel bytes; 128 bytes leaves a wide margin.
    let cap = 128;
    let mut buf = vec![0u8; cap];
    let n = {
        let mut em = BitEmitter::new(&mut buf);
        encode_distance_code(&mut em, original_len as u32 + 1);
        em.emit_bits(window_size, 16);
        for &len in &stream_lens {
            encode_distance_code(&mut em, len as u32 + 1);
        }
        em.emit_tail()
    };
    buf.truncate(n);
    buf
}

struct Header {
    original_len: usize,
    window_size: u32,
    stream_lens: [usize; 5],
}

fn parse_header(buf: &[u8]) -> Result<Header, CoreError> {
    let mut st = BitStream::new(buf);
    let original_len = decode_distance_code(&mut st)? as usize - 1;
    let window_size = st.get_bits(16);
    let mut stream_lens = [0usize; 5];
    for slot in stream_lens.iter_mut() {
        *slot = decode_distance_code(&mut st)? as usize - 1;
    }
    Ok(Header { original_len, window_size, stream_lens })
}

/// Upper bound on the compressed size of an `input_size`-byte input,
/// suitable for sizing an output buffer before calling [`compress_into`].
pub fn estimate_compress_size(input_size: usize) -> usize {
    // Packet streams round-trip through the arithmetic coder, which can
    // expand pathological input by roughly 2x in the worst case; add the
    // header's fixed overhead on top.
    HEADER_LEN_PREFIX + 128 + input_size.saturating_mul(2) + 64
}

/// Upper bound on the scratch buffer [`decompress_into`] needs while
/// decoding a container whose five packet streams have the given byte
/// lengths.
pub fn estimate_decompress_scratch_size(stream_lengths: [usize; 5]) -> usize {
    stream_lengths.iter().sum()
}

/// Compresses `src` into a pre-allocated `dest`, using `window_size` for
/// the adaptive probability model (clamped to `[1, PROB_WINDOW_MAX]` by
/// [`crate::prob::ProbabilityModel`]). Returns the number of bytes written
/// to `dest` and the run's [`Stats`].
///
/// `dest` must be at least [`estimate_compress_size`]`(src.len())` bytes.
pub fn compress_into(src: &[u8], window_size: u32, dest: &mut [u8]) -> Result<(usize, Stats), CoreError> {
    let mut stats = Stats { input_bytes: src.len() as u64, ..Stats::default() };
    let finder = MatchFinder::new(src);
    let mut events = Vec::new();
    for ev in finder {
        match ev {
            packet::Event::Literal { length, .. } => stats.literals += length as u64,
            packet::Event::Match { last_index, .. } if last_index >= 0 => stats.rep_matches += 1,
            packet::Event::Match { .. } => stats.matches += 1,
        }
        events.push(ev);
    }

    let streams: PacketStreams = packet::encode_events(src, events);
    let stream_lens = streams.lengths();
    let payload = streams.concat();
    let coded = arith::encode(&payload, window_size);

    let header = build_header(src.len(), window_size, stream_lens);
    let total = HEADER_LEN_PREFIX + header.len() + coded.len();
    assert!(
        dest.len() >= total,
        "dest buffer too small for compressed output: have {}, need {total}",
        dest.len()
    );

    dest[0..4].copy_from_slice(&(header.len() as u32).to_le_bytes());
    dest[4..4 + header.len()].copy_from_slice(&header);
    dest[4 + header.len()..total].copy_from_slice(&coded);

    stats.output_bytes = total as u64;
    Ok((total, stats))
}

/// Allocating convenience wrapper over [`compress_into`].
pub fn compress(src: &[u8], window_size: u32) -> Result<(Vec<u8>, Stats), CoreError> {
    let mut dest = vec![0u8; estimate_compress_size(src.len())];
    let (n, stats) = compress_into(src, window_size, &mut dest)?;
    dest.truncate(n);
    Ok((dest, stats))
}

/// Decompresses `src` into a pre-allocated `dest`, returning the number of
/// bytes written. `dest` must be at least as large as the original input;
/// [`decompress`] reads that length from the container header itself
/// before allocating.
pub fn decompress_into(src: &[u8], dest: &mut [u8]) -> Result<usize, CoreError> {
    if src.len() < HEADER_LEN_PREFIX {
        return Err(CoreError::MalformedInput);
    }
    let header_len = u32::from_le_bytes(src[0..4].try_into().unwrap()) as usize;
    if src.len() < HEADER_LEN_PREFIX + header_len {
        return Err(CoreError::MalformedInput);
    }
    let header = parse_header(&src[4..4 + header_len])?;
    let payload_len: usize = header.stream_lens.iter().sum();
    if dest.len() < header.original_len {
        return Err(CoreError::MalformedInput);
    }

    let coded = &src[4 + header_len..];
    let payload = arith::decode(coded, payload_len, header.window_size);

    let [type_len, msb_len, lit_len, size_len, off_len] = header.stream_lens;
    let mut offset = 0;
    let mut slice = |len: usize| {
        let s = &payload[offset..offset + len];
        offset += len;
        s
    };
    let type_stream = slice(type_len);
    let literal_msb = slice(msb_len);
    let literal = slice(lit_len);
    let size = slice(size_len);
    let offset_stream = slice(off_len);

    let decoded = packet::decode_events(
        [type_stream, literal_msb, literal, size, offset_stream],
        header.original_len,
    )?;

    dest[..decoded.len()].copy_from_slice(&decoded);
    Ok(decoded.len())
}

/// Allocating convenience wrapper over [`decompress_into`].
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, CoreError> {
    if src.len() < HEADER_LEN_PREFIX {
        return Err(CoreError::MalformedInput);
    }
    let header_len = u32::from_le_bytes(src[0..4].try_into().unwrap()) as usize;
    if src.len() < HEADER_LEN_PREFIX + header_len {
        return Err(CoreError::MalformedInput);
    }
    let header = parse_header(&src[4..4 + header_len])?;
    let mut dest = vec![0u8; header.original_len];
    let n = decompress_into(src, &mut dest)?;
    dest.truncate(n);
    Ok(dest)
}

/// Compresses with the default probability-model window (spec.md §4.2
/// "Rationale").
pub fn compress_default(src: &[u8]) -> Result<(Vec<u8>, Stats), CoreError> {
    compress(src, PROB_WINDOW_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(src: &[u8], window: u32) {
        let (compressed, stats) = compress(src, window).unwrap();
        assert_eq!(stats.input_bytes, src.len() as u64);
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, src);
    }

    #[test]
    fn empty_input() {
        round_trip(&[], 128);
    }

    #[test]
    fn small_text() {
        round_trip(b"hello, world!", 128);
    }

    #[test]
    fn repeated_pattern() {
        round_trip(&b"abcabcabcabcabcabc".repeat(20), 128);
    }

    #[test]
    fn default_window_wrapper() {
        let (compressed, _) = compress_default(b"abcabcabcabc").unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, b"abcabcabcabc");
    }

    #[test]
    fn binary_data_round_trip() {
        let src: Vec<u8> = (0..5000u32).map(|i| (i.wrapping_mul(2654435761) >> 21) as u8).collect();
        round_trip(&src, 512);
    }

    #[test]
    fn decompress_rejects_truncated_container() {
        let result = decompress(&[1, 2]);
        assert_eq!(result, Err(CoreError::MalformedInput));
    }

    #[test]
    fn estimate_sizes_are_non_trivial() {
        assert!(estimate_compress_size(1000) > 1000);
        assert_eq!(estimate_decompress_scratch_size([1, 2, 3, 4, 5]), 15);
    }
}
