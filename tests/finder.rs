//! Integration tests for the match finder, exercised through the packet
//! codec it feeds.

use lza::packet::{decode_events, encode_events, Event};
use lza::MatchFinder;

fn round_trip(src: &[u8]) {
    let events: Vec<Event> = MatchFinder::new(src).collect();
    let streams = encode_events(src, events);
    let decoded = decode_events(
        [
            &streams.type_stream,
            &streams.literal_msb,
            &streams.literal,
            &streams.size,
            &streams.offset,
        ],
        src.len(),
    )
    .unwrap();
    assert_eq!(decoded, src);
}

#[test]
fn finds_matches_in_natural_language_text() {
    let src = b"the quick brown fox jumps over the lazy dog, \
                and the quick brown fox jumps again"
        .to_vec();
    let events: Vec<Event> = MatchFinder::new(&src).collect();
    assert!(events.iter().any(|e| matches!(e, Event::Match { .. })));
    round_trip(&src);
}

#[test]
fn long_repeated_run_compresses_to_few_events() {
    let src = vec![b'z'; 10_000];
    let events: Vec<Event> = MatchFinder::new(&src).collect();
    assert!(events.len() < src.len() / 10);
    round_trip(&src);
}

#[test]
fn incompressible_random_bytes_still_round_trip() {
    let src: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(40503) >> 13) as u8).collect();
    round_trip(&src);
}

#[test]
fn short_input_below_pair_window_round_trips() {
    round_trip(b"");
    round_trip(b"a");
    round_trip(b"ab");
}
