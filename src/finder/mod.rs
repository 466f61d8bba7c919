//! Match finder: turns a byte slice into the [`Event`] sequence the packet
//! codec encodes (spec.md §4.4).
//!
//! | Here                     | Role                                              |
//! |---------------------------|---------------------------------------------------|
//! | [`MatchFinder`]            | owns the source, the hash chain, and the ring     |
//! | [`MatchFinder::next`]       | one step of the greedy-with-lookahead parser       |
//! | [`Candidate`]               | a scored distance/length option at one position   |
//!
//! Every position is scored against the literal cost it would otherwise
//! take (nine bits: one TYPE bit, one LITERAL_MSB bit, seven LITERAL bits),
//! and the best-scoring candidate is taken only if a one-byte lookahead
//! doesn't find something strictly better to wait for — the same
//! deferred-match idea as a classic LZ77 hash-chain parser, simplified
//! here to a single-position lookahead rather than the teacher's
//! three-deep speculative search (see `hc/compress_hc.rs`).

mod offset_map;

use crate::config::{MAX_CHAIN_STEPS, MAX_MATCH_LEN, SHORT_MATCH_DISTANCE_CAPS};
use crate::packet::{distance_bits, length_bits, Event, LastFourRing};
use offset_map::OffsetMap;

/// Bits a literal byte costs: one TYPE bit, one LITERAL_MSB bit, seven
/// LITERAL payload bits.
const LITERAL_BITS: i64 = 9;

/// A scored distance/length option considered at one source position.
///
/// `last_index` follows [`Event::Match`]'s convention: `-1` for a fresh
/// distance, `0..=3` for a last-four ring reuse.
#[derive(Clone, Copy)]
struct Candidate {
    distance: u32,
    length: u32,
    last_index: i32,
    savings: i64,
}

impl Candidate {
    fn scored(distance: u32, length: u32, last_index: i32) -> Self {
        let cost = packet_cost(last_index, length, distance) as i64;
        let savings = length as i64 * LITERAL_BITS - cost;
        Candidate { distance, length, last_index, savings }
    }

    fn is_fresh(&self) -> bool {
        self.last_index < 0
    }
}

/// Bit cost of encoding a candidate as a packet, mirroring the TYPE-stream
/// prefix lengths in `packet::write_type` plus any SIZE/OFFSET payload.
fn packet_cost(last_index: i32, length: u32, distance: u32) -> u32 {
    if last_index < 0 {
        2 + length_bits(length) + distance_bits(distance)
    } else if last_index == 0 && length == 1 {
        4
    } else {
        let type_bits = match last_index {
            0 | 1 => 4,
            2 | 3 => 5,
            _ => unreachable!("last_index out of [-1,3] range"),
        };
        type_bits + length_bits(length)
    }
}

/// A fresh match at this `(distance, length)` costs more to encode than it
/// saves in practice for short, far-away matches (spec.md §4.4 edge
/// cases); reject them even if the naive bit count nets positive.
fn is_short_distant_match(distance: u32, length: u32) -> bool {
    SHORT_MATCH_DISTANCE_CAPS
        .iter()
        .any(|&(len, cap)| length == len && distance > cap)
}

/// Length of the common prefix of `src[a..]` and `src[b..]`, capped at
/// `max_len`. Callers guarantee `a < b` and `b + max_len <= src.len()`.
fn match_len(src: &[u8], a: usize, b: usize, max_len: usize) -> usize {
    let mut n = 0;
    while n < max_len && src[a + n] == src[b + n] {
        n += 1;
    }
    n
}

fn better(a: &Candidate, b: &Candidate) -> bool {
    if a.savings != b.savings {
        return a.savings > b.savings;
    }
    if a.is_fresh() != b.is_fresh() {
        return !a.is_fresh(); // prefer reusing a ring slot over a fresh distance
    }
    if a.distance != b.distance {
        return a.distance < b.distance;
    }
    a.length > b.length
}

/// Greedy-with-one-step-lookahead match finder over a source buffer.
///
/// Implements [`Iterator<Item = Event>`](Event) directly: each call to
/// `next` advances past one literal byte or one whole match, so a caller
/// can feed it straight into [`crate::packet::encode_events`].
pub struct MatchFinder<'a> {
    src: &'a [u8],
    map: OffsetMap,
    ring: LastFourRing,
    pos: usize,
}

impl<'a> MatchFinder<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        MatchFinder {
            map: OffsetMap::new(src.len()),
            ring: LastFourRing::new(),
            src,
            pos: 0,
        }
    }

    fn find_best(&self, pos: usize) -> Option<Candidate> {
        let remaining = self.src.len() - pos;
        if remaining == 0 {
            return None;
        }
        let max_len = remaining.min(MAX_MATCH_LEN);
        let mut best: Option<Candidate> = None;
        let mut consider = |c: Candidate| {
            if c.savings <= 0 {
                return;
            }
            if c.is_fresh() && is_short_distant_match(c.distance, c.length) {
                return;
            }
            best = match best {
                Some(cur) if !better(&c, &cur) => Some(cur),
                _ => Some(c),
            };
        };

        for (idx, &d) in self.ring.slots().iter().enumerate() {
            if d == 0 || d as usize > pos {
                continue;
            }
            let length = match_len(self.src, pos - d as usize, pos, max_len);
            if length == 0 {
                continue;
            }
            if idx == 0 {
                consider(Candidate::scored(d, length as u32, 0));
            } else if length >= 2 {
                consider(Candidate::scored(d, length as u32, idx as i32));
            }
        }

        if max_len >= 2 {
            if pos >= 1 && self.ring.find(1).is_none() {
                let length = match_len(self.src, pos - 1, pos, max_len);
                if length >= 2 {
                    consider(Candidate::scored(1, length as u32, -1));
                }
            }

            let hash = OffsetMap::pair_hash(self.src, pos);
            for (steps, cpos) in self.map.chain(hash).enumerate() {
                if steps >= MAX_CHAIN_STEPS {
                    break;
                }
                let cpos = cpos as usize;
                if cpos >= pos {
                    continue;
                }
                let distance = (pos - cpos) as u32;
                if self.ring.find(distance).is_some() {
                    continue;
                }
                let length = match_len(self.src, cpos, pos, max_len);
                if length < 2 {
                    continue;
                }
                consider(Candidate::scored(distance, length as u32, -1));
                if length == max_len {
                    break;
                }
            }
        }

        best
    }

    /// Defers taking `current` at `pos` when the match one byte further
    /// along is both longer and more profitable.
    fn should_defer(&self, pos: usize, current: &Candidate) -> bool {
        if pos + 1 >= self.src.len() {
            return false;
        }
        match self.find_best(pos + 1) {
            Some(next) => next.length > current.length && next.savings > current.savings,
            None => false,
        }
    }

    fn insert_position(&mut self, pos: usize) {
        if pos + 1 < self.src.len() {
            self.map.insert_tombstoned(self.src, pos);
        }
    }
}

impl<'a> Iterator for MatchFinder<'a> {
    type Item = Event;

    /// Coalesces a run of literal bytes into a single [`Event::Literal`]
    /// (spec.md §8's "Concrete scenarios" table documents multi-byte
    /// literal runs this way), flushing the run as soon as a match is
    /// actually taken or the input ends.
    fn next(&mut self) -> Option<Event> {
        if self.pos >= self.src.len() {
            return None;
        }

        let literal_start = self.pos;
        while self.pos < self.src.len() {
            let take = match self.find_best(self.pos) {
                Some(c) if !self.should_defer(self.pos, &c) => Some(c),
                _ => None,
            };

            let Some(c) = take else {
                self.insert_position(self.pos);
                self.pos += 1;
                continue;
            };

            if self.pos > literal_start {
                return Some(Event::Literal { start: literal_start, length: self.pos - literal_start });
            }

            let start = self.pos;
            for i in 0..c.length as usize {
                self.insert_position(start + i);
            }
            self.ring.use_distance(c.distance);
            self.pos += c.length as usize;
            return Some(Event::Match { distance: c.distance, length: c.length, last_index: c.last_index });
        }

        Some(Event::Literal { start: literal_start, length: self.pos - literal_start })
    }
}
