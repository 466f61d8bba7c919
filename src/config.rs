//! Compile-time tunables for the compression core.
//!
//! These are constants rather than CLI flags because changing them changes
//! the on-wire format (see `packet.rs` and `pipeline.rs`) — unlike
//! `window_size`, which is a genuine per-call parameter (see `cli::args`).

/// Upper bound on the probability model's sliding window, in bits.
pub const PROB_WINDOW_MAX: u32 = 2048;

/// Default probability-model window when the caller does not override it.
pub const PROB_WINDOW_DEFAULT: u32 = 128;

/// Longest run a single MATCH/LONGREP packet can encode.
pub const MAX_MATCH_LEN: usize = 273;

/// Width of the byte-pair hash used by the match finder (2^16 slots).
pub const HASH_BITS: u32 = 16;

/// Number of earlier positions stored per arena chunk in the offset map.
pub const CHUNK_FANOUT: usize = 15;

/// Number of the last-four-distance ring's slots.
pub const LAST_FOUR_LEN: usize = 4;

/// Cap on hash-chain positions the match finder walks per lookup, bounding
/// worst-case search time on long runs of a repeated pair.
pub const MAX_CHAIN_STEPS: usize = 64;

/// Fresh-match distance/length pairs below this table aren't worth their
/// own OFFSET-stream cost and are rejected even when `distance_bits`
/// nominally shows a net saving (spec.md §4.4 edge cases).
pub const SHORT_MATCH_DISTANCE_CAPS: [(u32, u32); 2] = [(3, 1 << 11), (4, 1 << 13)];
