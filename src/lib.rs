//! Self-extracting executable compressor core: LZMA-dialect match finder,
//! packet codec, and adaptive arithmetic coder.

pub mod arith;
pub mod bitstream;
pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod io;
pub mod packet;
pub mod pipeline;
pub mod prob;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// One-shot compression with an explicit probability-model window.
pub use pipeline::compress;
/// One-shot compression using the default probability-model window.
pub use pipeline::compress_default;
/// Buffer-in/buffer-out compression (the §6 literal contract).
pub use pipeline::compress_into;
/// One-shot decompression.
pub use pipeline::decompress;
/// Buffer-in/buffer-out decompression (the §6 literal contract).
pub use pipeline::decompress_into;
/// Upper bound on a compressed container's size for a given input size.
pub use pipeline::estimate_compress_size;
/// Upper bound on the scratch buffer `decompress_into` needs.
pub use pipeline::estimate_decompress_scratch_size;
/// Per-run compression statistics.
pub use pipeline::Stats;

/// Error type for every fallible entry point in this crate.
pub use error::CoreError;

/// The event sequence the match finder produces and the packet codec
/// consumes.
pub use packet::Event;
/// Producer of `Event` sequences over a byte slice.
pub use finder::MatchFinder;
