//! Error taxonomy for the compression core.
//!
//! Mirrors the kinds from the design's error-handling section: allocation
//! failure and malformed input are the only conditions a caller can recover
//! from. Buffer-too-small and internal-invariant violations are programmer
//! bugs and are asserted rather than returned (see `debug_assert!` call
//! sites in `bitstream.rs`, `arith.rs`, and `packet.rs`).

use std::fmt;

/// Errors returned by the public `compress`/`decompress` entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    /// The match finder could not allocate its offset map.
    AllocationFailure,
    /// A compressed container failed validation on decode: its declared
    /// stream lengths overrun the payload, or a copy instruction referenced
    /// bytes not yet produced.
    MalformedInput,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::AllocationFailure => write!(f, "failed to allocate match finder state"),
            CoreError::MalformedInput => write!(f, "compressed container is malformed"),
        }
    }
}

impl std::error::Error for CoreError {}
