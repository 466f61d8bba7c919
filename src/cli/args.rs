//! Command-line argument definition for the `mxc` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::PROB_WINDOW_DEFAULT;

/// Mode the tool runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    Compress,
    Decompress,
}

/// Self-extracting executable compressor: LZMA-dialect match finder,
/// packet codec, and adaptive arithmetic coder.
#[derive(Debug, Parser)]
#[command(name = "mxc", version, about)]
pub struct ParsedArgs {
    /// Operation to perform.
    #[arg(value_enum)]
    pub mode: Mode,

    /// Input file. Reads the whole file into memory.
    pub input: PathBuf,

    /// Output file. Written in one shot.
    pub output: PathBuf,

    /// Probability-model sliding-window width in bits, 1..=2048. Only
    /// meaningful when compressing; ignored (and read from the container
    /// header instead) when decompressing.
    #[arg(short = 'w', long, default_value_t = PROB_WINDOW_DEFAULT, value_parser = clap::value_parser!(u32).range(1..=2048))]
    pub window: u32,

    /// Increase verbosity; repeatable.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl ParsedArgs {
    /// Resolves `-v`/`-q` into the `cli::constants` display-level scale.
    pub fn display_level(&self) -> u32 {
        if self.quiet {
            0
        } else {
            (2 + self.verbose as u32).min(4)
        }
    }
}
