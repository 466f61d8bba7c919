//! Binary entry point for the `mxc` command-line tool.
//!
//! Parses arguments, reads the whole input file, runs the core
//! compress/decompress pipeline, and writes the whole output file. No
//! directory expansion, multi-file batching, or streaming — a thin wrapper
//! around [`lza::pipeline`], matching spec.md §1's CLI-is-boundary-only
//! scope.

use clap::Parser;

use lza::cli::args::{Mode, ParsedArgs};
use lza::cli::constants::set_display_level;
use lza::io::{read_whole_file, write_whole_file};
use lza::{compress, decompress, display, displaylevel};

fn run(args: &ParsedArgs) -> anyhow::Result<()> {
    set_display_level(args.display_level());

    let input = read_whole_file(&args.input)
        .map_err(|e| anyhow::anyhow!("reading {}: {e}", args.input.display()))?;

    let output = match args.mode {
        Mode::Compress => {
            displaylevel!(3, "compressing {} ({} bytes)\n", args.input.display(), input.len());
            let (bytes, stats) = compress(&input, args.window)
                .map_err(|e| anyhow::anyhow!("compression failed: {e}"))?;
            displaylevel!(
                3,
                "{} literals, {} fresh matches, {} rep matches -> {} bytes\n",
                stats.literals,
                stats.matches,
                stats.rep_matches,
                stats.output_bytes
            );
            bytes
        }
        Mode::Decompress => {
            displaylevel!(3, "decompressing {}\n", args.input.display());
            decompress(&input).map_err(|e| anyhow::anyhow!("decompression failed: {e}"))?
        }
    };

    write_whole_file(&args.output, &output)
        .map_err(|e| anyhow::anyhow!("writing {}: {e}", args.output.display()))?;
    displaylevel!(2, "wrote {} bytes to {}\n", output.len(), args.output.display());
    Ok(())
}

fn main() {
    let args = ParsedArgs::parse();
    if let Err(e) = run(&args) {
        display!("mxc: {e}\n");
        std::process::exit(1);
    }
}
