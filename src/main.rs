//! hex2mem - CLI Entry Point
//!
//! Usage:
//! - `hex2mem <infile> <bytes_per_word>` - bare hex words, one per line
//! - `hex2mem <infile> <bytes_per_word> memory` - `memory[i] = N'h...;` lines
//! - `hex2mem --dump-image <infile> <bytes_per_word>` - parsed image as JSON

use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use clap::Parser;
use hex2mem::{load_ihex, MemoryImage, OutputMode};

#[derive(Parser)]
#[command(name = "hex2mem")]
#[command(version = "0.1.0")]
#[command(about = "Convert an Intel HEX image into memory initialization words")]
struct Cli {
    /// Path to the Intel HEX file
    infile: PathBuf,
    /// Word width in bytes (still required, but unused, with --dump-image)
    bytes_per_word: NonZeroUsize,
    /// Any argument here, even one starting with `-`, selects
    /// `memory[i] = ...;` output; values and extras are ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    memory: Vec<String>,
    /// Print the parsed memory image as JSON instead of words.
    /// Must come before the memory argument, which swallows everything after it
    #[arg(long)]
    dump_image: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    let image = match load_ihex(&cli.infile) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mode = if !cli.memory.is_empty() {
        OutputMode::MemoryArray
    } else {
        OutputMode::Plain
    };

    let result = if cli.dump_image {
        dump_image(&image)
    } else {
        write_words(&image, cli.bytes_per_word, mode)
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn write_words(image: &MemoryImage, width: NonZeroUsize, mode: OutputMode) -> io::Result<()> {
    if image.is_empty() {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    hex2mem::emit(image, width, mode, &mut out)?;
    out.flush()
}

fn dump_image(image: &MemoryImage) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    serde_json::to_writer(&mut out, image)?;
    writeln!(out)?;
    out.flush()
}
