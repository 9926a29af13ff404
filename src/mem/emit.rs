//! Word emitter.
//!
//! Walks a memory image from address 0 up to its highest mapped byte in
//! steps of one word and formats each word as a line of text:
//!
//! ```text
//! plain:         1234
//! memory array:  memory[0] = 16'h1234;
//! ```
//!
//! Line order is address order, which is also array index order.

use std::io::{self, Write};
use std::num::NonZeroUsize;
use log::debug;
use crate::mem::{MemoryImage, Word};

/// How each word is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Bare zero-padded hex, one word per line.
    #[default]
    Plain,
    /// `memory[INDEX] = BITS'hHEX;` assignment statements.
    MemoryArray,
}

impl OutputMode {
    /// Format one word as an output line (without the newline).
    pub fn format(&self, index: usize, word: &Word) -> String {
        match self {
            OutputMode::Plain => format!("{:x}", word),
            OutputMode::MemoryArray => {
                format!("memory[{}] = {}'h{:x};", index, word.bit_width(), word)
            }
        }
    }
}

/// Iterator over the words of an image, yielding `(index, word)`.
pub struct Words<'a> {
    image: &'a MemoryImage,
    width: NonZeroUsize,
    /// Address of the next word, or `None` once past the end.
    next_addr: Option<u64>,
    max_addr: u64,
    index: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, Word);

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.next_addr?;
        if addr > self.max_addr {
            self.next_addr = None;
            return None;
        }

        let word = Word::read(self.image, addr, self.width);
        let index = self.index;

        self.index += 1;
        self.next_addr = addr.checked_add(self.width.get() as u64);
        Some((index, word))
    }
}

/// Iterate the words of `image`, `width` bytes each.
///
/// An empty image yields nothing.
pub fn words(image: &MemoryImage, width: NonZeroUsize) -> Words<'_> {
    let max_addr = image.max_addr();
    Words {
        image,
        width,
        next_addr: max_addr.map(|_| 0),
        max_addr: max_addr.unwrap_or(0),
        index: 0,
    }
}

/// Number of words `words` will yield: `ceil((max_addr + 1) / width)`.
pub fn word_count(image: &MemoryImage, width: NonZeroUsize) -> u64 {
    match image.max_addr() {
        Some(max) => max / width.get() as u64 + 1,
        None => 0,
    }
}

/// Write every word of `image` to `out`, one line each.
pub fn emit<W: Write>(
    image: &MemoryImage,
    width: NonZeroUsize,
    mode: OutputMode,
    out: &mut W,
) -> io::Result<()> {
    debug!(
        "emitting {} words of {} bytes ({:?})",
        word_count(image, width),
        width,
        mode
    );

    for (index, word) in words(image, width) {
        writeln!(out, "{}", mode.format(index, &word))?;
    }
    Ok(())
}

/// Render every word of `image` into a single newline-terminated string.
pub fn emit_to_string(image: &MemoryImage, width: NonZeroUsize, mode: OutputMode) -> String {
    let mut out = String::new();
    for (index, word) in words(image, width) {
        out.push_str(&mode.format(index, &word));
        out.push('\n');
    }
    out
}
