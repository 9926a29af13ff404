//! Memory image and word emission.
//!
//! This module provides:
//! - `MemoryImage`: the sparse address → byte map a HEX file describes
//! - `Word`: a fixed-width big-endian group of bytes
//! - The emitter that turns an image into ordered output lines

pub mod image;
pub mod word;
pub mod emit;

pub use image::MemoryImage;
pub use word::Word;
pub use emit::{emit, emit_to_string, word_count, words, OutputMode, Words};
