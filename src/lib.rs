//! # hex2mem
//!
//! Converts Intel HEX firmware images into fixed-width words for
//! initializing simulated memories, either as bare hex lines (for
//! `$readmemh`) or as `memory[i] = N'h...;` assignments.
//!
//! The conversion is two steps: [`ihex::load_ihex`] rebuilds the sparse
//! memory image, then [`mem::emit`] packs it into words in address order,
//! with unmapped bytes read as zero.

pub mod ihex;
pub mod mem;

#[cfg(feature = "wasm")]
pub mod wasm;


// Re-export commonly used types
pub use ihex::{load_ihex, parse_str, IhexError, Record};
pub use mem::{emit, emit_to_string, words, MemoryImage, OutputMode, Word};
