//! Intel HEX input.
//!
//! Only the record types that shape a flat memory image are interpreted:
//! data (0x00), end-of-file (0x01) and extended linear address (0x04).
//! Everything else is decoded and then skipped. Checksums are not verified.

pub mod record;
pub mod parser;

pub use record::{Record, RecordError};
pub use parser::{load_ihex, parse_reader, parse_str};

use thiserror::Error;

/// Errors that can occur while reading an Intel HEX file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IhexError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}
