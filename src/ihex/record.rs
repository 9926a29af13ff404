//! Intel HEX record decoding.
//!
//! A record line has the layout `:CCAAAATTDD...DDKK`:
//!
//! | chars  | field                          |
//! |--------|--------------------------------|
//! | 0      | `:` start code                 |
//! | 1–2    | byte count `CC`                |
//! | 3–6    | 16-bit address `AAAA`          |
//! | 7–8    | record type `TT`               |
//! | 9..    | `CC` data bytes, 2 chars each  |
//! | rest   | checksum `KK` (not validated)  |

use std::ops::Range;
use thiserror::Error;

/// Record start code.
pub const START_CODE: char = ':';

/// Record type codes.
pub mod types {
    pub const DATA: u8 = 0x00;
    pub const END_OF_FILE: u8 = 0x01;
    pub const EXTENDED_LINEAR_ADDRESS: u8 = 0x04;
}

const COUNT: Range<usize> = 1..3;
const ADDRESS: Range<usize> = 3..7;
const RECORD_TYPE: Range<usize> = 7..9;
const DATA_START: usize = 9;

/// A decoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Data bytes at a 16-bit offset from the current extended base.
    Data { offset: u16, bytes: Vec<u8> },
    /// End of file; nothing after it is read.
    EndOfFile,
    /// New upper 16 bits for subsequent data addresses.
    ExtendedLinearAddress(u16),
    /// An extended linear address record carrying fewer than 2 data bytes.
    ExtendedLinearAddressShort,
    /// Any record type that carries no meaning for the memory image.
    Other { rectype: u8 },
}

impl Record {
    /// Decode one record line. `line` must already be trimmed and start
    /// with `:`.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let count = hex_field(line, COUNT, "byte count")? as usize;
        let offset = hex_field(line, ADDRESS, "address")? as u16;
        let rectype = hex_field(line, RECORD_TYPE, "record type")? as u8;

        let bytes = (0..count)
            .map(|i| {
                let start = DATA_START + i * 2;
                hex_field(line, start..start + 2, "data byte").map(|b| b as u8)
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(match rectype {
            types::DATA => Record::Data { offset, bytes },
            types::END_OF_FILE => Record::EndOfFile,
            types::EXTENDED_LINEAR_ADDRESS => match bytes[..] {
                [hi, lo, ..] => Record::ExtendedLinearAddress(u16::from_be_bytes([hi, lo])),
                _ => Record::ExtendedLinearAddressShort,
            },
            rectype => Record::Other { rectype },
        })
    }
}

/// Read a fixed-position hex field.
fn hex_field(line: &str, range: Range<usize>, name: &'static str) -> Result<u32, RecordError> {
    if range.end > line.len() {
        return Err(RecordError::Truncated {
            field: name,
            offset: range.start,
        });
    }

    // Long enough, but the range splits a multi-byte character
    let Some(text) = line.get(range.clone()) else {
        let found = line
            .char_indices()
            .filter(|&(i, c)| i + c.len_utf8() > range.start && i < range.end)
            .map(|(_, c)| c)
            .find(|c| !c.is_ascii_hexdigit())
            .unwrap_or('?');
        return Err(RecordError::InvalidHex {
            field: name,
            offset: range.start,
            found,
        });
    };

    // from_str_radix would also accept a leading '+'
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(RecordError::InvalidHex {
            field: name,
            offset: range.start,
            found: bad,
        });
    }

    u32::from_str_radix(text, 16).map_err(|_| RecordError::InvalidHex {
        field: name,
        offset: range.start,
        found: '?',
    })
}

/// Errors that can occur while decoding a record line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("line too short for {field} at column {offset}")]
    Truncated { field: &'static str, offset: usize },

    #[error("invalid hex digit {found:?} in {field} at column {offset}")]
    InvalidHex {
        field: &'static str,
        offset: usize,
        found: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_record() {
        let rec = Record::parse(":0300300002337A1E").unwrap();
        assert_eq!(
            rec,
            Record::Data {
                offset: 0x0030,
                bytes: vec![0x02, 0x33, 0x7A]
            }
        );
    }

    #[test]
    fn test_lowercase_digits() {
        let rec = Record::parse(":02000000abcd00").unwrap();
        assert_eq!(
            rec,
            Record::Data {
                offset: 0,
                bytes: vec![0xAB, 0xCD]
            }
        );
    }

    #[test]
    fn test_end_of_file() {
        assert_eq!(Record::parse(":00000001FF").unwrap(), Record::EndOfFile);
    }

    #[test]
    fn test_extended_linear_address() {
        assert_eq!(
            Record::parse(":020000040001F9").unwrap(),
            Record::ExtendedLinearAddress(0x0001)
        );
        assert_eq!(
            Record::parse(":0100000400FB").unwrap(),
            Record::ExtendedLinearAddressShort
        );
    }

    #[test]
    fn test_unsupported_types_are_other() {
        assert_eq!(
            Record::parse(":020000021200EA").unwrap(),
            Record::Other { rectype: 0x02 }
        );
        assert_eq!(
            Record::parse(":0400000508000000EF").unwrap(),
            Record::Other { rectype: 0x05 }
        );
    }

    #[test]
    fn test_checksum_is_ignored() {
        // Wrong checksum, and missing checksum, both decode.
        assert!(Record::parse(":01000000AB00").is_ok());
        assert!(Record::parse(":01000000AB").is_ok());
    }

    #[test]
    fn test_truncated_header() {
        assert_eq!(
            Record::parse(":0100"),
            Err(RecordError::Truncated {
                field: "address",
                offset: 3
            })
        );
    }

    #[test]
    fn test_truncated_data() {
        let err = Record::parse(":0200000012").unwrap_err();
        assert_eq!(
            err,
            RecordError::Truncated {
                field: "data byte",
                offset: 11
            }
        );
    }

    #[test]
    fn test_invalid_hex() {
        let err = Record::parse(":01000000G100").unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidHex {
                field: "data byte",
                offset: 9,
                found: 'G'
            }
        );
        assert!(Record::parse(":+1000000AB").is_err());
    }

    #[test]
    fn test_non_ascii_is_invalid_hex() {
        assert_eq!(
            Record::parse(":0é000000"),
            Err(RecordError::InvalidHex {
                field: "byte count",
                offset: 1,
                found: 'é'
            })
        );
        assert_eq!(
            Record::parse(":01000000Aé"),
            Err(RecordError::InvalidHex {
                field: "data byte",
                offset: 9,
                found: 'é'
            })
        );
    }
}
