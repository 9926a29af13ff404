//! Intel HEX → memory image.

use std::io::{BufRead, BufReader};
use std::path::Path;
use log::{debug, trace};
use crate::ihex::record::{Record, START_CODE};
use crate::ihex::IhexError;
use crate::mem::MemoryImage;

/// Load an Intel HEX file from disk.
pub fn load_ihex<P: AsRef<Path>>(path: P) -> Result<MemoryImage, IhexError> {
    let file = std::fs::File::open(path.as_ref())
        .map_err(|e| IhexError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
    parse_reader(BufReader::new(file))
}

/// Parse Intel HEX text held in memory.
pub fn parse_str(source: &str) -> Result<MemoryImage, IhexError> {
    parse_reader(source.as_bytes())
}

/// Parse Intel HEX records line by line until an end-of-file record or the
/// end of input.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<MemoryImage, IhexError> {
    let mut image = MemoryImage::new();
    let mut extended_base: u16 = 0;
    let mut records = 0usize;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| IhexError::Io(e.to_string()))?;
        let line = line.trim();

        if !line.starts_with(START_CODE) {
            continue;
        }

        let record = Record::parse(line).map_err(|e| IhexError::Parse {
            line: line_num + 1,
            message: e.to_string(),
        })?;
        trace!("line {}: {:?}", line_num + 1, record);
        records += 1;

        match record {
            Record::Data { offset, bytes } => {
                let base = ((extended_base as u64) << 16) + offset as u64;
                image.write_slice(base, &bytes);
            }
            Record::EndOfFile => break,
            Record::ExtendedLinearAddress(upper) => extended_base = upper,
            Record::ExtendedLinearAddressShort | Record::Other { .. } => {}
        }
    }

    debug!(
        "parsed {} records into {} mapped bytes (max address {:?})",
        records,
        image.len(),
        image.max_addr()
    );
    Ok(image)
}
