//! Fixed-width memory words.

use std::fmt;
use std::num::NonZeroUsize;
use crate::mem::MemoryImage;

/// A word of `width` bytes, most significant byte first.
///
/// Stored as raw bytes so that any width can be represented; the numeric
/// value always satisfies `0 <= value < 256^width`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Word {
    /// Bytes from most significant (index 0) to least significant.
    bytes: Vec<u8>,
}

impl Word {
    /// Create a word from big-endian bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.is_empty());
        Self { bytes }
    }

    /// Read `width` consecutive bytes of `image` starting at `addr`.
    ///
    /// The byte at `addr` becomes the most significant one. Unmapped bytes,
    /// including any past the end of the image, are zero.
    pub fn read(image: &MemoryImage, addr: u64, width: NonZeroUsize) -> Self {
        let bytes = (0..width.get() as u64)
            .map(|i| image.read(addr + i))
            .collect();
        Self { bytes }
    }

    /// Width in bytes.
    #[inline]
    pub fn width(&self) -> usize {
        self.bytes.len()
    }

    /// Width in bits.
    #[inline]
    pub fn bit_width(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Big-endian bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Numeric value, if the word fits in a `u128`.
    pub fn value(&self) -> Option<u128> {
        if self.bytes.len() > 16 {
            return None;
        }
        Some(self.bytes.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128))
    }
}

/// Lowercase hex, zero-padded to `2 * width` digits.
impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({}'h{:x})", self.bit_width(), self)
    }
}
