//! Sparse byte-addressable memory image.
//!
//! HEX files routinely place a few kilobytes of code somewhere inside a 32-bit
//! address space, so the image is a map from address to byte rather than a
//! dense buffer. Addresses that were never written read back as zero.

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

/// A sparse memory image built from data records.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryImage {
    bytes: BTreeMap<u64, u8>,
}

impl MemoryImage {
    /// Create an empty image.
    pub fn new() -> Self {
        Self {
            bytes: BTreeMap::new(),
        }
    }

    /// Read a byte. Unmapped addresses read as 0.
    #[inline]
    pub fn read(&self, addr: u64) -> u8 {
        self.bytes.get(&addr).copied().unwrap_or(0)
    }

    /// Write a byte, replacing whatever was there.
    #[inline]
    pub fn write(&mut self, addr: u64, value: u8) {
        self.bytes.insert(addr, value);
    }

    /// Write a run of bytes starting at `base`.
    pub fn write_slice(&mut self, base: u64, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            self.write(base + i as u64, byte);
        }
    }

    /// Whether `addr` was written by any record.
    pub fn is_mapped(&self, addr: u64) -> bool {
        self.bytes.contains_key(&addr)
    }

    /// Largest mapped address, or `None` for an empty image.
    pub fn max_addr(&self) -> Option<u64> {
        self.bytes.keys().next_back().copied()
    }

    /// Number of mapped bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for MemoryImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryImage")
            .field("mapped_bytes", &self.bytes.len())
            .field("max_addr", &self.max_addr())
            .finish()
    }
}
