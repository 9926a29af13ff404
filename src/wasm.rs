//! WebAssembly bindings for hex2mem.
//!
//! Exposes the conversion over strings so a browser page can turn a pasted
//! HEX file into memory initialization lines without touching the disk.

use std::num::NonZeroUsize;
use wasm_bindgen::prelude::*;
use crate::ihex::parse_str;
use crate::mem::{emit_to_string, MemoryImage, OutputMode};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn output_mode(memory: bool) -> OutputMode {
    if memory {
        OutputMode::MemoryArray
    } else {
        OutputMode::Plain
    }
}

fn word_width(bytes_per_word: usize) -> Result<NonZeroUsize, JsError> {
    NonZeroUsize::new(bytes_per_word).ok_or_else(|| JsError::new("bytes_per_word must be at least 1"))
}

/// Convert HEX text into newline-separated output lines.
#[wasm_bindgen]
pub fn convert(source: &str, bytes_per_word: usize, memory: bool) -> Result<String, JsError> {
    let width = word_width(bytes_per_word)?;
    let image = parse_str(source).map_err(|e| JsError::new(&format!("{}", e)))?;
    Ok(emit_to_string(&image, width, output_mode(memory)))
}

/// A parsed image kept on the Rust side so it can be re-emitted at
/// different widths without parsing again.
#[wasm_bindgen]
pub struct WasmImage {
    image: MemoryImage,
}

#[wasm_bindgen]
impl WasmImage {
    /// Parse HEX text.
    #[wasm_bindgen(constructor)]
    pub fn new(source: &str) -> Result<WasmImage, JsError> {
        let image = parse_str(source).map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(Self { image })
    }

    /// Number of mapped bytes.
    #[wasm_bindgen]
    pub fn mapped_bytes(&self) -> usize {
        self.image.len()
    }

    /// Highest mapped address, or -1 when the image is empty.
    #[wasm_bindgen]
    pub fn max_addr(&self) -> f64 {
        self.image.max_addr().map(|a| a as f64).unwrap_or(-1.0)
    }

    /// Emit the image as words.
    #[wasm_bindgen]
    pub fn emit(&self, bytes_per_word: usize, memory: bool) -> Result<String, JsError> {
        let width = word_width(bytes_per_word)?;
        Ok(emit_to_string(&self.image, width, output_mode(memory)))
    }

    /// The sparse image as JSON.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.image).map_err(|e| JsError::new(&format!("{}", e)))
    }
}
