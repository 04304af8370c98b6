//! Host-side error definitions.
//!
//! The execution core has no failure path: malformed instructions retire as no-ops and port
//! errors complete like normal transfers. Errors only arise around the core, when the host
//! loads program images or parses configuration. This module provides:
//! 1. **Image Errors:** I/O failures, ELF parse failures and images that do not fit memory.
//! 2. **Configuration Errors:** Malformed JSON configuration documents.

use std::path::PathBuf;

/// Errors raised by the loader, configuration parser and simulator setup.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A program image or configuration file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The image looked like an ELF file but could not be parsed.
    #[error("malformed ELF image: {0}")]
    Elf(#[from] object::Error),

    /// The image parsed but cannot run on this core (wrong class or architecture).
    #[error("unsupported image: {0}")]
    UnsupportedImage(String),

    /// A segment of the image falls outside the memory window.
    #[error("image segment at {addr:#010x} ({len} bytes) does not fit in memory")]
    ImageOutOfRange {
        /// Load address of the offending segment.
        addr: u64,
        /// Length of the offending segment in bytes.
        len: usize,
    },

    /// The configuration document is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
