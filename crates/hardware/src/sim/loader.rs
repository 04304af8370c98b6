//! Program Image Loader.
//!
//! This module reads program images from disk and places them in the reference memory. It
//! performs:
//! 1. **Format detection:** ELF files are recognized by their magic; anything else is a flat
//!    binary.
//! 2. **ELF loading:** Loadable segments of a 32-bit little-endian RISC-V ELF, zero-filled to
//!    their memory size.
//! 3. **Installation:** Range-checked copies into the memory window.
//!
//! The core always boots at the reset vector; an ELF entry point elsewhere is reported but
//! not honoured.

use std::fs;
use std::path::Path;

use object::read::elf::ElfFile32;
use object::{Architecture, Endianness, Object, ObjectSegment};
use tracing::{debug, warn};

use crate::common::{RESET_PC, SimError};
use crate::soc::memory::Memory;

/// ELF identification magic.
const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// `e_ident[EI_CLASS]` value for 32-bit objects.
const ELF_CLASS_32: u8 = 1;

/// Loadable segment of an ELF image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Load address.
    pub addr: u32,
    /// Segment contents, zero-filled to the in-memory size.
    pub bytes: Vec<u8>,
}

/// A program image ready to be installed in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Image {
    /// Raw bytes placed at the memory base.
    Flat(Vec<u8>),
    /// Loadable segments of an ELF file.
    Elf {
        /// Entry point recorded in the ELF header.
        entry: u32,
        /// `PT_LOAD` segments in file order.
        segments: Vec<Segment>,
    },
}

impl Image {
    /// Parses an image from raw file contents.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Elf`] for a malformed ELF file and [`SimError::UnsupportedImage`]
    /// for an ELF file that is not 32-bit RISC-V.
    pub fn parse(data: &[u8]) -> Result<Self, SimError> {
        if !data.starts_with(ELF_MAGIC) {
            return Ok(Self::Flat(data.to_vec()));
        }
        if data.get(4) != Some(&ELF_CLASS_32) {
            return Err(SimError::UnsupportedImage("not a 32-bit ELF file".to_string()));
        }

        let elf = ElfFile32::<Endianness>::parse(data)?;
        if elf.architecture() != Architecture::Riscv32 {
            return Err(SimError::UnsupportedImage(format!(
                "expected RISC-V 32-bit, found {:?}",
                elf.architecture()
            )));
        }
        if !elf.is_little_endian() {
            return Err(SimError::UnsupportedImage("big-endian ELF".to_string()));
        }

        let mut segments = Vec::new();
        for seg in elf.segments() {
            let mut bytes = seg.data()?.to_vec();
            let mem_size = usize::try_from(seg.size())
                .map_err(|_| SimError::UnsupportedImage("segment too large".to_string()))?;
            if mem_size > bytes.len() {
                bytes.resize(mem_size, 0);
            }
            if bytes.is_empty() {
                continue;
            }
            segments.push(Segment {
                addr: seg.address() as u32,
                bytes,
            });
        }

        Ok(Self::Elf {
            entry: elf.entry() as u32,
            segments,
        })
    }

    /// Copies the image into memory.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageOutOfRange`] if a segment does not fit the memory window.
    pub fn install(&self, memory: &mut Memory) -> Result<(), SimError> {
        match self {
            Self::Flat(bytes) => memory.load_at(memory.base(), bytes),
            Self::Elf { entry, segments } => {
                if *entry != RESET_PC {
                    warn!(
                        entry = format_args!("{entry:#010x}"),
                        reset = format_args!("{RESET_PC:#010x}"),
                        "ELF entry point ignored, core boots at reset vector"
                    );
                }
                for seg in segments {
                    debug!(
                        addr = format_args!("{:#010x}", seg.addr),
                        len = seg.bytes.len(),
                        "loading segment"
                    );
                    memory.load_at(seg.addr, &seg.bytes)?;
                }
                Ok(())
            }
        }
    }

    /// Returns the total number of bytes the image occupies in memory.
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(bytes) => bytes.len(),
            Self::Elf { segments, .. } => segments.iter().map(|s| s.bytes.len()).sum(),
        }
    }

    /// Returns true for an image with no bytes to load.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads and parses a program image from disk.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or any error from [`Image::parse`].
pub fn load_image(path: impl AsRef<Path>) -> Result<Image, SimError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Image::parse(&data)
}
