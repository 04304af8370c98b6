//! Program image loading: flat binaries and 32-bit RISC-V ELF files.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use rvseq_core::common::SimError;
use rvseq_core::sim::loader::Segment;
use rvseq_core::sim::{Image, load_image};
use rvseq_core::soc::memory::Memory;

const EM_386: u16 = 3;
const EM_RISCV: u16 = 243;

/// Builds an ELF32 little-endian executable with one `PT_LOAD` segment.
fn elf32(machine: u16, entry: u32, vaddr: u32, payload: &[u8], mem_size: u32) -> Vec<u8> {
    const EHDR: u32 = 52;
    const PHDR: u32 = 32;
    let mut out = Vec::new();
    out.extend_from_slice(b"\x7fELF");
    out.extend_from_slice(&[1, 1, 1, 0]);
    out.extend_from_slice(&[0; 8]);
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&machine.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&entry.to_le_bytes());
    out.extend_from_slice(&EHDR.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(EHDR as u16).to_le_bytes());
    out.extend_from_slice(&(PHDR as u16).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&40u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    assert_eq!(out.len(), EHDR as usize);

    let fields = [
        1,
        EHDR + PHDR,
        vaddr,
        vaddr,
        payload.len() as u32,
        mem_size,
        5,
        4,
    ];
    for f in fields {
        out.extend_from_slice(&f.to_le_bytes());
    }
    out.extend_from_slice(payload);
    out
}

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn flat_binary_loads_at_base() {
    let file = write_temp(&[0x13, 0x00, 0x00, 0x00, 0x73, 0x00, 0x50, 0x10]);
    let image = load_image(file.path()).unwrap();
    assert!(matches!(image, Image::Flat(ref b) if b.len() == 8));
    assert_eq!(image.len(), 8);

    let mut mem = Memory::new(0x100, 64);
    image.install(&mut mem).unwrap();
    assert_eq!(mem.read_word(0x100), 0x13);
    assert_eq!(mem.read_word(0x104), 0x1050_0073);
}

#[test]
fn empty_file_is_empty_flat_image() {
    let file = write_temp(&[]);
    let image = load_image(file.path()).unwrap();
    assert!(image.is_empty());
}

#[test]
fn elf_segments_zero_filled_to_memory_size() {
    let data = elf32(EM_RISCV, 0, 0x40, &[1, 2, 3, 4], 8);
    let image = Image::parse(&data).unwrap();
    assert_eq!(
        image,
        Image::Elf {
            entry: 0,
            segments: vec![Segment {
                addr: 0x40,
                bytes: vec![1, 2, 3, 4, 0, 0, 0, 0],
            }],
        }
    );

    let mut mem = Memory::new(0, 0x100);
    mem.write_lanes(0x44, 0b1111, u32::MAX);
    image.install(&mut mem).unwrap();
    assert_eq!(mem.read_word(0x40), 0x0403_0201);
    assert_eq!(mem.read_word(0x44), 0);
}

#[test]
fn elf_entry_elsewhere_still_installs() {
    let data = elf32(EM_RISCV, 0x8000, 0, &[0x13, 0, 0, 0], 4);
    let file = write_temp(&data);
    let image = load_image(file.path()).unwrap();
    assert!(matches!(image, Image::Elf { entry: 0x8000, .. }));

    let mut mem = Memory::new(0, 16);
    image.install(&mut mem).unwrap();
    assert_eq!(mem.read_word(0), 0x13);
}

#[test]
fn elf_segment_outside_memory() {
    let data = elf32(EM_RISCV, 0, 0x1000, &[0; 4], 4);
    let image = Image::parse(&data).unwrap();
    let mut mem = Memory::new(0, 0x100);
    let err = image.install(&mut mem).unwrap_err();
    assert!(matches!(err, SimError::ImageOutOfRange { addr: 0x1000, len: 4 }));
}

#[test]
fn rejects_other_architectures() {
    let data = elf32(EM_386, 0, 0, &[0; 4], 4);
    let err = Image::parse(&data).unwrap_err();
    assert!(matches!(err, SimError::UnsupportedImage(_)));
}

#[test]
fn rejects_64_bit_class() {
    let mut data = elf32(EM_RISCV, 0, 0, &[0; 4], 4);
    data[4] = 2;
    let err = Image::parse(&data).unwrap_err();
    assert!(matches!(err, SimError::UnsupportedImage(_)));
}

#[test]
fn truncated_elf_is_malformed() {
    let err = Image::parse(b"\x7fELF\x01\x01\x01").unwrap_err();
    assert!(matches!(err, SimError::Elf(_)));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");
    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, SimError::Io { ref path, .. } if path.ends_with("missing.bin")));
    assert!(err.to_string().contains("missing.bin"));
}
