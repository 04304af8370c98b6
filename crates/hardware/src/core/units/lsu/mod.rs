//! Load/Store Unit (LSU).
//!
//! Converts an access width and address into data-port byte lanes, and aligns
//! and extends load data returned by the memory side.
//!
//! Lane `i` of the data port corresponds to byte `i` of the addressed word.
//! Lanes that would extend past the word boundary are dropped rather than
//! spilled into the next word, so a misaligned half or word access touches
//! only the lanes that fit.

use crate::common::constants::{ALL_LANES, BYTE_OFFSET_MASK};
use crate::common::data::MemWidth;

/// Returns the byte-lane enable mask for an access.
///
/// # Examples
///
/// ```
/// use rvseq_core::common::MemWidth;
/// use rvseq_core::core::units::lsu::byte_lanes;
///
/// assert_eq!(byte_lanes(MemWidth::Word, 0x100), 0b1111);
/// assert_eq!(byte_lanes(MemWidth::Byte, 0x101), 0b0010);
/// assert_eq!(byte_lanes(MemWidth::Half, 0x102), 0b1100);
/// assert_eq!(byte_lanes(MemWidth::Half, 0x103), 0b1000);
/// ```
pub const fn byte_lanes(width: MemWidth, addr: u32) -> u8 {
    (width.lane_mask() << (addr & BYTE_OFFSET_MASK)) & ALL_LANES
}

/// Aligns and extends raw load data.
///
/// The memory side returns the whole addressed word; the requested bytes are
/// shifted down by the byte offset and then zero- or sign-extended.
///
/// # Arguments
///
/// * `raw`    - Word returned on the data port.
/// * `addr`   - Effective address of the load.
/// * `width`  - Access width.
/// * `signed` - Sign-extend when true, zero-extend otherwise.
pub const fn extend_load(raw: u32, addr: u32, width: MemWidth, signed: bool) -> u32 {
    let shifted = raw >> ((addr & BYTE_OFFSET_MASK) * 8);
    match (width, signed) {
        (MemWidth::Byte, true) => shifted as u8 as i8 as i32 as u32,
        (MemWidth::Byte, false) => shifted & 0xFF,
        (MemWidth::Half, true) => shifted as u16 as i16 as i32 as u32,
        (MemWidth::Half, false) => shifted & 0xFFFF,
        (MemWidth::Word | MemWidth::Nop, _) => shifted,
    }
}
