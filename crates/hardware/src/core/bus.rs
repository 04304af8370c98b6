//! Instruction and data port handshake.
//!
//! The core talks to the memory side over two independent request/ready channels. Because
//! a port's response is combinationally related to its request within the same cycle, the
//! core drives both channels through the [`CoreBus`] trait: each method is called at most
//! once per tick with the request the core is asserting this cycle, and returns what the
//! memory side presents on `read_data`, `ready` and `error` in that cycle.
//!
//! A response with `ready` low means the transfer did not complete. The core holds and
//! presents the identical request again on the next cycle; the memory side never sees more
//! than one outstanding request per port.

use crate::common::data::AccessType;

/// Request asserted on the instruction port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    /// Word-aligned fetch address (the current PC).
    pub address: u32,
}

impl FetchRequest {
    /// Returns the access kind, always [`AccessType::Fetch`].
    pub const fn access_type(&self) -> AccessType {
        AccessType::Fetch
    }
}

/// Response presented on the instruction port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchResponse {
    /// Instruction word; only meaningful while `ready` is high.
    pub read_data: u32,
    /// Transfer completed this cycle.
    pub ready: bool,
    /// Transfer completed with an error.
    pub error: bool,
}

impl FetchResponse {
    /// A response that holds the core for another cycle.
    pub const NOT_READY: Self = Self {
        read_data: 0,
        ready: false,
        error: false,
    };

    /// A successful response carrying `read_data`.
    pub const fn ok(read_data: u32) -> Self {
        Self {
            read_data,
            ready: true,
            error: false,
        }
    }
}

/// Request asserted on the data port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DataRequest {
    /// High for stores, low for loads.
    pub write_enable: bool,
    /// Byte-lane enables; bit `i` selects byte `i` of the addressed word.
    pub byte_enable: u8,
    /// Effective byte address.
    pub address: u32,
    /// Store data: the unshifted value of `rs2`.
    pub write_data: u32,
}

impl DataRequest {
    /// Returns whether this request reads or writes memory.
    pub const fn access_type(&self) -> AccessType {
        if self.write_enable {
            AccessType::Write
        } else {
            AccessType::Read
        }
    }
}

/// Response presented on the data port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataResponse {
    /// Word containing the addressed bytes; ignored for stores.
    pub read_data: u32,
    /// Transfer completed this cycle.
    pub ready: bool,
    /// Transfer completed with an error.
    pub error: bool,
}

impl DataResponse {
    /// A response that holds the core for another cycle.
    pub const NOT_READY: Self = Self {
        read_data: 0,
        ready: false,
        error: false,
    };

    /// A successful response carrying `read_data`.
    pub const fn ok(read_data: u32) -> Self {
        Self {
            read_data,
            ready: true,
            error: false,
        }
    }
}

/// The memory side as seen from the core.
///
/// Implementors model whatever sits behind the two ports (a flat memory, a wait-state
/// model, a scripted test double). Neither method is called unless the core asserts a
/// request on that port in the current cycle.
pub trait CoreBus {
    /// Presents an instruction-port request for this cycle and returns the response.
    fn fetch(&mut self, req: &FetchRequest) -> FetchResponse;

    /// Presents a data-port request for this cycle and returns the response.
    fn data(&mut self, req: &DataRequest) -> DataResponse;
}
