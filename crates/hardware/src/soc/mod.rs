//! Reference Memory Side.
//!
//! This module organizes the components that answer the core's instruction and data ports:
//! a flat memory, per-port wait-state models, and the `System` that combines them. There is
//! no address decoding: one window answers every address.

/// `System` construction and the `CoreBus` implementation.
pub mod builder;

/// Flat memory and wait-state handshake model.
pub mod memory;

pub use builder::System;
