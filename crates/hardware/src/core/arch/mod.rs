//! Architectural state definitions.
//!
//! This module contains the architecturally visible elements of the core that are not plain
//! data words. It includes the following modules:
//! 1. **Modes:** The run state (running, halted, waiting for interrupt) and its transitions.

/// Run state definitions and transitions.
pub mod mode;
