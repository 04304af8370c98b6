//! Wait-state handshake model.
//!
//! Each port of the memory side holds `ready` low for a fixed number of cycles per request,
//! then completes it. The countdown restarts whenever a new request appears, either because
//! the previous one completed or because the presented request changed. A request presented
//! again after it completed counts as new, which is how a fetch re-issued behind a data-port
//! stall pays its wait states a second time.

/// Ready/wait-state tracker for one port.
///
/// Generic over the request type so the same model serves the instruction and data ports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitStates<R> {
    wait_states: u32,
    pending: Option<(R, u32)>,
}

impl<R: Copy + PartialEq> WaitStates<R> {
    /// Creates a tracker that stalls each request for `wait_states` cycles.
    pub const fn new(wait_states: u32) -> Self {
        Self {
            wait_states,
            pending: None,
        }
    }

    /// Returns the configured number of wait states.
    pub const fn wait_states(&self) -> u32 {
        self.wait_states
    }

    /// Observes the request presented this cycle and returns the `ready` level.
    pub fn poll(&mut self, req: &R) -> bool {
        let remaining = match self.pending {
            Some((prev, left)) if prev == *req => left,
            _ => self.wait_states,
        };
        if remaining == 0 {
            self.pending = None;
            true
        } else {
            self.pending = Some((*req, remaining - 1));
            false
        }
    }

    /// Drops any partially served request.
    pub const fn clear(&mut self) {
        self.pending = None;
    }
}
