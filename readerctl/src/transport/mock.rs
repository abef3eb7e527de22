// readerctl-rs/readerctl/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent payloads and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Record control calls: (identifier, payload)
    pub controls: Vec<(u32, Vec<u8>)>,
    /// Record application commands
    pub commands: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of send_control calls that should fail
    pub control_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent send_control calls should fail (for tests).
    pub fn set_control_failures(&mut self, n: usize) {
        self.control_failures = n;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Identifiers of every control call, in order.
    pub fn control_identifiers(&self) -> Vec<u32> {
        self.controls.iter().map(|(id, _)| *id).collect()
    }

    fn next_response(&mut self) -> Result<Vec<u8>> {
        if self.responses.is_empty() {
            Err(Error::Transport("mock: no queued response".into()))
        } else {
            Ok(self.responses.remove(0))
        }
    }
}

impl Transport for MockTransport {
    fn send_control(&mut self, identifier: u32, payload: &[u8]) -> Result<Vec<u8>> {
        self.controls.push((identifier, payload.to_vec()));
        // Simulate reader failures when configured by tests.
        if self.control_failures > 0 {
            self.control_failures -= 1;
            return Err(Error::Transport("mock: simulated control failure".into()));
        }
        self.next_response()
    }

    fn send_application_command(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.commands.push(command.to_vec());
        self.next_response()
    }
}
