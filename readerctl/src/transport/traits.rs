// readerctl-rs/readerctl/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts I/O away from protocol/session logic.
///
/// Implementations operate on an already-connected card session and block
/// until the reader answers.
pub trait Transport {
    /// Send a control command (SCardControl) addressed by `identifier` and
    /// return the reader's response bytes.
    fn send_control(&mut self, identifier: u32, payload: &[u8]) -> Result<Vec<u8>>;

    /// Send an application command (SCardTransmit) and return the response
    /// including the status word.
    fn send_application_command(&mut self, command: &[u8]) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_control(&mut self, identifier: u32, payload: &[u8]) -> Result<Vec<u8>> {
        (**self).send_control(identifier, payload)
    }

    fn send_application_command(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).send_application_command(command)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send_control(&mut self, identifier: u32, payload: &[u8]) -> Result<Vec<u8>> {
        (**self).send_control(identifier, payload)
    }

    fn send_application_command(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).send_application_command(command)
    }
}
