// readerctl-rs/readerctl/src/protocol/writer.rs

use crate::{Error, Result};

/// Control frame builder for requests that carry a length prefix.
///
/// Format: [Header(n)] [LenSlot(1|2)] [Body(m)]
///
/// The length slot is reserved when the builder is created and filled by
/// `finish()` with the number of body bytes written after it. Variable
/// sections are written with an explicit field width and rejected when
/// they do not fit.
#[derive(Debug)]
pub struct FrameWriter {
    buf: Vec<u8>,
    slot: Option<(usize, LenWidth)>,
}

/// Width (and byte order) of a length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LenWidth {
    /// One byte
    U8,
    /// Two bytes, little-endian
    U16Le,
}

impl LenWidth {
    pub fn max(self) -> usize {
        match self {
            Self::U8 => u8::MAX as usize,
            Self::U16Le => u16::MAX as usize,
        }
    }

    fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16Le => 2,
        }
    }

    fn write(self, out: &mut [u8], len: usize) {
        match self {
            Self::U8 => out[0] = len as u8,
            Self::U16Le => out[..2].copy_from_slice(&(len as u16).to_le_bytes()),
        }
    }
}

impl FrameWriter {
    /// Start a frame with no length slot.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            slot: None,
        }
    }

    /// Start a frame with `header`, followed by a reserved length slot.
    pub fn with_length_slot(header: &[u8], width: LenWidth) -> Self {
        let mut buf = Vec::with_capacity(header.len() + width.size() + 16);
        buf.extend_from_slice(header);
        let at = buf.len();
        buf.resize(at + width.size(), 0);
        Self {
            buf,
            slot: Some((at, width)),
        }
    }

    pub fn push(&mut self, b: u8) -> &mut Self {
        self.buf.push(b);
        self
    }

    pub fn extend(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Write `len(data)` in `width` followed by `data`. `None` writes a zero
    /// length and nothing else.
    pub fn length_prefixed(
        &mut self,
        field: &'static str,
        width: LenWidth,
        data: Option<&[u8]>,
    ) -> Result<&mut Self> {
        let data = data.unwrap_or(&[]);
        check_fits(field, width, data.len())?;
        let at = self.buf.len();
        self.buf.resize(at + width.size(), 0);
        width.write(&mut self.buf[at..], data.len());
        self.buf.extend_from_slice(data);
        Ok(self)
    }

    /// Fill the reserved length slot and return the frame.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if let Some((at, width)) = self.slot {
            let body = self.buf.len() - at - width.size();
            check_fits("frame body", width, body)?;
            width.write(&mut self.buf[at..], body);
        }
        Ok(self.buf)
    }
}

impl Default for FrameWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject `actual` when it cannot be represented in `width`.
pub fn check_fits(field: &'static str, width: LenWidth, actual: usize) -> Result<()> {
    if actual > width.max() {
        return Err(Error::FieldTooLong {
            field,
            max: width.max(),
            actual,
        });
    }
    Ok(())
}
