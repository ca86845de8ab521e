//! Fragment writer for tag rendering.

use std::io::{self, Write};

use crate::error::{Error, Result};

/// Writes tag fragments to a sink, one write attempt per fragment.
///
/// The first failure is latched: later fragments are skipped without touching
/// the sink, while the bytes accepted so far stay counted.
pub(crate) struct FragmentWriter<'w, W: Write + ?Sized> {
    inner: &'w mut W,
    written: u64,
    error: Option<io::Error>,
}

impl<'w, W: Write + ?Sized> FragmentWriter<'w, W> {
    pub(crate) fn new(inner: &'w mut W) -> Self {
        Self {
            inner,
            written: 0,
            error: None,
        }
    }

    /// Write one fragment in full, unless an earlier fragment failed.
    pub(crate) fn put(&mut self, fragment: &str) {
        if self.error.is_some() {
            return;
        }

        let mut buf = fragment.as_bytes();
        while !buf.is_empty() {
            match self.inner.write(buf) {
                Ok(0) => {
                    self.error = Some(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "short write",
                    ));
                    return;
                }
                Ok(n) => {
                    self.written += n as u64;
                    buf = &buf[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(e);
                    return;
                }
            }
        }
    }

    /// Total bytes written, or the first error with the bytes written before it.
    pub(crate) fn finish(self) -> Result<u64> {
        match self.error {
            None => Ok(self.written),
            Some(source) => Err(Error::write(self.written, source)),
        }
    }
}
