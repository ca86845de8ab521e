//! Shared sinks for integration tests.
//!
//! Each sink records every byte it accepts and how many times `write` was
//! called, so tests can assert both the reported byte count and that nothing
//! was attempted after a failure.

#![allow(dead_code)]

use std::io::{self, Write};

/// Fails the `fail_at`-th call to `write` (1-based) and every call after it.
pub struct FailOnNthWrite {
    pub out: Vec<u8>,
    pub calls: usize,
    fail_at: usize,
}

impl FailOnNthWrite {
    pub fn new(fail_at: usize) -> Self {
        Self {
            out: Vec::new(),
            calls: 0,
            fail_at,
        }
    }
}

impl Write for FailOnNthWrite {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls >= self.fail_at {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.out.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts `budget` bytes in total, then errors. The last accepted write may
/// be short.
pub struct ByteBudget {
    pub out: Vec<u8>,
    pub calls: usize,
    remaining: usize,
}

impl ByteBudget {
    pub fn new(budget: usize) -> Self {
        Self {
            out: Vec::new(),
            calls: 0,
            remaining: budget,
        }
    }
}

impl Write for ByteBudget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.remaining == 0 {
            return Err(io::Error::other("budget exhausted"));
        }
        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        self.out.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Never fails; counts calls.
#[derive(Default)]
pub struct Recorder {
    pub out: Vec<u8>,
    pub calls: usize,
}

impl Write for Recorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        self.out.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
