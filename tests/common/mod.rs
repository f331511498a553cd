// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{Error, ErrorKind, Result, Write};

/// A sink that rejects every write, like stdout redirected to a closed pipe.
pub struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::from(ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> Result<()> {
        Err(Error::from(ErrorKind::BrokenPipe))
    }
}

/// A sink that accepts writes but fails to flush them.
#[derive(Default)]
pub struct Unflushable {
    pub written: Vec<u8>,
}

impl Write for Unflushable {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        Err(Error::other("device gone"))
    }
}
