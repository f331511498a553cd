// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{stdout, Write};

use anyhow::{Context, Result};

use crate::{greeting, GREETING};

/// Writes the [GREETING] followed by a newline to `out` and flushes it. If
/// `out` cannot accept the write an error will be returned.
pub fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    let line = format!("{}\n", greeting());
    out.write_all(line.as_bytes())
        .context("failed to write greeting")?;
    out.flush().context("failed to flush greeting")?;
    Ok(())
}

/// Writes the [GREETING] to standard output. If the write fails, e.g. the
/// reading end of a pipe has gone away, an error will be returned.
pub fn print_greeting() -> Result<()> {
    let mut out = stdout().lock();
    write_greeting(&mut out)
}
