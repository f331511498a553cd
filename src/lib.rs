// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Hello, World!
//!
//! This crate provides the greeting printed by the `hello` binary and the
//! routine used to write it.
//!
//! # Quick Start
//!
//! Printing the greeting to standard output:
//!
//! ```no_run
//! use hello::io;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     io::print_greeting()
//! }
//! ```
//!
//! Writing the greeting somewhere else:
//!
//! ```
//! use hello::io;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut buffer = Vec::new();
//!     io::write_greeting(&mut buffer)?;
//!     assert_eq!(buffer, b"Hello, World!\n");
//!     Ok(())
//! }
//! ```
//!
//! # Output
//!
//! | Stream | Content                 |
//! |--------|-------------------------|
//! | stdout | `Hello, World!` + `\n`  |
//! | stderr | nothing                 |

pub mod io;

/// The text written by [io::write_greeting]. It is emitted unmodified.
pub const GREETING: &str = "Hello, World!";

/// Returns the [GREETING].
///
/// ```
/// assert_eq!(hello::greeting(), "Hello, World!");
/// ```
pub fn greeting() -> &'static str {
    GREETING
}
