//! # homedemo-adapter-console
//!
//! Terminal adapter implementing the `Console` and `LineSource` ports.
//!
//! ## Output framing
//!
//! | Call | Stream | Line |
//! |------|--------|------|
//! | `info(msg)` | stdout | `[INFO] msg` |
//! | `error(msg)` | stderr | `[ERROR] msg` |
//! | `prompt(text)` | stdout | `text` (no newline, flushed) |
//!
//! ## Dependency rule
//!
//! Depends on `homedemo-app` (port traits) only.

mod input;
mod output;

pub use input::{ReaderLines, StdinLines};
pub use output::{StdConsole, WriterConsole};
