//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the terminal.
//! They are defined here (in `app`) so that use-cases, the pattern menu and
//! the console adapter can all depend on them.

pub mod console;
pub mod line_source;

pub use console::Console;
pub use line_source::LineSource;
