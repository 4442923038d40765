//! Line-framed console output over any pair of writers.

use std::cell::RefCell;
use std::io::{self, Write};

use homedemo_app::ports::Console;

/// Console writing to the process's stdout and stderr.
pub type StdConsole = WriterConsole<io::Stdout, io::Stderr>;

/// [`Console`] writing `[INFO]` lines to `out` and `[ERROR]` lines to `err`.
///
/// Every line is flushed as soon as it is written, so output interleaves with
/// input the way a user expects. Write failures are traced and otherwise
/// ignored: losing the terminal must not abort command handling.
pub struct WriterConsole<O, E> {
    out: RefCell<O>,
    err: RefCell<E>,
}

impl StdConsole {
    /// Console bound to the real terminal streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> WriterConsole<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    /// Take the writers back, e.g. to inspect captured output.
    pub fn into_parts(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

fn write_line<W: Write>(writer: &mut W, level: &str, message: &str) -> io::Result<()> {
    writeln!(writer, "[{level}] {message}")?;
    writer.flush()
}

impl<O: Write, E: Write> Console for WriterConsole<O, E> {
    fn info(&self, message: &str) {
        if let Err(err) = write_line(&mut *self.out.borrow_mut(), "INFO", message) {
            tracing::warn!(error = %err, "failed to write to stdout");
        }
    }

    fn error(&self, message: &str) {
        if let Err(err) = write_line(&mut *self.err.borrow_mut(), "ERROR", message) {
            tracing::warn!(error = %err, "failed to write to stderr");
        }
    }

    fn prompt(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to write prompt");
        }
    }
}
