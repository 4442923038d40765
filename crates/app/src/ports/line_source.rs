//! Line source port — the next line of user input.

use std::future::Future;

/// Yields user input one line at a time.
pub trait LineSource {
    /// Wait for the next line, without its line terminator.
    ///
    /// Resolves to `Ok(None)` once input is exhausted.
    fn next_line(&mut self) -> impl Future<Output = std::io::Result<Option<String>>>;
}
