//! Async line input.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use homedemo_app::ports::LineSource;

/// Line source reading the process's stdin.
pub type StdinLines = ReaderLines<BufReader<Stdin>>;

/// [`LineSource`] over any buffered async reader.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Bytes that are not
/// valid UTF-8 are replaced with `U+FFFD`, so a garbled line reaches the
/// handler as an ordinary bad command instead of failing the read.
pub struct ReaderLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl StdinLines {
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: AsyncBufRead + Unpin> LineSource for ReaderLines<R> {
    async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}
