//! Console port — where every user-visible line goes.

/// Writes user-facing output.
///
/// Normal events go through [`info`](Self::info), rejected input and lookup
/// failures through [`error`](Self::error). Implementations decide the
/// framing (`[INFO] …` / `[ERROR] …`) and the target stream.
pub trait Console {
    /// Report a normal event.
    fn info(&self, message: &str);

    /// Report a rejected command or a failure.
    fn error(&self, message: &str);

    /// Show the input prompt, without a trailing newline.
    fn prompt(&self, text: &str);
}

impl<T: Console + ?Sized> Console for &T {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn prompt(&self, text: &str) {
        (**self).prompt(text);
    }
}
