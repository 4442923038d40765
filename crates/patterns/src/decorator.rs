//! Decorator — notifiers wrap one another, each adding its own delivery.

use homedemo_app::ports::Console;

pub trait Notifier {
    fn send(&self, message: &str, console: &dyn Console);
}

pub struct BasicNotifier;

impl Notifier for BasicNotifier {
    fn send(&self, message: &str, console: &dyn Console) {
        console.info(&format!("Message: {message}"));
    }
}

/// Delivers through the wrapped notifier first, then by e-mail.
pub struct EmailNotifier<N> {
    inner: N,
}

impl<N: Notifier> EmailNotifier<N> {
    #[must_use]
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: Notifier> Notifier for EmailNotifier<N> {
    fn send(&self, message: &str, console: &dyn Console) {
        self.inner.send(message, console);
        console.info(&format!("Email sent: {message}"));
    }
}
