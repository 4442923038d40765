//! Observer — a chat room forwards each message to every subscribed user.

use homedemo_app::ports::Console;

/// Receives messages published by a subject.
pub trait Observer {
    fn update(&self, message: &str, console: &dyn Console);
}

pub struct User {
    name: String,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for User {
    fn update(&self, message: &str, console: &dyn Console) {
        console.info(&format!("{} received: {message}", self.name));
    }
}

/// Subject holding its observers in subscription order.
#[derive(Default)]
pub struct ChatRoom {
    observers: Vec<Box<dyn Observer>>,
}

impl ChatRoom {
    pub fn add_user(&mut self, user: Box<dyn Observer>) {
        self.observers.push(user);
    }

    pub fn notify(&self, message: &str, console: &dyn Console) {
        for observer in &self.observers {
            observer.update(message, console);
        }
    }
}
