//! Test doubles shared by the unit tests of this crate.

use std::cell::RefCell;

use homedemo_app::ports::Console;

/// Console that records `info` and `error` lines, prefixed with their level.
#[derive(Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<String>>,
}

impl RecordingConsole {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for RecordingConsole {
    fn info(&self, message: &str) {
        self.lines.borrow_mut().push(format!("INFO {message}"));
    }

    fn error(&self, message: &str) {
        self.lines.borrow_mut().push(format!("ERROR {message}"));
    }

    fn prompt(&self, _text: &str) {}
}
