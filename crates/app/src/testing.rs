//! Test doubles shared by the unit tests of this crate.

use std::cell::RefCell;

use crate::ports::{Console, LineSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Info(String),
    Error(String),
}

/// Console that records every line instead of printing it. Prompts are dropped.
#[derive(Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<Line>>,
}

impl RecordingConsole {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                Line::Info(msg) => Some(msg.clone()),
                Line::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                Line::Error(msg) => Some(msg.clone()),
                Line::Info(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for RecordingConsole {
    fn info(&self, message: &str) {
        self.lines.borrow_mut().push(Line::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lines.borrow_mut().push(Line::Error(message.to_string()));
    }

    fn prompt(&self, _text: &str) {}
}

/// Line source replaying a fixed script.
pub struct ScriptedLines {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedLines {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineSource for ScriptedLines {
    async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.lines.next())
    }
}
