//! Line session — the read → handle → report loop behind every program.
//!
//! A session is either awaiting a command or terminated. Only a handler's
//! [`Flow::Exit`] (or exhausted input) terminates it, and termination is
//! final. A handler error is reported as one error line and the session keeps
//! awaiting commands.

use crate::ports::{Console, LineSource};

/// What the loop should do after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCommand,
    Terminated,
}

/// Interprets one input line.
pub trait CommandHandler {
    /// Error reported when a line is rejected.
    type Error: std::error::Error;

    /// The menu line shown before every prompt.
    fn menu(&self) -> &str;

    /// Handle one line of input.
    ///
    /// # Errors
    ///
    /// Any error rejects the line. The session reports it and continues.
    fn handle(&mut self, line: &str) -> Result<Flow, Self::Error>;
}

/// Errors that end a session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading the next input line failed.
    #[error("failed to read input")]
    Input(#[from] std::io::Error),
}

/// Drives a [`CommandHandler`] from a [`LineSource`].
pub struct Session<C, H> {
    console: C,
    handler: H,
    state: SessionState,
}

impl<C: Console, H: CommandHandler> Session<C, H> {
    /// Prompt shown after the menu line.
    pub const PROMPT: &'static str = "> ";

    pub fn new(console: C, handler: H) -> Self {
        Self {
            console,
            handler,
            state: SessionState::AwaitingCommand,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Handle a single line and return the resulting state.
    ///
    /// Lines arriving after termination are ignored.
    pub fn step(&mut self, line: &str) -> SessionState {
        if self.state == SessionState::Terminated {
            return self.state;
        }
        match self.handler.handle(line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                tracing::debug!("exit requested");
                self.state = SessionState::Terminated;
            }
            Err(err) => {
                tracing::debug!(%line, "line rejected");
                self.console.error(&err.to_string());
            }
        }
        self.state
    }

    /// Show the menu, read a line, handle it, until the session terminates.
    ///
    /// Handler panics are not caught. Handlers report bad input as `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Input`] if the line source fails. Handler
    /// errors never end the session.
    pub async fn run<L: LineSource>(&mut self, lines: &mut L) -> Result<(), SessionError> {
        while self.state == SessionState::AwaitingCommand {
            self.console.info(self.handler.menu());
            self.console.prompt(Self::PROMPT);

            match lines.next_line().await? {
                Some(line) => {
                    self.step(&line);
                }
                None => {
                    tracing::debug!("input exhausted");
                    self.state = SessionState::Terminated;
                }
            }
        }
        Ok(())
    }
}
