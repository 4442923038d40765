//! Pattern menu errors.

/// Errors raised by the pattern menu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The input did not name any menu option.
    #[error("Invalid input")]
    InvalidSelection { input: String },
}
