//! # homedemo-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Console` — write `info` / `error` lines and the input prompt
//!   - `LineSource` — yield the next line of user input
//! - Provide the **device registry** use-case (`SmartHome`): add, execute,
//!   status report, update broadcast
//! - Provide the **home shell** that turns an input line into a registry call
//! - Provide the **line session**: the read → handle → report loop shared by
//!   every interactive program, with its two-state machine
//!
//! ## Dependency rule
//! Depends on `homedemo-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod session;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;
