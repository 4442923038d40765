//! # homedemo-patterns
//!
//! Six canned object-oriented examples, each selectable from a numbered menu.
//!
//! | Option | Module | Example |
//! |--------|--------|---------|
//! | 1 | [`strategy`] | pay 100 through a card payment strategy |
//! | 2 | [`observer`] | a chat room notifying two users |
//! | 3 | [`singleton`] | the lazily created application config |
//! | 4 | [`factory`] | a shape built from its name |
//! | 5 | [`adapter`] | a legacy printer behind the `Printer` trait |
//! | 6 | [`decorator`] | an e-mail notifier wrapping a basic one |
//!
//! Every example reports through the `Console` port it is handed, so the
//! menu and the tests decide where output goes.
//!
//! ## Dependency rule
//!
//! Depends on `homedemo-app` (the `Console` port and the session traits) only.

pub mod error;
pub mod menu;

pub mod adapter;
pub mod decorator;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testing;
