//! # homedemo-domain
//!
//! Pure domain model for the homedemo smart home simulator.
//!
//! ## Responsibilities
//! - Foundational types: the numeric [`DeviceId`](id::DeviceId) and the
//!   [`HomeError`](error::HomeError) taxonomy
//! - Define **Devices** (a light, a thermostat, a door lock) and the single
//!   piece of state each one holds
//! - Define **Commands** (`turnOn`, `setTemp`, `lock`, …) and the per-kind
//!   capability check that accepts or rejects them
//! - Define **State changes** (the typed outcome of an accepted command)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It never writes to the console. Output is expressed as values the `app`
//! crate turns into log lines.

pub mod error;
pub mod id;

pub mod command;
pub mod device;
