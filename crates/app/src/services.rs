//! Application services — use-case implementations.
//!
//! Each service struct accepts its port implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod smart_home;
