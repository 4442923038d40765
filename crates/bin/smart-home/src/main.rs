//! # smart-home — interactive smart home simulator
//!
//! Composition root that wires the console adapter to the device registry
//! and runs the command loop.
//!
//! ## Responsibilities
//! - Load configuration (`homedemo.toml`, env vars)
//! - Install the diagnostic tracing subscriber (stderr)
//! - Seed the registry with the configured devices
//! - Run the session on stdin until `exit` or end of input
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod config;

use homedemo_adapter_console::{StdConsole, StdinLines};
use homedemo_app::services::smart_home::SmartHome;
use homedemo_app::session::Session;
use homedemo_app::shell::HomeShell;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let console = StdConsole::stdio();

    // Registry
    let mut home = SmartHome::new(&console);
    for device in &config.devices {
        home.add_from_type(&device.kind, device.id);
    }
    tracing::debug!(devices = home.len(), "registry seeded");

    // Session
    let mut session = Session::new(&console, HomeShell::new(home));
    session.run(&mut StdinLines::stdin()).await?;

    Ok(())
}
