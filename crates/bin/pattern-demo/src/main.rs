//! # pattern-demo — interactive design pattern showcase
//!
//! Composition root that wires the console adapter to the pattern menu and
//! runs it until `0` or end of input.
//!
//! Diagnostic tracing goes to stderr, filtered by `RUST_LOG`, then
//! `HOMEDEMO_LOG`, then `warn`.

use homedemo_adapter_console::{StdConsole, StdinLines};
use homedemo_app::session::Session;
use homedemo_patterns::menu::PatternMenu;
use tracing_subscriber::EnvFilter;

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("HOMEDEMO_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let console = StdConsole::stdio();
    let mut session = Session::new(&console, PatternMenu::new(&console));
    session.run(&mut StdinLines::stdin()).await?;
    tracing::debug!("pattern menu closed");

    Ok(())
}
