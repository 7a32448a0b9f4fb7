// Main entry point - Dependency injection and session setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::application::command::HELP;
use crate::application::ports::Display;
use crate::application::session::Session;
use crate::application::simulator::DeviceSimulator;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::random_step::RandomStep;
use crate::infrastructure::terminal_alarm::TerminalAlarm;
use crate::infrastructure::toast_notifier::ToastNotifier;
use crate::presentation::terminal::{LineCommandSource, TerminalDisplay};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing; RUST_LOG wins over the configured level.
    // Logs go to stderr so stdout carries only the display.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Create adapters (infrastructure layer)
    let notifier = Arc::new(ToastNotifier::new(config.notifications.duration_ms));
    let alarm = Arc::new(TerminalAlarm::new(Duration::from_millis(
        config.alarm.ring_interval_ms,
    )));
    let step = RandomStep::new(config.simulation.seed);

    // Create simulator (application layer)
    let simulator = DeviceSimulator::new(
        config.initial_state(),
        config.initial_settings(),
        Box::new(step),
        notifier.clone(),
        alarm,
    );

    // Wire the terminal (presentation layer)
    let mut display = TerminalDisplay::stdout(config.display.format, notifier);
    display.message(HELP);
    let source = LineCommandSource::stdin();

    tracing::info!(
        tick_interval_ms = config.simulation.tick_interval_ms,
        seed = ?config.simulation.seed,
        "starting buzzkill session"
    );

    Session::new(simulator, source, display, config.tick_interval())
        .run()
        .await;

    Ok(())
}
