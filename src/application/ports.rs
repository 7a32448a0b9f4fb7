// Collaborator traits implemented by the infrastructure and presentation layers
use crate::application::command::{Command, CommandError};
use crate::domain::alert::Severity;
use crate::domain::display::DisplayState;
use async_trait::async_trait;
use thiserror::Error;

/// Shows a transient message. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, severity: Severity);
}

#[derive(Debug, Error)]
pub enum AlarmError {
    #[error("alarm unavailable: {0}")]
    Unavailable(String),
}

/// Looped audible alert. Starting a running alarm or stopping a stopped
/// one is a no-op.
pub trait Alarm: Send + Sync {
    fn start(&self) -> Result<(), AlarmError>;
    fn stop(&self);
    fn is_active(&self) -> bool;
}

/// Source of battery deltas for each tick
pub trait BatteryStep: Send {
    /// Either +1 or -1
    fn next_delta(&mut self) -> i8;
}

pub trait Display: Send {
    fn render(&mut self, state: &DisplayState);

    /// Free-form feedback (help text, rejected input)
    fn message(&mut self, text: &str);
}

#[async_trait]
pub trait CommandSource: Send {
    /// Next user command, or `None` once input is exhausted
    async fn next_command(&mut self) -> Option<Result<Command, CommandError>>;
}
