// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod random_step;
pub mod terminal_alarm;
pub mod toast_notifier;
