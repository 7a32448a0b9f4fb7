// Toast notifier - Keeps transient messages until they expire
use crate::application::ports::Notifier;
use crate::domain::alert::Severity;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ToastNotifier {
    duration: TimeDelta,
    toasts: Mutex<Vec<Toast>>,
}

impl ToastNotifier {
    pub fn new(duration_ms: u64) -> Self {
        let duration = i64::try_from(duration_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .unwrap_or(TimeDelta::MAX);
        Self {
            duration,
            toasts: Mutex::new(Vec::new()),
        }
    }

    pub fn show_at(&self, message: &str, severity: Severity, now: DateTime<Utc>) {
        match severity {
            Severity::Info => tracing::info!(%severity, "{}", message),
            Severity::Warning => tracing::warn!(%severity, "{}", message),
            Severity::Error => tracing::error!(%severity, "{}", message),
        }

        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        toasts.push(Toast {
            message: message.to_string(),
            severity,
            shown_at: now,
        });
    }

    /// Toasts still visible at `now`; expired ones are dropped.
    pub fn active_at(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        toasts.retain(|toast| now.signed_duration_since(toast.shown_at) < self.duration);
        toasts.clone()
    }

    pub fn active(&self) -> Vec<Toast> {
        self.active_at(Utc::now())
    }
}

impl Notifier for ToastNotifier {
    fn show(&self, message: &str, severity: Severity) {
        self.show_at(message, severity, Utc::now());
    }
}
