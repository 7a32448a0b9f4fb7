// Terminal front end - stdin commands in, status lines out
use crate::application::command::{Command, CommandError};
use crate::application::ports::{CommandSource, Display};
use crate::domain::alert::Severity;
use crate::domain::display::DisplayState;
use crate::infrastructure::config::DisplayFormat;
use crate::infrastructure::toast_notifier::ToastNotifier;
use async_trait::async_trait;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct LineCommandSource<R> {
    lines: Lines<R>,
}

impl LineCommandSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> LineCommandSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> CommandSource for LineCommandSource<R> {
    async fn next_command(&mut self) -> Option<Result<Command, CommandError>> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    return None;
                }
            };
            // blank lines are not worth an error
            if line.trim().is_empty() {
                continue;
            }
            return Some(line.parse());
        }
    }
}

#[derive(Serialize)]
struct ToastView<'a> {
    message: &'a str,
    severity: Severity,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderView<'a> {
    #[serde(flatten)]
    state: &'a DisplayState,
    toasts: Vec<ToastView<'a>>,
}

pub struct TerminalDisplay<W> {
    out: W,
    format: DisplayFormat,
    toasts: Arc<ToastNotifier>,
}

impl TerminalDisplay<std::io::Stdout> {
    pub fn stdout(format: DisplayFormat, toasts: Arc<ToastNotifier>) -> Self {
        Self::new(std::io::stdout(), format, toasts)
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W, format: DisplayFormat, toasts: Arc<ToastNotifier>) -> Self {
        Self {
            out,
            format,
            toasts,
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

fn format_text(state: &DisplayState, toasts: &[ToastView<'_>]) -> String {
    let mut line = format!(
        "[{:>3}%] {:?} {}",
        state.battery_level, state.color_band, state.status_label
    );
    if let Some(indicator) = state.indicator {
        line.push_str(" | ");
        line.push_str(indicator);
    }
    if let Some(banner) = state.banner {
        line.push_str(" | ");
        line.push_str(banner);
    }
    if state.alarm_active {
        line.push_str(" | 🔔 ALARM");
    }
    for toast in toasts {
        line.push_str(&format!(" | ({}) {}", toast.severity, toast.message));
    }
    line
}

impl<W: Write + Send> Display for TerminalDisplay<W> {
    fn render(&mut self, state: &DisplayState) {
        let active = self.toasts.active();
        let toasts: Vec<ToastView<'_>> = active
            .iter()
            .map(|t| ToastView {
                message: &t.message,
                severity: t.severity,
            })
            .collect();

        let line = match self.format {
            DisplayFormat::Text => format_text(state, &toasts),
            DisplayFormat::Json => match serde_json::to_string(&RenderView { state, toasts }) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!(error = %e, "failed to serialize display state");
                    return;
                }
            },
        };
        self.write_line(&line);
    }

    fn message(&mut self, text: &str) {
        self.write_line(text);
    }
}
