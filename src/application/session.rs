// Session loop - Serializes user commands and periodic ticks onto the simulator
use crate::application::command::{Command, HELP};
use crate::application::ports::{CommandSource, Display};
use crate::application::simulator::DeviceSimulator;
use std::time::Duration;
use tokio::time::{Instant, interval_at};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;

pub struct Session<S, D> {
    simulator: DeviceSimulator,
    source: S,
    display: D,
    tick_interval: Duration,
}

impl<S, D> Session<S, D>
where
    S: CommandSource,
    D: Display,
{
    pub fn new(simulator: DeviceSimulator, source: S, display: D, tick_interval: Duration) -> Self {
        Self {
            simulator,
            source,
            display,
            tick_interval,
        }
    }

    /// Run until the command source is exhausted or `quit` arrives.
    /// Returns the simulator so callers can inspect the final state.
    pub async fn run(mut self) -> DeviceSimulator {
        let start = Instant::now() + self.tick_interval;
        let mut ticks = IntervalStream::new(interval_at(start, self.tick_interval));

        self.display.render(&self.simulator.display_state());

        loop {
            tokio::select! {
                command = self.source.next_command() => {
                    match command {
                        None | Some(Ok(Command::Quit)) => break,
                        Some(Ok(command)) => self.apply(command),
                        Some(Err(e)) => self.display.message(&e.to_string()),
                    }
                }
                Some(_) = ticks.next() => {
                    let display = self.simulator.tick();
                    self.display.render(&display);
                }
            }
        }

        tracing::info!("session finished");
        self.simulator.shutdown();
        self.simulator
    }

    fn apply(&mut self, command: Command) {
        let result = match command {
            Command::TogglePlugged => Ok(self.simulator.toggle_plugged()),
            Command::ToggleCharging => Ok(self.simulator.toggle_charging()),
            Command::ToggleSetting(name) => self.simulator.toggle_setting(&name),
            Command::SetThreshold(name, value) => self.simulator.set_threshold(&name, value),
            Command::Status => Ok(self.simulator.display_state()),
            Command::Help => {
                self.display.message(HELP);
                return;
            }
            Command::Quit => return,
        };

        match result {
            Ok(display) => self.display.render(&display),
            Err(e) => {
                tracing::debug!(error = %e, "command rejected");
                self.display.message(&e.to_string());
            }
        }
    }
}
