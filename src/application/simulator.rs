// Device simulator - Plug/charge state machine and battery ticker
use crate::application::ports::{Alarm, BatteryStep, Notifier};
use crate::domain::alert::{
    AlertLevel, BatteryBand, Severity, battery_color_band, compute_alert_level,
};
use crate::domain::device::DeviceState;
use crate::domain::display::DisplayState;
use crate::domain::settings::{BooleanSetting, SettingError, Settings, ThresholdSetting};
use std::sync::Arc;

const PLUGGED_REMINDER: &str = "⚠️ Plugged in but switch is OFF. Please turn it ON!";
const NOT_CHARGING_REMINDER: &str = "⚠️ Plugged in but not charging!";

pub struct DeviceSimulator {
    state: DeviceState,
    settings: Settings,
    step: Box<dyn BatteryStep>,
    notifier: Arc<dyn Notifier>,
    alarm: Arc<dyn Alarm>,
    /// Last battery alert a toast was shown for
    notified: AlertLevel,
}

impl DeviceSimulator {
    pub fn new(
        state: DeviceState,
        settings: Settings,
        step: Box<dyn BatteryStep>,
        notifier: Arc<dyn Notifier>,
        alarm: Arc<dyn Alarm>,
    ) -> Self {
        Self {
            state,
            settings,
            step,
            notifier,
            alarm,
            notified: AlertLevel::None,
        }
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState::derive(&self.state, &self.settings, self.alarm.is_active())
    }

    pub fn compute_alert_level(&self) -> AlertLevel {
        compute_alert_level(&self.state, &self.settings)
    }

    pub fn battery_color_band(&self) -> BatteryBand {
        battery_color_band(self.state.battery_level())
    }

    pub fn toggle_plugged(&mut self) -> DisplayState {
        let plug = self.state.plug_state().toggle_plug();
        self.state.set_plug_state(plug);
        tracing::info!(plugged = plug.is_plugged(), "plug toggled");

        if plug.is_plugged() {
            self.notifier.show(PLUGGED_REMINDER, Severity::Warning);
            self.start_alarm();
        } else {
            self.alarm.stop();
        }

        self.display_state()
    }

    /// No-op while unplugged.
    pub fn toggle_charging(&mut self) -> DisplayState {
        let Some(plug) = self.state.plug_state().toggle_charge() else {
            tracing::debug!("charge toggle ignored while unplugged");
            return self.display_state();
        };
        self.state.set_plug_state(plug);
        tracing::info!(charging = plug.is_charging(), "charging toggled");

        if plug.is_charging() {
            self.alarm.stop();
        } else {
            self.start_alarm();
            self.notifier.show(NOT_CHARGING_REMINDER, Severity::Warning);
        }

        self.display_state()
    }

    pub fn toggle_setting(&mut self, name: &str) -> Result<DisplayState, SettingError> {
        let setting: BooleanSetting = name.parse()?;
        let enabled = self.settings.toggle(setting);
        tracing::info!(%setting, enabled, "setting toggled");
        Ok(self.display_state())
    }

    /// Values are stored as given, even when they invert the threshold order.
    pub fn set_threshold(&mut self, name: &str, value: u8) -> Result<DisplayState, SettingError> {
        let setting: ThresholdSetting = name.parse()?;
        self.settings.set_threshold(setting, value);
        tracing::info!(%setting, value, "threshold updated");

        if !self.settings.thresholds_ordered() {
            tracing::warn!(
                low = self.settings.low_threshold,
                critical = self.settings.critical_threshold,
                "alert thresholds are out of order"
            );
        }

        Ok(self.display_state())
    }

    /// Low/Critical toasts fire once per level entered, whichever
    /// transition put the device there.
    pub fn tick(&mut self) -> DisplayState {
        let delta = self.step.next_delta();
        self.state.step_battery(delta);
        let level = self.compute_alert_level();

        tracing::debug!(
            delta,
            battery_level = self.state.battery_level(),
            band = ?self.battery_color_band(),
            alert = ?level,
            "battery tick"
        );

        let severity = match level {
            AlertLevel::Low => Some(Severity::Warning),
            AlertLevel::Critical => Some(Severity::Error),
            AlertLevel::None => {
                self.notified = AlertLevel::None;
                None
            }
            AlertLevel::PluggedNotCharging => None,
        };
        if let (Some(severity), Some(banner)) = (severity, level.banner()) {
            if level != self.notified {
                self.notifier.show(banner, severity);
                self.notified = level;
            }
        }

        self.display_state()
    }

    /// Stop the alarm when the session ends.
    pub fn shutdown(&self) {
        self.alarm.stop();
    }

    fn start_alarm(&self) {
        if let Err(e) = self.alarm.start() {
            tracing::warn!(error = %e, "could not start alarm");
        }
    }
}
