// Alert domain model - derived from device state and settings
use super::device::DeviceState;
use super::settings::Settings;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    None,
    Low,
    Critical,
    PluggedNotCharging,
}

impl AlertLevel {
    /// Banner shown for this level, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            AlertLevel::None => None,
            AlertLevel::Low => Some("⚠️ LOW BATTERY - CHARGE SOON"),
            AlertLevel::Critical => Some("❗ CRITICAL BATTERY - CHARGE NOW!"),
            AlertLevel::PluggedNotCharging => Some("🔌 PLUGGED BUT NOT CHARGING"),
        }
    }
}

/// Plugged-but-not-charging overrides the battery thresholds.
pub fn compute_alert_level(state: &DeviceState, settings: &Settings) -> AlertLevel {
    if state.is_plugged() && !state.is_charging() {
        return AlertLevel::PluggedNotCharging;
    }
    if !settings.alerts_enabled {
        return AlertLevel::None;
    }

    let level = state.battery_level();
    if level <= settings.critical_threshold {
        AlertLevel::Critical
    } else if level <= settings.low_threshold {
        AlertLevel::Low
    } else {
        AlertLevel::None
    }
}

/// Fixed presentation bands, independent of the configurable thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatteryBand {
    Critical,
    Low,
    Normal,
}

const CRITICAL_BAND_MAX: u8 = 10;
const LOW_BAND_MAX: u8 = 30;

pub fn battery_color_band(battery_level: u8) -> BatteryBand {
    if battery_level <= CRITICAL_BAND_MAX {
        BatteryBand::Critical
    } else if battery_level <= LOW_BAND_MAX {
        BatteryBand::Low
    } else {
        BatteryBand::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}
