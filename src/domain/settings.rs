// Alert settings domain model
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_LOW_THRESHOLD: u8 = 30;
pub const DEFAULT_CRITICAL_THRESHOLD: u8 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingError {
    #[error("unrecognized setting: {0}")]
    InvalidSettingKind(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub alerts_enabled: bool,
    pub fun_sounds_enabled: bool,
    pub low_threshold: u8,
    pub critical_threshold: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alerts_enabled: true,
            fun_sounds_enabled: false,
            low_threshold: DEFAULT_LOW_THRESHOLD,
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
        }
    }
}

impl Settings {
    pub fn toggle(&mut self, setting: BooleanSetting) -> bool {
        let flag = match setting {
            BooleanSetting::AlertsEnabled => &mut self.alerts_enabled,
            BooleanSetting::FunSounds => &mut self.fun_sounds_enabled,
        };
        *flag = !*flag;
        *flag
    }

    pub fn set_threshold(&mut self, setting: ThresholdSetting, value: u8) {
        match setting {
            ThresholdSetting::Low => self.low_threshold = value,
            ThresholdSetting::Critical => self.critical_threshold = value,
        }
    }

    /// `critical < low <= 100`. Not enforced on updates.
    pub fn thresholds_ordered(&self) -> bool {
        self.critical_threshold < self.low_threshold && self.low_threshold <= 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanSetting {
    AlertsEnabled,
    FunSounds,
}

impl FromStr for BooleanSetting {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alertsEnabled" | "alerts_enabled" | "alerts" => Ok(Self::AlertsEnabled),
            "funSounds" | "fun_sounds" | "sounds" => Ok(Self::FunSounds),
            other => Err(SettingError::InvalidSettingKind(other.to_string())),
        }
    }
}

impl fmt::Display for BooleanSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlertsEnabled => f.write_str("alertsEnabled"),
            Self::FunSounds => f.write_str("funSounds"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdSetting {
    Low,
    Critical,
}

impl FromStr for ThresholdSetting {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowBatteryThreshold" | "lowThreshold" | "low_threshold" | "low" => Ok(Self::Low),
            "criticalBatteryThreshold" | "criticalThreshold" | "critical_threshold"
            | "critical" => Ok(Self::Critical),
            other => Err(SettingError::InvalidSettingKind(other.to_string())),
        }
    }
}

impl fmt::Display for ThresholdSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("lowThreshold"),
            Self::Critical => f.write_str("criticalThreshold"),
        }
    }
}
