use crate::domain::device::{DEFAULT_BATTERY_LEVEL, DeviceState, MAX_BATTERY_LEVEL};
use crate::domain::settings::{DEFAULT_CRITICAL_THRESHOLD, DEFAULT_LOW_THRESHOLD, Settings};
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE: &str = "config/buzzkill";
const ENV_PREFIX: &str = "BUZZKILL";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub settings: SettingsConfig,
    pub notifications: NotificationsConfig,
    pub alarm: AlarmConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
    pub initial_battery: u8,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 3000,
            initial_battery: DEFAULT_BATTERY_LEVEL,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SettingsConfig {
    pub alerts_enabled: bool,
    pub fun_sounds: bool,
    pub low_threshold: u8,
    pub critical_threshold: u8,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            alerts_enabled: true,
            fun_sounds: false,
            low_threshold: DEFAULT_LOW_THRESHOLD,
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NotificationsConfig {
    pub duration_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { duration_ms: 4000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AlarmConfig {
    pub ring_interval_ms: u64,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            ring_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: DisplayFormat,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial battery level {0} is above 100")]
    BatteryOutOfRange(u8),
    #[error("critical threshold {critical} must be below low threshold {low}, and low at most 100")]
    ThresholdOrder { low: u8, critical: u8 },
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.initial_battery > MAX_BATTERY_LEVEL {
            return Err(ConfigError::BatteryOutOfRange(self.simulation.initial_battery));
        }
        if !self.initial_settings().thresholds_ordered() {
            return Err(ConfigError::ThresholdOrder {
                low: self.settings.low_threshold,
                critical: self.settings.critical_threshold,
            });
        }
        if self.simulation.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("simulation.tick_interval_ms"));
        }
        if self.alarm.ring_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("alarm.ring_interval_ms"));
        }
        Ok(())
    }

    pub fn initial_state(&self) -> DeviceState {
        DeviceState::new(self.simulation.initial_battery)
    }

    pub fn initial_settings(&self) -> Settings {
        Settings {
            alerts_enabled: self.settings.alerts_enabled,
            fun_sounds_enabled: self.settings.fun_sounds,
            low_threshold: self.settings.low_threshold,
            critical_threshold: self.settings.critical_threshold,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.simulation.tick_interval_ms)
    }
}

/// Load from `config/buzzkill.{toml,...}` if present, then `BUZZKILL__*`
/// environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("failed to read configuration")?;

    let app_config: AppConfig = settings
        .try_deserialize()
        .context("failed to parse configuration")?;
    app_config.validate()?;
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");
        assert_eq!(config.simulation.tick_interval_ms, 3000);
        assert_eq!(config.simulation.initial_battery, 61);
        assert_eq!(config.initial_settings(), Settings::default());
        assert_eq!(config.notifications.duration_ms, 4000);
        assert_eq!(config.display.format, DisplayFormat::Text);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_overrides() {
        let config = from_toml(
            r#"
            [simulation]
            tick_interval_ms = 500
            seed = 7

            [settings]
            fun_sounds = true
            low_threshold = 40

            [display]
            format = "json"
            "#,
        );
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.simulation.seed, Some(7));
        assert!(config.initial_settings().fun_sounds_enabled);
        assert_eq!(config.initial_settings().low_threshold, 40);
        assert_eq!(config.initial_settings().critical_threshold, 10);
        assert_eq!(config.display.format, DisplayFormat::Json);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.settings.critical_threshold = 30;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdOrder { low: 30, critical: 30 })
        );

        let mut config = AppConfig::default();
        config.simulation.initial_battery = 101;
        assert_eq!(config.validate(), Err(ConfigError::BatteryOutOfRange(101)));

        let mut config = AppConfig::default();
        config.simulation.tick_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroInterval(_))));
    }
}
