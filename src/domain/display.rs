// Display state - everything a renderer needs after a transition
use super::alert::{AlertLevel, BatteryBand, battery_color_band, compute_alert_level};
use super::device::{DeviceState, PlugState};
use super::settings::Settings;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub battery_level: u8,
    pub color_band: BatteryBand,
    pub plug_state: PlugState,
    pub alert_level: AlertLevel,
    pub status_label: &'static str,
    pub indicator: Option<&'static str>,
    pub banner: Option<&'static str>,
    pub alarm_active: bool,
    pub settings: Settings,
}

impl DisplayState {
    pub fn derive(state: &DeviceState, settings: &Settings, alarm_active: bool) -> Self {
        let plug_state = state.plug_state();
        let alert_level = compute_alert_level(state, settings);

        let (status_label, indicator) = match plug_state {
            PlugState::Unplugged => ("BATTERY", None),
            PlugState::PluggedIdle => ("PLUGGED", Some("Plugged - Not Charging")),
            PlugState::PluggedCharging => ("CHARGING", Some("Charging")),
        };

        Self {
            battery_level: state.battery_level(),
            color_band: battery_color_band(state.battery_level()),
            plug_state,
            alert_level,
            status_label,
            indicator,
            banner: alert_level.banner(),
            alarm_active,
            settings: *settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_initial_state() {
        let display = DisplayState::derive(&DeviceState::default(), &Settings::default(), false);
        assert_eq!(display.battery_level, 61);
        assert_eq!(display.color_band, BatteryBand::Normal);
        assert_eq!(display.status_label, "BATTERY");
        assert_eq!(display.indicator, None);
        assert_eq!(display.alert_level, AlertLevel::None);
        assert_eq!(display.banner, None);
    }

    #[test]
    fn test_derive_plugged() {
        let mut state = DeviceState::new(25);
        state.set_plug_state(PlugState::PluggedIdle);
        let display = DisplayState::derive(&state, &Settings::default(), false);

        assert_eq!(display.status_label, "PLUGGED");
        assert_eq!(display.indicator, Some("Plugged - Not Charging"));
        assert_eq!(display.color_band, BatteryBand::Low);
        assert_eq!(display.banner, Some("🔌 PLUGGED BUT NOT CHARGING"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let display = DisplayState::derive(&DeviceState::default(), &Settings::default(), false);
        let json = serde_json::to_value(&display).unwrap();

        assert_eq!(json["batteryLevel"], 61);
        assert_eq!(json["colorBand"], "NORMAL");
        assert_eq!(json["plugState"], "unplugged");
        assert_eq!(json["alertLevel"], "NONE");
        assert_eq!(json["alarmActive"], false);
        assert_eq!(json["settings"]["lowThreshold"], 30);
    }
}
