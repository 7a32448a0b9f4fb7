// Device domain model
use serde::Serialize;

pub const MAX_BATTERY_LEVEL: u8 = 100;
pub const DEFAULT_BATTERY_LEVEL: u8 = 61;

/// Power connection state. Charging is only reachable while plugged in,
/// so `is_charging() => is_plugged()` holds for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlugState {
    #[default]
    Unplugged,
    PluggedIdle,
    PluggedCharging,
}

impl PlugState {
    pub fn is_plugged(self) -> bool {
        !matches!(self, PlugState::Unplugged)
    }

    pub fn is_charging(self) -> bool {
        matches!(self, PlugState::PluggedCharging)
    }

    /// Plug or unplug. Unplugging always clears charging.
    pub fn toggle_plug(self) -> Self {
        match self {
            PlugState::Unplugged => PlugState::PluggedIdle,
            PlugState::PluggedIdle | PlugState::PluggedCharging => PlugState::Unplugged,
        }
    }

    /// Start or stop charging. Returns `None` when unplugged.
    pub fn toggle_charge(self) -> Option<Self> {
        match self {
            PlugState::Unplugged => None,
            PlugState::PluggedIdle => Some(PlugState::PluggedCharging),
            PlugState::PluggedCharging => Some(PlugState::PluggedIdle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceState {
    battery_level: u8,
    plug: PlugState,
}

impl DeviceState {
    pub fn new(battery_level: u8) -> Self {
        Self {
            battery_level: battery_level.min(MAX_BATTERY_LEVEL),
            plug: PlugState::Unplugged,
        }
    }

    pub fn battery_level(&self) -> u8 {
        self.battery_level
    }

    pub fn plug_state(&self) -> PlugState {
        self.plug
    }

    pub fn is_plugged(&self) -> bool {
        self.plug.is_plugged()
    }

    pub fn is_charging(&self) -> bool {
        self.plug.is_charging()
    }

    pub(crate) fn set_plug_state(&mut self, plug: PlugState) {
        self.plug = plug;
    }

    /// Move the battery level by `delta`, saturating at 0 and 100.
    pub fn step_battery(&mut self, delta: i8) {
        let next = i16::from(self.battery_level) + i16::from(delta);
        self.battery_level = next.clamp(0, i16::from(MAX_BATTERY_LEVEL)) as u8;
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new(DEFAULT_BATTERY_LEVEL)
    }
}
