// Domain layer - Device state, settings and derived alert/display models
pub mod alert;
pub mod device;
pub mod display;
pub mod settings;
