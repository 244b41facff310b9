pub mod models;
pub mod gui;
pub mod utils;


pub use models::{
    format_coordinate, parse_and_clamp, Automation, Axis, LocationSettings, SettingsActions,
    SettingsPatch, SettingsStore, TimeSettings, UserSettings,
};
pub use gui::{show_more_settings, MoreSettingsState, ToggleSettingsApp};
