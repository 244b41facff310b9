pub mod app;
pub mod ui;
pub mod helpers;
pub mod controls;
pub mod coordinate_field;
pub mod more_settings;

pub use app::ToggleSettingsApp;
pub use controls::{automation_checkbox, TimeRangePicker};
pub use coordinate_field::CoordinateField;
pub use more_settings::{show_more_settings, MoreSettingsState};
