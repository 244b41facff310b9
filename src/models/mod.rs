pub mod settings;
pub mod coordinate;
pub mod store;

pub use settings::{Automation, TimeSettings, LocationSettings, UserSettings, SettingsPatch};
pub use coordinate::{Axis, format_coordinate, parse_and_clamp, DEGREE_SIGN};
pub use store::{SettingsActions, SettingsStore};
