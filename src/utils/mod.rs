pub mod time;
pub mod locale;
pub mod config;

pub use time::normalize_time_of_day;
pub use locale::get_local_message;
pub use config::{get_settings_file_path, load_initial_settings, read_initial_settings, ConfigError};
