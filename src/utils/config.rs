use std::fs;
use std::path::{Path, PathBuf};
use log::{info, warn};
use thiserror::Error;
use crate::models::{Axis, UserSettings};

const SETTINGS_FILE: &str = "settings.json";
const SETTINGS_FILE_ENV: &str = "TOGGLE_SETTINGS_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// `TOGGLE_SETTINGS_FILE` if set, otherwise `settings.json` in the working directory.
pub fn get_settings_file_path() -> PathBuf {
    std::env::var_os(SETTINGS_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}

/// Reads an initial settings snapshot. A missing file yields `Ok(None)`.
///
/// Coordinates in the file are clamped to their axis domain.
pub fn read_initial_settings(path: &Path) -> Result<Option<UserSettings>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut settings: UserSettings = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    settings.location.latitude = settings.location.latitude.map(|v| Axis::Latitude.clamp(v));
    settings.location.longitude = settings.location.longitude.map(|v| Axis::Longitude.clamp(v));

    Ok(Some(settings))
}

/// Start-up helper: never fails, falls back to defaults and logs why.
pub fn load_initial_settings(path: &Path) -> UserSettings {
    match read_initial_settings(path) {
        Ok(Some(settings)) => {
            info!("Loaded settings from {}: automation {:?}, location {:?}",
                  path.display(), settings.automation, settings.location);
            settings
        }
        Ok(None) => {
            info!("No settings file at {}, using defaults", path.display());
            UserSettings::default()
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            UserSettings::default()
        }
    }
}
