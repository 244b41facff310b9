use log::debug;
use crate::models::{SettingsPatch, UserSettings};

/// Capability to request a settings change. Fire-and-forget: the caller gets
/// nothing back and no error is surfaced.
pub trait SettingsActions {
    fn change_settings(&mut self, patch: SettingsPatch);
}

/// In-memory owner of the user settings. Nothing is written to disk.
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: UserSettings,
}

impl SettingsStore {
    pub fn new(settings: UserSettings) -> Self {
        Self { settings }
    }

    /// Read-only view handed to the panel each frame.
    pub fn snapshot(&self) -> &UserSettings {
        &self.settings
    }
}

impl SettingsActions for SettingsStore {
    fn change_settings(&mut self, patch: SettingsPatch) {
        if patch.is_empty() {
            return;
        }
        debug!("Applying settings change: {:?}", patch);
        self.settings.apply(patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Automation, LocationSettings};

    #[test]
    fn change_settings_merges_into_store() {
        let mut store = SettingsStore::default();
        store.change_settings(SettingsPatch::automation(Automation::Sunset));
        store.change_settings(SettingsPatch::location(LocationSettings {
            latitude: Some(48.1),
            longitude: None,
        }));

        assert_eq!(store.snapshot().automation, Automation::Sunset);
        assert_eq!(store.snapshot().location.latitude, Some(48.1));
        assert_eq!(store.snapshot().location.longitude, None);
    }

    #[test]
    fn empty_patch_is_ignored() {
        let mut store = SettingsStore::default();
        store.change_settings(SettingsPatch::default());
        assert_eq!(store.snapshot(), &UserSettings::default());
    }
}
