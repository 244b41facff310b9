use crate::gui::more_settings::MoreSettingsState;
use crate::models::{Automation, SettingsStore, UserSettings};
use crate::gui::helpers::format_location_summary;
use crate::utils::get_local_message;

pub struct ToggleSettingsApp {
    /// Owner of the user settings; the panel dispatches into it
    pub store: SettingsStore,
    /// Text buffers of the settings panel
    pub panel_state: MoreSettingsState,
    /// Whether the settings panel is expanded. Only this struct changes it.
    pub is_expanded: bool,
}

impl ToggleSettingsApp {
    pub fn new(settings: UserSettings) -> Self {
        let panel_state = MoreSettingsState::new(&settings);
        Self {
            store: SettingsStore::new(settings),
            panel_state,
            is_expanded: false,
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    pub fn collapse(&mut self) {
        self.is_expanded = false;
    }

    /// One line description of the active automation for the status row.
    pub fn status_text(&self) -> String {
        let settings = self.store.snapshot();
        match settings.automation {
            Automation::Off => get_local_message("automation_off"),
            Automation::Time => format!(
                "{} {} {} {}",
                get_local_message("active_from"),
                settings.time.activation,
                get_local_message("active_to"),
                settings.time.deactivation
            ),
            Automation::Sunset => format!(
                "{} {}",
                get_local_message("active_sunset_at"),
                format_location_summary(&settings.location)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationSettings, SettingsActions, SettingsPatch};

    #[test]
    fn expansion_is_owned_by_app() {
        let mut app = ToggleSettingsApp::new(UserSettings::default());
        assert!(!app.is_expanded);
        app.toggle_expanded();
        assert!(app.is_expanded);
        app.collapse();
        assert!(!app.is_expanded);
    }

    #[test]
    fn status_follows_store() {
        let mut app = ToggleSettingsApp::new(UserSettings::default());
        assert_eq!(app.status_text(), "Automation off");

        app.store.change_settings(SettingsPatch::time("20:00".into(), "06:30".into()));
        app.store.change_settings(SettingsPatch::automation(Automation::Time));
        assert_eq!(app.status_text(), "Active from 20:00 to 06:30");

        app.store.change_settings(SettingsPatch::automation(Automation::Sunset));
        app.store.change_settings(SettingsPatch::location(LocationSettings {
            latitude: Some(52.5),
            longitude: None,
        }));
        assert_eq!(app.status_text(), "Active from sunset to sunrise at 52.5°, unset");
    }
}
