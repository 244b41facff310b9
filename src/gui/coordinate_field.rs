use eframe::egui;
use crate::models::{format_coordinate, parse_and_clamp, Axis, LocationSettings, SettingsActions, SettingsPatch};
use crate::utils::get_local_message;

/// Text input for one coordinate axis.
///
/// Holds the text being edited; the stored value lives in the settings store.
#[derive(Debug, Clone)]
pub struct CoordinateField {
    axis: Axis,
    text: String,
    /// Text edited since the last commit
    dirty: bool,
}

impl CoordinateField {
    pub fn new(axis: Axis, value: Option<f64>) -> Self {
        Self { axis, text: format_coordinate(value), dirty: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text as if the user typed it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Shows the stored value when the field is not being edited.
    pub fn sync(&mut self, value: Option<f64>) {
        if !self.dirty {
            self.text = format_coordinate(value);
        }
    }

    /// Parses the text, rewrites it in normalized form and dispatches the
    /// updated location. Returns the value that was dispatched.
    pub fn commit(&mut self, location: &LocationSettings, actions: &mut impl SettingsActions) -> Option<f64> {
        let value = parse_and_clamp(&self.text, self.axis);
        self.text = format_coordinate(value);
        self.dirty = false;

        let mut location = *location;
        match self.axis {
            Axis::Latitude => location.latitude = value,
            Axis::Longitude => location.longitude = value,
        }
        actions.change_settings(SettingsPatch::location(location));

        value
    }

    /// Widget id of the text input, stable across frames.
    pub fn widget_id(&self) -> egui::Id {
        egui::Id::new(("coordinate_field", self.axis))
    }

    pub fn show(&mut self, ui: &mut egui::Ui, location: &LocationSettings, actions: &mut impl SettingsActions) {
        // Singleline edits give up focus on Enter, which lands in the commit below
        let id = self.widget_id();
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.text)
                .id(id)
                .hint_text(get_local_message(self.axis.message_key()))
                .desired_width(64.0),
        );

        if response.changed() {
            self.dirty = true;
        }

        if response.lost_focus() && self.dirty {
            self.commit(location, actions);
        } else if !response.has_focus() {
            let value = match self.axis {
                Axis::Latitude => location.latitude,
                Axis::Longitude => location.longitude,
            };
            self.sync(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SettingsStore, UserSettings};

    #[derive(Default)]
    struct Recorder(Vec<SettingsPatch>);

    impl SettingsActions for Recorder {
        fn change_settings(&mut self, patch: SettingsPatch) {
            self.0.push(patch);
        }
    }

    #[test]
    fn out_of_range_latitude_is_clamped_and_dispatched() {
        let location = LocationSettings { latitude: Some(10.0), longitude: Some(-71.25) };
        let mut field = CoordinateField::new(Axis::Latitude, location.latitude);
        let mut recorder = Recorder::default();

        field.set_text("95");
        let value = field.commit(&location, &mut recorder);

        assert_eq!(value, Some(90.0));
        assert_eq!(field.text(), "90°");
        assert_eq!(recorder.0, vec![SettingsPatch::location(LocationSettings {
            latitude: Some(90.0),
            longitude: Some(-71.25),
        })]);
    }

    #[test]
    fn clearing_longitude_unsets_it() {
        let mut store = SettingsStore::new(UserSettings {
            location: LocationSettings { latitude: Some(1.0), longitude: Some(2.0) },
            ..Default::default()
        });
        let mut field = CoordinateField::new(Axis::Longitude, Some(2.0));
        assert_eq!(field.text(), "2°");

        field.set_text("  ");
        let location = store.snapshot().location;
        field.commit(&location, &mut store);

        assert_eq!(field.text(), "");
        assert_eq!(store.snapshot().location.longitude, None);
        assert_eq!(store.snapshot().location.latitude, Some(1.0));
    }

    #[test]
    fn sync_does_not_clobber_pending_edit() {
        let mut field = CoordinateField::new(Axis::Latitude, Some(5.0));
        field.set_text("6");
        field.sync(Some(5.0));
        assert_eq!(field.text(), "6");

        let mut recorder = Recorder::default();
        field.commit(&LocationSettings::default(), &mut recorder);
        field.sync(Some(7.0));
        assert_eq!(field.text(), "7°");
    }
}
