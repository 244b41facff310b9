use eframe::egui;
use log::debug;
use crate::gui::controls::{automation_checkbox, TimeRangePicker};
use crate::gui::coordinate_field::CoordinateField;
use crate::models::{Automation, Axis, SettingsActions, SettingsPatch, UserSettings};
use crate::utils::get_local_message;

/// Text buffers owned by the panel between frames.
#[derive(Debug, Clone)]
pub struct MoreSettingsState {
    pub time_range: TimeRangePicker,
    pub latitude: CoordinateField,
    pub longitude: CoordinateField,
}

impl MoreSettingsState {
    pub fn new(data: &UserSettings) -> Self {
        Self {
            time_range: TimeRangePicker::new(&data.time.activation, &data.time.deactivation),
            latitude: CoordinateField::new(Axis::Latitude, data.location.latitude),
            longitude: CoordinateField::new(Axis::Longitude, data.location.longitude),
        }
    }

    pub fn field_mut(&mut self, axis: Axis) -> &mut CoordinateField {
        match axis {
            Axis::Latitude => &mut self.latitude,
            Axis::Longitude => &mut self.longitude,
        }
    }

    /// Checkbox handler: checking selects `mode`, unchecking turns automation off.
    pub fn toggle_automation(&mut self, mode: Automation, checked: bool, actions: &mut impl SettingsActions) {
        let automation = if checked { mode } else { Automation::Off };
        debug!("Automation checkbox {:?} -> {}", mode, checked);
        actions.change_settings(SettingsPatch::automation(automation));
    }

    pub fn change_time_range(&mut self, start: String, end: String, actions: &mut impl SettingsActions) {
        actions.change_settings(SettingsPatch::time(start, end));
    }

    pub fn commit_coordinate(&mut self, axis: Axis, data: &UserSettings, actions: &mut impl SettingsActions) -> Option<f64> {
        self.field_mut(axis).commit(&data.location, actions)
    }
}

/// Renders the time/location auto-activation panel.
///
/// Expansion is owned by the caller: nothing is drawn while `is_expanded` is
/// false, and the close button only calls `on_close`.
pub fn show_more_settings(
    ui: &mut egui::Ui,
    state: &mut MoreSettingsState,
    data: &UserSettings,
    actions: &mut impl SettingsActions,
    is_expanded: bool,
    on_close: impl FnOnce(),
) {
    if !is_expanded {
        return;
    }

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            let mut close_clicked = false;

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(get_local_message("time_settings")).size(14.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(egui::Button::new(egui::RichText::new("✕").size(12.0)).frame(false)).clicked() {
                        close_clicked = true;
                    }
                });
            });
            ui.separator();

            ui.horizontal(|ui| {
                if let Some(checked) = automation_checkbox(ui, data.automation == Automation::Time) {
                    state.toggle_automation(Automation::Time, checked, actions);
                }
                if let Some((start, end)) = state.time_range.show(ui, &data.time.activation, &data.time.deactivation) {
                    state.change_time_range(start, end, actions);
                }
            });
            ui.label(egui::RichText::new(get_local_message("set_active_hours")).weak().small());

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if let Some(checked) = automation_checkbox(ui, data.automation == Automation::Sunset) {
                    state.toggle_automation(Automation::Sunset, checked, actions);
                }
                state.latitude.show(ui, &data.location, actions);
                state.longitude.show(ui, &data.location, actions);
            });
            ui.label(egui::RichText::new(get_local_message("set_location")).weak().small());

            if close_clicked {
                on_close();
            }
        });
}
