use eframe::egui;
use log::debug;
use crate::utils::normalize_time_of_day;

/// Checkbox bound to a derived boolean. Returns the new state when the user
/// toggled it this frame.
pub fn automation_checkbox(ui: &mut egui::Ui, checked: bool) -> Option<bool> {
    let mut value = checked;
    if ui.checkbox(&mut value, "").changed() {
        Some(value)
    } else {
        None
    }
}

/// Start/end time inputs. Edits are committed when focus leaves a field.
#[derive(Debug, Clone, Default)]
pub struct TimeRangePicker {
    start_text: String,
    end_text: String,
    /// Set when either text was edited since the last commit
    dirty: bool,
}

impl TimeRangePicker {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start_text: start.to_string(),
            end_text: end.to_string(),
            dirty: false,
        }
    }

    pub fn start_text(&self) -> &str {
        &self.start_text
    }

    pub fn end_text(&self) -> &str {
        &self.end_text
    }

    pub fn set_texts(&mut self, start: &str, end: &str) {
        self.start_text = start.to_string();
        self.end_text = end.to_string();
        self.dirty = true;
    }

    /// Validates the current texts against the stored range. Returns the new
    /// pair when both are valid and something changed; otherwise reverts the
    /// texts to the stored values.
    pub fn commit(&mut self, start: &str, end: &str) -> Option<(String, String)> {
        self.dirty = false;
        match (normalize_time_of_day(&self.start_text), normalize_time_of_day(&self.end_text)) {
            (Some(new_start), Some(new_end)) => {
                self.start_text = new_start.clone();
                self.end_text = new_end.clone();
                if new_start == start && new_end == end {
                    None
                } else {
                    Some((new_start, new_end))
                }
            }
            _ => {
                debug!("Rejected time range {:?} - {:?}", self.start_text, self.end_text);
                self.start_text = start.to_string();
                self.end_text = end.to_string();
                None
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, start: &str, end: &str) -> Option<(String, String)> {
        let start_response = ui.add(egui::TextEdit::singleline(&mut self.start_text).desired_width(48.0));
        ui.label("-");
        let end_response = ui.add(egui::TextEdit::singleline(&mut self.end_text).desired_width(48.0));

        if start_response.changed() || end_response.changed() {
            self.dirty = true;
        }

        let editing = start_response.has_focus() || end_response.has_focus();
        if self.dirty && !editing && (start_response.lost_focus() || end_response.lost_focus()) {
            return self.commit(start, end);
        }

        if !editing && !self.dirty {
            self.start_text = start.to_string();
            self.end_text = end.to_string();
        }
        None
    }
}
