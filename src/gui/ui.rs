use eframe::egui;
use crate::gui::app::ToggleSettingsApp;
use crate::gui::more_settings::show_more_settings;
use crate::utils::get_local_message;

impl ToggleSettingsApp {
    /// Drag strip holding the panel toggle and the window close button.
    fn title_row(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = get_local_message("more_settings");
            if ui.add(egui::Button::new(label).selected(self.is_expanded)).clicked() {
                self.toggle_expanded();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                // Remaining width moves the undecorated window
                let drag = ui.allocate_response(
                    egui::vec2(ui.available_width(), ui.spacing().interact_size.y),
                    egui::Sense::drag(),
                );
                if drag.drag_started() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                }
            });
        });
    }
}

impl eframe::App for ToggleSettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.title_row(ctx, ui);
            ui.label(egui::RichText::new(self.status_text()).weak());
            ui.separator();

            ui.add_space(6.0);

            // The panel reads a snapshot while dispatching into the store
            let data = self.store.snapshot().clone();
            let mut close_requested = false;
            show_more_settings(
                ui,
                &mut self.panel_state,
                &data,
                &mut self.store,
                self.is_expanded,
                || close_requested = true,
            );
            if close_requested {
                self.collapse();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserSettings;

    #[test]
    fn title_row_leaves_expansion_alone_without_clicks() {
        let mut app = ToggleSettingsApp::new(UserSettings::default());
        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| app.title_row(ctx, ui));
            });
        }
        assert!(!app.is_expanded);
    }
}
