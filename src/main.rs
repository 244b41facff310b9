use eframe::{egui, NativeOptions};
use egui::ViewportBuilder;
use log::LevelFilter;
use std::error::Error;

use toggle_settings::ToggleSettingsApp;
use toggle_settings::utils::{get_settings_file_path, load_initial_settings};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = load_initial_settings(&get_settings_file_path());

    // Borderless window with our own header bar
    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([420.0, 260.0])
            .with_min_inner_size([320.0, 160.0])
            .with_resizable(true)
            .with_decorations(false)
            .with_always_on_top(),
        ..Default::default()
    };

    let app = ToggleSettingsApp::new(settings);

    eframe::run_native(
        "Auto Toggle Settings",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
