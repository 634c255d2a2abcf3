use eframe::{NativeOptions, egui};

use passgen::app::PassGenApp;
use passgen::settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let settings = AppSettings::load();
    log::info!(
        "Starting PassGen (sampling bound: {:?})",
        settings.sampling_bound
    );

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PassGen")
            .with_inner_size([settings.window_width, settings.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "PassGen",
        native_options,
        Box::new(|_cc| Ok(Box::new(PassGenApp::new(settings)))),
    )
}
