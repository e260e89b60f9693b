use anyhow::anyhow;
use desktop_pet::app::PetApp;
use desktop_pet::pet::model::{WINDOW_HEIGHT, WINDOW_WIDTH};
use desktop_pet::settings::Settings;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    desktop_pet::logging::init(settings.debug_logging, settings.log_path());
    tracing::info!("starting desktop pet");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Desktop Pet")
            .with_inner_size([WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32])
            .with_transparent(true)
            .with_decorations(false)
            .with_resizable(false)
            .with_taskbar(false)
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "Desktop Pet",
        native_options,
        Box::new(move |cc| Box::new(PetApp::new(cc, settings))),
    )
    .map_err(|e| anyhow!("desktop pet window failed: {e}"))?;

    tracing::info!("desktop pet exited");
    Ok(())
}
