use eframe::egui;
use log::{error, info};
use shared::FixtureDataSource;

mod config;
mod ui;

use config::DashboardConfig;
use ui::FinancialDashboardApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging, verbosity via RUST_LOG
    env_logger::init();
    info!("Starting Financial Dashboard egui application");

    let (config, warning_message) = match DashboardConfig::load() {
        Ok(config) => (config, None),
        Err(e) => {
            error!("{}, falling back to default settings", e);
            (
                DashboardConfig::default(),
                Some(format!("{}. Using default settings.", e)),
            )
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size(config.min_window_size())
            .with_title(config.title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            match FinancialDashboardApp::new(&config, &FixtureDataSource, warning_message) {
                Ok(app) => {
                    info!("Successfully initialized Financial Dashboard app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {:#}", e);
                    Err(format!("Failed to initialize app: {:#}", e).into())
                }
            }
        }),
    )
}
