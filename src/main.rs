//! Bordados GUI - Main Entry Point
//!
//! Desktop shell for the Bordados embroidery catalog

use bordados_gui::app::application::run_app;
use bordados_gui::logging;
use bordados_gui::states::AppConfig;

fn main() {
    let loaded = AppConfig::load();
    let _log_guard = logging::init(loaded.config.log_to_file);
    loaded.report();

    let config = loaded.config;
    tracing::info!(locale = ?config.locale(), "Starting Bordados GUI...");

    // Run the GPUI application
    run_app(config);
}
