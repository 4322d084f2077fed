//! Folio GUI - Main Entry Point

use folio_gui::app::application::run_app;
use folio_gui::app::config::FolioConfig;
use folio_gui::app::logging;

fn main() {
    let config = FolioConfig::load_or_default();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = logging::init(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Folio GUI...");

    run_app(config);
}
