//! Conversation viewer: a scrollable list of chat messages with
//! expandable bodies, rendered with egui.

use eframe::egui;

use conversation_viewer::app::ConversationApp;
use conversation_viewer::config::{self, AppConfig};
use conversation_viewer::logging;

fn main() -> eframe::Result<()> {
    logging::init();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}; using default configuration");
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([280.0, 200.0])
            .with_title("Conversation"),
        ..Default::default()
    };

    tracing::info!("starting conversation viewer");
    eframe::run_native(
        "Conversation",
        options,
        Box::new(move |cc| Ok(Box::new(ConversationApp::new(cc, &config)))),
    )
}
