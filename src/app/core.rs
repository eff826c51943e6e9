//! Core ConversationApp struct definition and initialization

use crate::config::AppConfig;
use crate::message::Message;
use crate::sample_data;
use crate::state::RowStates;
use crate::ui::{self, ConversationList, Palette};

pub struct ConversationApp {
    /// The conversation being shown. Read-only after construction.
    pub messages: Vec<Message>,

    /// Expansion state for each row, keyed by index.
    pub states: RowStates,

    pub list: ConversationList,
    pub palette: Palette,
}

impl ConversationApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let app = Self::with_messages(sample_data::conversation(), config);
        ui::theme::apply_app_style(&cc.egui_ctx, &app.palette);
        app
    }

    /// Build the app around an arbitrary conversation. Styling is not
    /// applied to any context; use this for headless rendering.
    pub fn with_messages(messages: Vec<Message>, config: &AppConfig) -> Self {
        tracing::info!(messages = messages.len(), theme = ?config.theme, "conversation loaded");
        Self {
            states: RowStates::new(messages.len()),
            list: ConversationList::new("conversation", config),
            palette: Palette::from_choice(config.theme),
            messages,
        }
    }
}
