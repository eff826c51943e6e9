//! Text style definitions.
//!
//! Two named styles are added on top of egui's defaults:
//!
//! - **title_small**: 14px proportional, used for author names
//! - **body_small**: 12px proportional, used for message bodies

use eframe::egui::{self, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use super::colors::Palette;

pub const TITLE_SMALL: &str = "title_small";
pub const BODY_SMALL: &str = "body_small";

pub fn title_small() -> TextStyle {
    TextStyle::Name(TITLE_SMALL.into())
}

pub fn body_small() -> TextStyle {
    TextStyle::Name(BODY_SMALL.into())
}

/// Resolve a text style against `style`, using a proportional font of
/// `fallback_size` when the style has not been registered.
pub fn font_for(style: &egui::Style, text_style: &TextStyle, fallback_size: f32) -> FontId {
    style
        .text_styles
        .get(text_style)
        .cloned()
        .unwrap_or_else(|| FontId::proportional(fallback_size))
}

/// Text styles for the conversation screen.
///
/// # Styles
///
/// - **Small**: 10px proportional
/// - **Body**: 14px proportional, default egui labels
/// - **Button**: 13px proportional
/// - **Heading**: 18px proportional
/// - **Monospace**: 13px monospace
/// - **title_small**: 14px proportional, author names
/// - **body_small**: 12px proportional, message bodies
///
/// # Returns
///
/// A complete map suitable for `egui::Style::text_styles`.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(18.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (title_small(), FontId::new(14.0, Proportional)),
        (body_small(), FontId::new(12.0, Proportional)),
    ]
    .into()
}

/// Apply palette and typography to the egui context.
///
/// # What This Does
///
/// 1. **Theme**: pins egui to the palette's dark or light theme, so the
///    system preference does not swap in unstyled visuals
/// 2. **Visuals**: panel, window and text colours from the palette
/// 3. **Typography**: the styles from [`configure_text_styles`]
/// 4. **Spacing**: 8px horizontal / 4px vertical item spacing, 8px window
///    margin, floating scroll bars
///
/// # Usage
///
/// Call once from the creation context:
///
/// ```ignore
/// let palette = Palette::from_choice(config.theme);
/// apply_app_style(&cc.egui_ctx, &palette);
/// ```
pub fn apply_app_style(ctx: &egui::Context, palette: &Palette) {
    ctx.set_theme(if palette.dark_mode {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    ctx.set_visuals(palette.visuals());

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.window_margin = egui::Margin::same(8);
    style.spacing.scroll.floating = true;
    ctx.set_style(style);
}
