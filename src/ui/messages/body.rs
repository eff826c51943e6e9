//! Message body layout: the one-line / full-text policy.

use eframe::egui::text::{LayoutJob, TextFormat, TextWrapping};
use eframe::egui::{Color32, FontId};

/// Glyph drawn where a collapsed body is cut off.
pub const OVERFLOW_CHAR: char = '…';

/// How many rows a body may occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyLines {
    /// Exactly one visible row; the rest is elided.
    Single,
    /// Every row, including embedded line breaks.
    Unlimited,
}

impl BodyLines {
    pub fn for_expanded(expanded: bool) -> Self {
        if expanded {
            Self::Unlimited
        } else {
            Self::Single
        }
    }

    pub fn max_rows(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Unlimited => usize::MAX,
        }
    }
}

/// Build the layout job for a body wrapped at `wrap_width`.
pub fn body_job(
    text: &str,
    font_id: FontId,
    color: Color32,
    wrap_width: f32,
    lines: BodyLines,
) -> LayoutJob {
    let mut job = LayoutJob::single_section(text.to_owned(), TextFormat::simple(font_id, color));
    job.wrap = TextWrapping {
        max_width: wrap_width.max(0.0),
        max_rows: lines.max_rows(),
        break_anywhere: lines == BodyLines::Single,
        overflow_character: Some(OVERFLOW_CHAR),
    };
    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui;

    const LONG: &str = "List of Android versions:\nAndroid KitKat (API 19)\nAndroid Lollipop (API 21)\nAndroid Marshmallow (API 23)";

    fn layout(text: &str, lines: BodyLines, width: f32) -> std::sync::Arc<egui::Galley> {
        let ctx = egui::Context::default();
        let mut galley = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let job = body_job(text, FontId::proportional(12.0), Color32::WHITE, width, lines);
            galley = Some(ctx.fonts(|f| f.layout_job(job)));
        });
        galley.expect("layout ran")
    }

    #[test]
    fn test_policy_for_state() {
        assert_eq!(BodyLines::for_expanded(false), BodyLines::Single);
        assert_eq!(BodyLines::for_expanded(true), BodyLines::Unlimited);
        assert_eq!(BodyLines::Single.max_rows(), 1);
    }

    #[test]
    fn test_collapsed_is_one_row() {
        let galley = layout(LONG, BodyLines::Single, 300.0);
        assert!(galley.rows.len() <= 1);
        assert!(galley.elided);
    }

    #[test]
    fn test_collapsed_long_single_paragraph() {
        let text = "Writing Kotlin for UI seems so natural, Compose where have you been all my life?";
        let galley = layout(text, BodyLines::Single, 60.0);
        assert!(galley.rows.len() <= 1);
    }

    #[test]
    fn test_short_body_fits_collapsed() {
        let galley = layout("Test...Test...Test...", BodyLines::Single, 300.0);
        assert_eq!(galley.rows.len(), 1);
        assert!(!galley.elided);
    }

    #[test]
    fn test_expanded_shows_every_line() {
        let galley = layout(LONG, BodyLines::Unlimited, 300.0);
        assert!(galley.rows.len() >= 4);
        assert!(!galley.elided);
        assert_eq!(galley.text(), LONG);
    }
}
