//! A single conversation row: avatar, author and expandable body.

use eframe::egui::{self, CornerRadius, Label, Margin, RichText, Sense};

use crate::message::Message;
use crate::ui::theme::{self, font_for, Palette, AVATAR_SIZE};

use super::body::{body_job, BodyLines};

const ROW_PADDING: i8 = 8;
const AVATAR_GAP: f32 = 8.0;
const AUTHOR_GAP: f32 = 4.0;
const BODY_PADDING: f32 = 4.0;
const BODY_RADIUS: u8 = 8;
const ELEVATION: f32 = 1.0;

/// Render one message row.
///
/// # Layout
///
/// ```text
/// +--------+  Author                (title_small, secondary colour)
/// | avatar |  +--------------------+
/// +--------+  | body bubble        |
///             +--------------------+
/// ```
///
/// - 8px padding around the row, 8px between avatar and text column
/// - 4px between the author line and the body bubble
/// - Collapsed: the body is cut to one row and ends in `…`
/// - Expanded: every row of the body, embedded line breaks included
///
/// # Interaction
///
/// A primary click anywhere on the author/body column calls `on_toggle`
/// once. The avatar and the row padding are inert, and there is no keyboard
/// path.
///
/// # Parameters
///
/// - `ui`: The egui UI to add the row to
/// - `message`: The message to show
/// - `id`: Key for the row's animations; must stay stable while the row is
///   mounted and change when it is remounted
/// - `expanded`: Current expansion state, owned by the caller
/// - `palette`: Colour tokens
/// - `animation_secs`: Length of the expand/collapse transition; `0.0`
///   applies the new size on the same frame
/// - `on_toggle`: Called when the row is clicked
///
/// # Returns
///
/// Response covering the whole row including padding. Its rect is the row's
/// measured extent.
pub fn show(
    ui: &mut egui::Ui,
    message: &Message,
    id: egui::Id,
    expanded: bool,
    palette: &Palette,
    animation_secs: f32,
    on_toggle: impl FnOnce(),
) -> egui::Response {
    let frame = egui::Frame::new().inner_margin(Margin::same(ROW_PADDING));
    let inner = frame.show(ui, |ui| {
        ui.style_mut().interaction.selectable_labels = false;
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            theme::render_avatar(ui, &message.author, AVATAR_SIZE, palette);
            ui.add_space(AVATAR_GAP);

            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                let author_font = font_for(ui.style(), &theme::title_small(), 14.0);
                ui.add(
                    Label::new(
                        RichText::new(&message.author)
                            .font(author_font)
                            .color(palette.secondary)
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.add_space(AUTHOR_GAP);
                body_surface(ui, message, id, expanded, palette, animation_secs);
            })
            .response
        })
        .inner
    });

    let content = inner.inner.interact(Sense::click());
    if content.clicked() {
        on_toggle();
    }

    inner.response
}

/// The body bubble. Height and fill follow the expansion state through
/// egui's animation manager, so the bubble grows and shrinks instead of
/// snapping.
fn body_surface(
    ui: &mut egui::Ui,
    message: &Message,
    id: egui::Id,
    expanded: bool,
    palette: &Palette,
    animation_secs: f32,
) -> egui::Response {
    let ctx = ui.ctx().clone();
    let progress = if animation_secs > 0.0 {
        ctx.animate_bool_with_time(id.with("expanded"), expanded, animation_secs)
    } else if expanded {
        1.0
    } else {
        0.0
    };

    let font_id = font_for(ui.style(), &theme::body_small(), 12.0);
    let wrap_width = ui.available_width() - 2.0 * BODY_PADDING - ELEVATION;
    let job = body_job(
        &message.body,
        font_id,
        palette.text_primary,
        wrap_width,
        BodyLines::for_expanded(expanded),
    );
    let galley = ui.fonts(|f| f.layout_job(job));

    let text_height = if animation_secs > 0.0 {
        ctx.animate_value_with_time(id.with("height"), galley.size().y, animation_secs)
    } else {
        galley.size().y
    };
    let size = egui::vec2(
        galley.size().x + 2.0 * BODY_PADDING,
        text_height + 2.0 * BODY_PADDING,
    ) + egui::vec2(ELEVATION, ELEVATION);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

    if ui.is_rect_visible(rect) {
        let surface = rect.shrink(ELEVATION / 2.0);
        let painter = ui.painter();
        painter.rect_filled(
            surface.translate(egui::vec2(0.0, ELEVATION)),
            CornerRadius::same(BODY_RADIUS),
            palette.shadow,
        );
        painter.rect_filled(surface, CornerRadius::same(BODY_RADIUS), palette.surface_at(progress));

        let text_rect = surface.shrink(BODY_PADDING);
        ui.painter_at(text_rect)
            .galley(text_rect.min, galley, palette.text_primary);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(message: &Message, expanded: bool) -> egui::Rect {
        let ctx = egui::Context::default();
        let mut rect = egui::Rect::NOTHING;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.set_width(320.0);
                rect = show(
                    ui,
                    message,
                    egui::Id::new("row"),
                    expanded,
                    &Palette::dark(),
                    0.0,
                    || panic!("no click was delivered"),
                )
                .rect;
            });
        });
        rect
    }

    #[test]
    fn test_expanded_row_is_taller() {
        let msg = Message::new("Neide", "one\ntwo\nthree\nfour");
        let collapsed = render(&msg, false);
        let expanded = render(&msg, true);
        assert!(expanded.height() > collapsed.height());
    }

    #[test]
    fn test_row_fits_avatar() {
        let rect = render(&Message::new("Neide", "hi"), false);
        assert!(rect.height() >= AVATAR_SIZE + 2.0 * ROW_PADDING as f32);
    }
}
