//! Avatar drawing.

use eframe::egui::{self, Color32, Sense, Stroke};

use super::colors::{mix, Palette};

pub const AVATAR_SIZE: f32 = 40.0;
pub const AVATAR_BORDER: f32 = 1.5;

/// Draw a circular, bordered avatar for `seed`.
///
/// # Design
///
/// - Background: the palette's surface tinted towards `secondary`
/// - Face: a 5x5 block pattern from [`avatar_pattern`], mirrored left to
///   right and drawn in `primary`; cells outside the circle are skipped
/// - Border: a 1.5px ring in `secondary`
///
/// Decorative only, no alternative text.
///
/// # Parameters
///
/// - `ui`: The egui UI context
/// - `seed`: Any string; the author name in practice. Same seed, same face
/// - `size`: Diameter in points
/// - `palette`: Colour tokens
///
/// # Returns
///
/// A hover-only response for the `size` x `size` square the avatar occupies.
pub fn render_avatar(ui: &mut egui::Ui, seed: &str, size: f32, palette: &Palette) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter_at(rect.expand(AVATAR_BORDER));
    let center = rect.center();
    let radius = size / 2.0;

    painter.circle_filled(center, radius, avatar_background(palette));

    let pattern = avatar_pattern(seed);
    let cell = size / 6.0;
    let origin = rect.min + egui::vec2(cell * 0.5, cell * 0.5);
    for row in 0..5 {
        for col in 0..5 {
            let mirrored = if col < 3 { col } else { 4 - col };
            if pattern & (1 << (row * 3 + mirrored)) == 0 {
                continue;
            }
            let min = origin + egui::vec2(col as f32 * cell, row as f32 * cell);
            let cell_center = min + egui::vec2(cell / 2.0, cell / 2.0);
            if (cell_center - center).length() < radius - cell * 0.3 {
                painter.rect_filled(
                    egui::Rect::from_min_size(min, egui::vec2(cell * 0.85, cell * 0.85)),
                    cell * 0.2,
                    palette.primary,
                );
            }
        }
    }

    painter.circle_stroke(center, radius, Stroke::new(AVATAR_BORDER, palette.secondary));

    response
}

/// 15-bit pattern for a mirrored 5x5 grid (3 distinct columns by 5 rows).
///
/// FNV-1a over the seed bytes, with the centre column always partly filled.
pub fn avatar_pattern(seed: &str) -> u16 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in seed.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash as u16 & 0x7FFF) | 0x0084
}

/// Background tint used behind the avatar pattern.
fn avatar_background(palette: &Palette) -> Color32 {
    mix(palette.surface, palette.secondary, 0.35)
}
