//! The scrollable conversation list.

use std::ops::Range;

use eframe::egui;

use crate::config::AppConfig;
use crate::message::Message;
use crate::state::{RetentionPolicy, RowStates};
use crate::ui::theme::Palette;

use super::row;
use super::viewport::{visible_window, RowHeights};

/// What a single `show` call did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListOutput {
    /// Indices of the rows laid out this frame, in display order.
    pub rendered: Vec<usize>,
    /// Screen rectangles of the rendered rows, parallel to `rendered`.
    pub row_rects: Vec<egui::Rect>,
    /// Rows whose toggle fired this frame.
    pub toggled: Vec<usize>,
}

/// Vertically scrolling, virtualised list of message rows.
///
/// The list owns layout bookkeeping only (measured row heights and the last
/// materialised window). Expansion state lives in the caller's `RowStates`
/// so the list can be rebuilt without losing it.
pub struct ConversationList {
    id: egui::Id,
    heights: RowHeights,
    retention: RetentionPolicy,
    overscan: f32,
    animation_secs: f32,
    window: Range<usize>,
}

impl ConversationList {
    pub fn new(id_salt: impl std::hash::Hash, config: &AppConfig) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            heights: RowHeights::default(),
            retention: config.retention,
            overscan: config.overscan_px,
            animation_secs: config.animation_secs,
            window: 0..0,
        }
    }

    /// Lay out the rows near the viewport and apply any toggles.
    ///
    /// Row `i` always renders `messages[i]`; the order is never changed.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        messages: &[Message],
        states: &mut RowStates,
        palette: &Palette,
    ) -> ListOutput {
        self.heights.resize(messages.len());
        states.resize(messages.len());

        // Rows toggled last frame change height; measure them again.
        for index in states.take_dirty() {
            self.heights.invalidate(index);
        }

        let mut output = ListOutput::default();
        let mut toggled = Vec::new();

        egui::ScrollArea::vertical()
            .id_salt(self.id)
            .auto_shrink([false; 2])
            .show_viewport(ui, |ui, viewport| {
                ui.spacing_mut().item_spacing.y = 0.0;
                ui.set_width(ui.available_width());

                let window = visible_window(&self.heights, viewport.min.y, viewport.max.y, self.overscan);
                if window.range != self.window {
                    tracing::trace!(start = window.range.start, end = window.range.end, "list window moved");
                    self.window = window.range.clone();
                }

                if self.retention == RetentionPolicy::ResetOffscreen {
                    self.reset_offscreen(states, &window.range);
                }

                if window.space_before > 0.0 {
                    ui.add_space(window.space_before);
                }

                for index in window.range.clone() {
                    let Some(message) = messages.get(index) else {
                        break;
                    };
                    let Some(state) = states.mount(index) else {
                        continue;
                    };
                    let expanded = state.expansion.is_expanded();
                    let row_id = self.id.with((index, state.mount));

                    let top = ui.cursor().min.y;
                    let response = row::show(
                        ui,
                        message,
                        row_id,
                        expanded,
                        palette,
                        self.animation_secs,
                        || toggled.push(index),
                    );
                    self.heights.set(index, ui.cursor().min.y - top);

                    output.rendered.push(index);
                    output.row_rects.push(response.rect);
                }

                if window.space_after > 0.0 {
                    ui.add_space(window.space_after);
                }
            });

        for &index in &toggled {
            states.toggle(index);
        }
        if !toggled.is_empty() {
            ui.ctx().request_repaint();
        }
        output.toggled = toggled;
        output
    }

    /// Unmount rows outside `keep`. Expanded rows lose their measured height
    /// since they come back collapsed.
    fn reset_offscreen(&mut self, states: &mut RowStates, keep: &Range<usize>) {
        for index in 0..states.len() {
            if !keep.contains(&index) && states.is_expanded(index) {
                self.heights.invalidate(index);
            }
        }
        states.unmount_outside(keep.clone());
    }
}
