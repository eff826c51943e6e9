//! Per-frame update

use eframe::egui;

use super::ConversationApp;
use crate::ui::ListOutput;

impl ConversationApp {
    /// Render the conversation into the central panel.
    pub fn render(&mut self, ctx: &egui::Context) -> ListOutput {
        let frame = egui::Frame::new().fill(self.palette.background);
        egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                self.list
                    .show(ui, &self.messages, &mut self.states, &self.palette)
            })
            .inner
    }
}

impl eframe::App for ConversationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
