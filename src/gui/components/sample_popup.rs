// src/gui/components/sample_popup.rs
//
// One-time "try a free sample" popup, shown a couple of seconds after
// launch. Session-scoped: state lives in the App, nothing is persisted.

use eframe::egui;

pub fn draw(ctx: &egui::Context, open: &mut bool, go_to_order: &mut bool) {
    egui::Window::new("Fresh from our farm 🥛")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(open)
        .show(ctx, |ui| {
            ui.label("Taste the difference of farm-fresh milk.");
            ui.label("Request a free sample delivered to your doorstep.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Request a sample").clicked() {
                    *go_to_order = true;
                }
            });
        });
}
