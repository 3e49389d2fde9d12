// src/gui/components/notice.rs
//
// Dismissible sync-failure notice. Shown alongside the retained report,
// never instead of it.

use eframe::egui;

use crate::store::ReportStore;

pub fn draw(ui: &mut egui::Ui, store: &mut ReportStore) {
    let Some(text) = store.notice().map(|s| s.to_string()) else {
        return;
    };

    let mut dismissed = false;
    egui::Frame::group(ui.style())
        .fill(ui.visuals().warn_fg_color.gamma_multiply(0.15))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(ui.visuals().warn_fg_color, &text);
                if ui.small_button("Dismiss").clicked() {
                    dismissed = true;
                }
            });
        });
    ui.add_space(6.0);

    if dismissed {
        store.dismiss_notice();
    }
}
