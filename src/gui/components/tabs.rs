// src/gui/components/tabs.rs
//
// Top tab bar. The switch itself (on_leave/on_enter, timer start/stop)
// happens in App::switch_page.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App, egui_ctx: &egui::Context) {
    let mut clicked: Option<usize> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                clicked = Some(idx);
            }
        }
    });

    if let Some(idx) = clicked {
        app.switch_page(egui_ctx, idx);
    }
}
