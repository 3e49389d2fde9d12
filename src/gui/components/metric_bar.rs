// src/gui/components/metric_bar.rs
//
// Labelled percentage metric with a cosmetic fill bar. The upstream value is
// free text; anything unparsable renders as a zero fill, never an error.

use eframe::egui;

use crate::core::text::leading_number;

/// Fraction of the bar to fill for `value` on a scale where `scale` is full.
pub fn fill_fraction(value: &str, scale: f32) -> f32 {
    let n = leading_number(value).unwrap_or(0.0);
    if scale <= 0.0 {
        return 0.0;
    }
    (n / scale).clamp(0.0, 1.0)
}

pub fn draw(ui: &mut egui::Ui, label: &str, value: &str, scale: f32) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(egui::RichText::new(value).heading());
    });
    let frac = fill_fraction(value, scale);
    ui.add(egui::ProgressBar::new(frac).desired_height(10.0));
    ui.add_space(6.0);
}
