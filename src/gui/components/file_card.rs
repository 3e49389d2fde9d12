// src/gui/components/file_card.rs
//
// The lab-report file card. Resolves the Drive share link into
// preview/open/download links; when no file id can be extracted we show the
// placeholder card with no external links rather than a broken one.

use eframe::egui;

use crate::core::drive::{self, FileKind};
use crate::report::LabReport;

pub fn draw(ui: &mut egui::Ui, report: &LabReport) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Official Laboratory Report");
        ui.label("Certified • Sealed • Verified");
        ui.separator();

        match drive::resolve(&report.file_url) {
            Some(links) => {
                ui.label(egui::RichText::new(&report.file_name).strong());
                match drive::file_kind(&report.file_name) {
                    FileKind::Image => {
                        ui.label("Photo report — open in browser to view:");
                    }
                    FileKind::Pdf => {
                        ui.label("PDF report — open in browser to view:");
                    }
                    FileKind::Unknown => {
                        ui.label("Preview unavailable for this file type:");
                    }
                }
                ui.horizontal(|ui| {
                    ui.hyperlink_to("Preview", &links.preview);
                    ui.hyperlink_to("Open", &links.open);
                    ui.hyperlink_to("Download", &links.download);
                });
            }
            None => {
                // Placeholder: nothing uploaded yet, or an unrecognized link.
                ui.label(egui::RichText::new(&report.file_name).strong());
                ui.label("Laboratory Certified");
                ui.weak("Report will appear here automatically when uploaded");
            }
        }
    });
}
