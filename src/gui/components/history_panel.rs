// src/gui/components/history_panel.rs
//
// Left panel: all report rows from the last sync, newest first. Clicking an
// entry renders that day's report instead of today's. The list is replaced
// wholesale on every refresh; the selection snaps back to latest then.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::pages::AppCtx;
use crate::store::Phase;

pub fn draw(ui: &mut egui::Ui, ctx: &mut AppCtx) {
    ui.heading("Reports");
    ui.separator();

    if ctx.store.phase() != Phase::Ready {
        ui.weak("Nothing to list yet");
        return;
    }

    let count = ctx.store.reports().len();
    let selected = ctx.store.selected();
    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.label("Date");
            });
            header.col(|ui| {
                ui.label("Status");
            });
        })
        .body(|mut body| {
            body.rows(18.0, count, |mut row| {
                // newest first in the listing
                let ix = count - 1 - row.index();
                let report = &ctx.store.reports()[ix];
                row.col(|ui| {
                    if ui.selectable_label(ix == selected, &report.date).clicked() {
                        clicked = Some(ix);
                    }
                });
                row.col(|ui| {
                    ui.label(&report.status);
                });
            });
        });

    if let Some(ix) = clicked {
        ctx.store.select(ix);
    }
}
