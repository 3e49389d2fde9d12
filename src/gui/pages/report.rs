// src/gui/pages/report.rs
//
// The quality-verification page. Reads the store, never the network: the
// sync worker and the scheduler feed it.

use eframe::egui;

use crate::{
    config::consts::{FAT_BAR_SCALE, SNF_BAR_SCALE},
    config::options::PageKind::{self, *},
    gui::components::{file_card, metric_bar, notice},
    report::LabReport,
    store::Phase,
};

use super::{AppCtx, Page};

pub struct ReportPage;
pub static PAGE: ReportPage = ReportPage;

impl Page for ReportPage {
    fn title(&self) -> &'static str {
        "Quality Report"
    }

    fn kind(&self) -> PageKind {
        Report
    }

    fn on_enter(&self, ctx: &mut AppCtx) {
        // Mounting the view: one immediate sync, then the recurring timer.
        ctx.scheduler.start();
        logf!("Report: view active, timer started");
    }

    fn on_leave(&self, ctx: &mut AppCtx) {
        // Leaving the view cancels the timer. An in-flight sync may still
        // land in the store; that's fine, nobody is watching it.
        ctx.scheduler.stop();
        logf!("Report: view inactive, timer cancelled");
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.heading("Purity. Proven Daily.");
        ui.label("Real-time laboratory certification • Updated every morning");
        ui.separator();

        draw_status_row(ui, ctx);
        notice::draw(ui, &mut ctx.store);

        match ctx.store.phase() {
            Phase::NeverSynced => {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label("Loading today's purity report…");
                });
            }
            Phase::Empty => {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.heading("No report available yet");
                    ui.weak("Today's report will appear here once the lab uploads it.");
                });
            }
            Phase::Ready => {
                let report = ctx.store.current().cloned();
                if let Some(report) = report {
                    draw_report(ui, &report);
                }
            }
        }
    }
}

fn draw_status_row(ui: &mut egui::Ui, ctx: &mut AppCtx) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!ctx.syncing, egui::Button::new("⟳ Refresh"))
            .clicked()
        {
            *ctx.refresh_requested = true;
        }
        if ctx.syncing {
            ui.spinner();
        }
        ui.label(&ctx.status);
        if let Some(t) = ctx.store.last_sync() {
            ui.weak(format!("Last sync {t}"));
        }
        ui.weak("LIVE • auto-updated");
    });
    ui.add_space(6.0);
}

fn draw_report(ui: &mut egui::Ui, report: &LabReport) {
    ui.columns(2, |cols| {
        // Left: metrics
        cols[0].group(|ui| {
            ui.label(egui::RichText::new("Test date").small().strong());
            ui.heading(&report.date);
            ui.separator();

            metric_bar::draw(ui, "Fat content", &report.fat, FAT_BAR_SCALE);
            metric_bar::draw(ui, "SNF", &report.snf, SNF_BAR_SCALE);

            ui.separator();
            ui.horizontal(|ui| {
                status_chip(ui, "Quality", &report.status);
                status_chip(ui, "FSSAI", &report.fssai);
            });
        });

        // Right: report file
        file_card::draw(&mut cols[1], report);
    });
}

fn status_chip(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).small());
            ui.label(egui::RichText::new(value).strong());
        });
    });
}
