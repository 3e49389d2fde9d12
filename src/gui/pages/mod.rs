// src/gui/pages/mod.rs
use std::sync::MutexGuard;

use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    scheduler::Scheduler,
    store::ReportStore,
};

pub mod contact;
pub mod order;
pub mod report;

/// Light-weight context pages use to interact with the app.
/// The store lock is held for the duration of a draw; page methods run
/// quickly and return.
pub struct AppCtx<'a> {
    pub egui_ctx: &'a egui::Context,
    pub state: &'a mut AppState,

    pub store: MutexGuard<'a, ReportStore>,
    pub scheduler: &'a mut Scheduler,

    // Per-page form state
    pub order: &'a mut order::OrderPageState,
    pub contact: &'a mut contact::ContactPageState,

    /// Set by the Refresh button (and on_enter); the app spawns the sync
    /// after the frame.
    pub refresh_requested: &'a mut bool,

    pub syncing: bool,
    pub status: String,
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body into the central panel.
    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx);

    /// Called when the tab becomes active.
    fn on_enter(&self, _ctx: &mut AppCtx) {}

    /// Called when the tab is left. The report page cancels its timer here.
    fn on_leave(&self, _ctx: &mut AppCtx) {}
}
