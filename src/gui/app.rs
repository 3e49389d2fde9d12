// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::{
        consts::POPUP_DELAY_SECS,
        options::PageKind::{self, *},
        state::{AppState, GuiState},
    },
    scheduler::Scheduler,
    store::ReportStore,
    sync::{self, SyncOutcome},
};

use super::{
    components,
    pages::{AppCtx, Page, contact::ContactPageState, order::OrderPageState},
    router,
};

/// Native window options derived from the stored GUI geometry.
pub fn native_options(gui: &GuiState) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([gui.window_w as f32, gui.window_h as f32]),
        ..Default::default()
    }
}

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Vizhis Dairy Farm",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // report data; the sync worker writes here
    pub store: Arc<Mutex<ReportStore>>,
    pub scheduler: Scheduler,
    pub syncing: Arc<AtomicBool>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // form state
    pub order: OrderPageState,
    pub contact: ContactPageState,

    // one-time sample popup
    launched: Instant,
    popup_visible: bool,

    refresh_requested: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let interval = state.options.sync.refresh_interval();
        let mut scheduler = Scheduler::new(interval);

        // Report tab is active at launch; its timer starts with it.
        scheduler.start();
        logf!("Init: refresh every {:?}", interval);

        Self {
            state,
            store: Arc::new(Mutex::new(ReportStore::default())),
            scheduler,
            syncing: Arc::new(AtomicBool::new(false)),
            status: Arc::new(Mutex::new(s!("Loading…"))),
            order: OrderPageState::default(),
            contact: ContactPageState::default(),
            launched: Instant::now(),
            popup_visible: false,
            refresh_requested: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.gui.current_page_index
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind {
        router::all_pages()[self.current_index()].kind()
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        router::all_pages()[self.current_index()]
    }

    pub fn switch_page(&mut self, egui_ctx: &egui::Context, idx: usize) {
        if idx == self.current_index() || idx >= router::all_pages().len() {
            return;
        }
        let prev = self.current_page();
        let next = router::all_pages()[idx];
        logf!("UI: page switch {:?} → {:?}", prev.kind(), next.kind());

        {
            let mut ctx = self.page_ctx(egui_ctx);
            prev.on_leave(&mut ctx);
        }
        self.state.gui.current_page_index = idx;
        {
            let mut ctx = self.page_ctx(egui_ctx);
            next.on_enter(&mut ctx);
        }
    }

    fn page_ctx<'a>(&'a mut self, egui_ctx: &'a egui::Context) -> AppCtx<'a> {
        AppCtx {
            egui_ctx,
            state: &mut self.state,
            store: self.store.lock().unwrap(),
            scheduler: &mut self.scheduler,
            order: &mut self.order,
            contact: &mut self.contact,
            refresh_requested: &mut self.refresh_requested,
            syncing: self.syncing.load(Ordering::Relaxed),
            status: self.status.lock().unwrap().clone(),
        }
    }

    /// Spawn one Report Sync in the background. Overlapping syncs are
    /// allowed; the store is last-write-wins.
    fn start_sync(&mut self, egui_ctx: &egui::Context) {
        self.scheduler.mark(Instant::now());
        self.syncing.store(true, Ordering::SeqCst);
        *self.status.lock().unwrap() = s!("Refreshing…");

        let opts = self.state.options.sync.clone();
        let store = Arc::clone(&self.store);
        let syncing = Arc::clone(&self.syncing);
        let status = Arc::clone(&self.status);
        let ctx2 = egui_ctx.clone();

        thread::spawn(move || {
            let result = sync::fetch_reports(&opts).map_err(|e| e.to_string());
            let msg = match &result {
                Ok(SyncOutcome::Reports(r)) => format!("Ready: {} report(s)", r.len()),
                Ok(SyncOutcome::NoData) => s!("No report available yet"),
                Err(e) => format!("Error: {e}"),
            };
            store.lock().unwrap().apply(result);
            *status.lock().unwrap() = msg;
            syncing.store(false, Ordering::SeqCst);
            ctx2.request_repaint();
        });
    }

    fn maybe_show_popup(&mut self, egui_ctx: &egui::Context) {
        if !self.state.gui.popup_shown
            && self.launched.elapsed() >= Duration::from_secs(POPUP_DELAY_SECS)
        {
            self.state.gui.popup_shown = true;
            self.popup_visible = true;
        }
        if self.popup_visible {
            let mut open = self.popup_visible;
            let mut go_to_order = false;
            components::sample_popup::draw(egui_ctx, &mut open, &mut go_to_order);
            self.popup_visible = open;
            if go_to_order {
                self.popup_visible = false;
                self.switch_page(egui_ctx, router::index_of(Order));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            components::tabs::draw(ui, self, ctx);
        });

        // Report history lives in a side panel, but only on the report tab.
        if self.current_page_kind() == Report {
            egui::SidePanel::left("history")
                .resizable(false)
                .show(ctx, |ui| {
                    let mut page_ctx = self.page_ctx(ctx);
                    components::history_panel::draw(ui, &mut page_ctx);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            let mut page_ctx = self.page_ctx(ctx);
            page.draw(ui, &mut page_ctx);
        });

        self.maybe_show_popup(ctx);

        // Timer tick / manual refresh → spawn the sync after drawing.
        let due = self.scheduler.due(Instant::now());
        if due || self.refresh_requested {
            self.refresh_requested = false;
            self.start_sync(ctx);
        }

        // Keep the clock moving even with no input events.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
