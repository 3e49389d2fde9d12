// src/gui/pages/contact.rs
//
// Contact form. Validation mirrors the website's rules; there is no backend
// for messages, so a valid submit just confirms and resets.

use eframe::egui;

use crate::{
    config::options::PageKind::{self, *},
    forms::{FieldError, contact::ContactForm},
};

use super::{AppCtx, Page};

#[derive(Default)]
pub struct ContactPageState {
    pub form: ContactForm,
    pub errors: Vec<FieldError>,
    pub sent: bool,
}

impl ContactPageState {
    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

pub struct ContactPage;
pub static PAGE: ContactPage = ContactPage;

impl Page for ContactPage {
    fn title(&self) -> &'static str {
        "Contact"
    }

    fn kind(&self) -> PageKind {
        Contact
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.heading("Get in Touch");
        ui.separator();

        if ctx.contact.sent {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading("Thank you!");
                ui.label("Your message has been received. We'll get back to you within 24 hours.");
                if ui.button("Send another message").clicked() {
                    ctx.contact.sent = false;
                }
            });
            return;
        }

        let state = &mut *ctx.contact;
        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Full name");
                ui.vertical(|ui| {
                    ui.text_edit_singleline(&mut state.form.name);
                    if let Some(msg) = state.error_for("name") {
                        error_label(ui, msg);
                    }
                });
                ui.end_row();

                ui.label("Email");
                ui.vertical(|ui| {
                    ui.text_edit_singleline(&mut state.form.email);
                    if let Some(msg) = state.error_for("email") {
                        error_label(ui, msg);
                    }
                });
                ui.end_row();

                ui.label("Phone (optional)");
                ui.vertical(|ui| {
                    ui.text_edit_singleline(&mut state.form.phone);
                    if let Some(msg) = state.error_for("phone") {
                        error_label(ui, msg);
                    }
                });
                ui.end_row();

                ui.label("Message");
                ui.vertical(|ui| {
                    ui.text_edit_multiline(&mut state.form.message);
                    if let Some(msg) = state.error_for("message") {
                        error_label(ui, msg);
                    }
                });
                ui.end_row();
            });

        ui.add_space(10.0);
        if ui.button("Send message").clicked() {
            match ctx.contact.form.validate() {
                Ok(()) => {
                    ctx.contact.errors.clear();
                    ctx.contact.form = ContactForm::default();
                    ctx.contact.sent = true;
                }
                Err(errors) => ctx.contact.errors = errors,
            }
        }
    }
}

fn error_label(ui: &mut egui::Ui, msg: &str) {
    ui.colored_label(ui.visuals().error_fg_color, msg);
}
