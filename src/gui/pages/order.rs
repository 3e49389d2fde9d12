// src/gui/pages/order.rs
//
// Order / sample-request form. On submit: validate, fire-and-forget POST to
// the sheet endpoint, then hand the visitor a pre-filled WhatsApp link to
// confirm the order.

use eframe::egui;

use crate::{
    config::options::PageKind::{self, *},
    forms::{
        FieldError,
        order::{MILK_PRODUCTS, OrderForm, PACK_OPTIONS},
    },
};

use super::{AppCtx, Page};

#[derive(Default)]
pub struct OrderPageState {
    pub form: OrderForm,
    pub errors: Vec<FieldError>,
    /// WhatsApp link of the last successful submit, shown on the
    /// confirmation screen.
    pub confirmed: Option<String>,
}

impl OrderPageState {
    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

pub struct OrderPage;
pub static PAGE: OrderPage = OrderPage;

impl Page for OrderPage {
    fn title(&self) -> &'static str {
        "Order"
    }

    fn kind(&self) -> PageKind {
        Order
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.heading("Place Your Order");
        ui.label("Fill in your details below and we'll process your order.");
        ui.separator();

        if let Some(link) = ctx.order.confirmed.clone() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading("Order saved!");
                ui.label("Confirm it on WhatsApp so we can schedule your delivery:");
                ui.hyperlink_to("Open WhatsApp", &link);
                ui.add_space(10.0);
                if ui.button("Place another order").clicked() {
                    ctx.order.form = OrderForm::default();
                    ctx.order.confirmed = None;
                }
            });
            return;
        }

        let state = &mut *ctx.order;
        egui::Grid::new("order_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                text_field(ui, state, "name", "Full name", |f| &mut f.name);
                text_field(ui, state, "phone", "Phone", |f| &mut f.phone);
                text_field(ui, state, "email", "Email", |f| &mut f.email);
                text_field(ui, state, "address", "Address", |f| &mut f.address);

                combo_field(ui, state, "product", "Product", MILK_PRODUCTS, |f| {
                    &mut f.product
                });
                combo_field(ui, state, "pack", "Pack size", PACK_OPTIONS, |f| &mut f.pack);

                ui.label("Quantity");
                ui.vertical(|ui| {
                    egui::ComboBox::from_id_salt("order_quantity")
                        .selected_text(if state.form.quantity.is_empty() {
                            "Select…"
                        } else {
                            state.form.quantity.as_str()
                        })
                        .show_ui(ui, |ui| {
                            for q in 1..=10u32 {
                                let v = q.to_string();
                                ui.selectable_value(&mut state.form.quantity, v.clone(), v);
                            }
                        });
                    if let Some(msg) = state.error_for("quantity") {
                        error_label(ui, msg);
                    }
                });
                ui.end_row();
            });

        ui.add_space(10.0);
        if ui.button("Place order").clicked() {
            match ctx.order.form.validate() {
                Ok(()) => {
                    ctx.order.errors.clear();
                    // Sheet POST runs detached; the endpoint is opaque and
                    // must never block the visitor.
                    ctx.order.form.submit_detached();
                    ctx.order.confirmed = Some(ctx.order.form.whatsapp_link());
                }
                Err(errors) => ctx.order.errors = errors,
            }
        }
        ui.weak("Your information is used only for order processing.");
    }
}

fn text_field(
    ui: &mut egui::Ui,
    state: &mut OrderPageState,
    field: &'static str,
    label: &str,
    get: fn(&mut OrderForm) -> &mut String,
) {
    ui.label(label);
    ui.vertical(|ui| {
        ui.text_edit_singleline(get(&mut state.form));
        if let Some(msg) = state.error_for(field) {
            error_label(ui, msg);
        }
    });
    ui.end_row();
}

fn combo_field(
    ui: &mut egui::Ui,
    state: &mut OrderPageState,
    field: &'static str,
    label: &str,
    options: &[&str],
    get: fn(&mut OrderForm) -> &mut String,
) {
    ui.label(label);
    ui.vertical(|ui| {
        let current = get(&mut state.form).clone();
        egui::ComboBox::from_id_salt(field)
            .selected_text(if current.is_empty() { "Select…" } else { current.as_str() })
            .show_ui(ui, |ui| {
                for opt in options {
                    ui.selectable_value(get(&mut state.form), s!(*opt), *opt);
                }
            });
        if let Some(msg) = state.error_for(field) {
            error_label(ui, msg);
        }
    });
    ui.end_row();
}

fn error_label(ui: &mut egui::Ui, msg: &str) {
    ui.colored_label(ui.visuals().error_fg_color, msg);
}
