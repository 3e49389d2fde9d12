// src/forms/order.rs
//
// Sample/order request. Submission does two things, both non-blocking for
// the visitor: a fire-and-forget JSON POST to the farm's sheet endpoint, and
// a pre-filled WhatsApp deep link they can open to confirm.

use std::error::Error;
use std::thread;

use serde::Serialize;

use crate::config::consts::{ORDER_SCRIPT_PATH, SCRIPT_HOST, WHATSAPP_NUMBER};
use crate::core::net;
use crate::forms::validate::{self, FieldError};

pub const MILK_PRODUCTS: &[&str] = &[
    "Double Toned Milk - 1.5% Fat",
    "Toned Milk - 3% Fat",
    "Standardized Milk - 3.5% Fat",
    "Full Cream Milk - 4% Fat",
    "Gold Milk - 4.5% Fat",
];

pub const PACK_OPTIONS: &[&str] = &["300ml", "500ml", "1 Litre"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub product: String,
    pub pack: String,
    pub quantity: String,
}

impl OrderForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validate::require(&mut errors, "name", &self.name, "Name");
        validate::max_len(&mut errors, "name", &self.name, 100, "Name");
        validate::phone_required(&mut errors, "phone", &self.phone);
        validate::email_required(&mut errors, "email", &self.email);
        validate::require(&mut errors, "address", &self.address, "Address");
        validate::require(&mut errors, "product", &self.product, "Product");
        validate::require(&mut errors, "pack", &self.pack, "Pack size");
        validate::require(&mut errors, "quantity", &self.quantity, "Quantity");
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Templated message body for the WhatsApp deep link.
    pub fn whatsapp_message(&self) -> String {
        format!(
            "*New Order Request*\n\n\
             *Name:* {}\n\
             *Phone:* {}\n\
             *Email:* {}\n\
             *Address:* {}\n\n\
             *Product:* {}\n\
             *Pack:* {}\n\
             *Quantity:* {}\n\n\
             ---\n\
             Sent from Vizhis Dairy Farm Website",
            self.name.trim(),
            self.phone.trim(),
            self.email.trim(),
            self.address.trim(),
            self.product,
            self.pack,
            self.quantity,
        )
    }

    /// `wa.me` link with the urlencoded message body.
    pub fn whatsapp_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            WHATSAPP_NUMBER,
            urlencoding::encode(&self.whatsapp_message())
        )
    }

    /// POST the order to the Apps-Script endpoint. The endpoint has no
    /// readable response body; success just means the request went out.
    pub fn submit(&self) -> Result<(), Box<dyn Error>> {
        let body = serde_json::to_string(self)?;
        net::http_post_json(SCRIPT_HOST, 80, ORDER_SCRIPT_PATH, &body)
    }

    /// Background submit for the GUI: log the outcome, never surface a
    /// blocking error (the WhatsApp link is the visitor's real path).
    pub fn submit_detached(&self) {
        let form = self.clone();
        thread::spawn(move || match form.submit() {
            Ok(()) => logf!("Order: posted to sheet endpoint"),
            Err(e) => loge!("Order: sheet post failed: {}", e),
        });
    }
}
