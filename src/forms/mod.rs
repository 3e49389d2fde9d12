// src/forms/mod.rs
//
// Lead-capture forms. These never block on the network: the order form
// fires a JSON POST at the farm's Apps-Script endpoint (response is opaque)
// and hands the visitor a pre-filled WhatsApp link; the contact form only
// validates and confirms.

pub mod contact;
pub mod order;

mod validate;

pub use validate::FieldError;
