// src/forms/contact.rs

use crate::forms::validate::{self, FieldError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validate::require(&mut errors, "name", &self.name, "Name");
        validate::max_len(&mut errors, "name", &self.name, 100, "Name");
        validate::email_required(&mut errors, "email", &self.email);
        validate::phone_optional(&mut errors, "phone", &self.phone);
        validate::require(&mut errors, "message", &self.message, "Message");
        validate::max_len(&mut errors, "message", &self.message, 1000, "Message");
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
