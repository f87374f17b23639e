use serde::{Deserialize, Serialize};

use crate::contact::types::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactErrorKind {
    Validation,
    InvalidState,
    Delivery,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ContactError {
    pub kind: ContactErrorKind,
    pub message: String,
    pub field_errors: Vec<FieldError>,
}

impl ContactError {
    pub fn new(kind: ContactErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn with_field_errors(mut self, field_errors: Vec<FieldError>) -> Self {
        self.field_errors = field_errors;
        self
    }

    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

pub fn validation_error(field_errors: Vec<FieldError>) -> ContactError {
    let fields: Vec<&str> = field_errors.iter().map(|error| error.field.as_str()).collect();
    ContactError::new(
        ContactErrorKind::Validation,
        format!("invalid contact fields: {}", fields.join(", ")),
    )
    .with_field_errors(field_errors)
}

pub fn invalid_state(message: impl Into<String>) -> ContactError {
    ContactError::new(ContactErrorKind::InvalidState, message)
}

pub fn delivery_error(message: impl Into<String>) -> ContactError {
    ContactError::new(ContactErrorKind::Delivery, message)
}
