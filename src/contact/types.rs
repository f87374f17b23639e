use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPhase {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "email address is invalid"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

impl ContactSubmission {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub receipt_id: String,
    pub submission: ContactSubmission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTiming {
    pub submit_delay: Duration,
    pub reset_delay: Duration,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1_000),
            reset_delay: Duration::from_millis(3_000),
        }
    }
}
