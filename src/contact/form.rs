use std::sync::Arc;

use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::contact::{
    error::{ContactError, invalid_state, validation_error},
    ports::ContactSink,
    types::{
        ContactField, ContactPhase, ContactReceipt, ContactSubmission, ContactTiming, FieldError,
    },
};

const FIELD_ORDER: [&str; 4] = ["name", "email", "subject", "message"];

/// Contact form lifecycle: `Idle -> Submitting -> Submitted -> Idle`.
///
/// Submission waits a fixed simulated delay before handing the fields to the
/// sink; a submitted form clears itself after the reset delay.
pub struct ContactForm {
    phase: ContactPhase,
    fields: ContactSubmission,
    timing: ContactTiming,
    sink: Arc<dyn ContactSink>,
}

impl ContactForm {
    pub fn new(timing: ContactTiming, sink: Arc<dyn ContactSink>) -> Self {
        Self {
            phase: ContactPhase::Idle,
            fields: ContactSubmission::default(),
            timing,
            sink,
        }
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn timing(&self) -> ContactTiming {
        self.timing
    }

    pub fn update_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), ContactError> {
        if self.phase != ContactPhase::Idle {
            return Err(invalid_state(format!(
                "cannot edit contact form while {:?}",
                self.phase
            )));
        }
        self.fields.set(field, value);
        Ok(())
    }

    pub fn fill(&mut self, submission: ContactSubmission) -> Result<(), ContactError> {
        if self.phase != ContactPhase::Idle {
            return Err(invalid_state(format!(
                "cannot edit contact form while {:?}",
                self.phase
            )));
        }
        self.fields = submission;
        Ok(())
    }

    pub async fn submit(&mut self) -> Result<ContactReceipt, ContactError> {
        if self.phase != ContactPhase::Idle {
            return Err(invalid_state(format!(
                "cannot submit contact form while {:?}",
                self.phase
            )));
        }

        let submission = self.fields.trimmed();
        submission
            .validate()
            .map_err(|errors| validation_error(collect_field_errors(&errors)))?;

        let submitting = SubmittingPhase::enter(&mut self.phase);
        tokio::time::sleep(self.timing.submit_delay).await;

        let receipt = ContactReceipt {
            receipt_id: Uuid::now_v7().to_string(),
            submission,
        };
        self.sink.deliver(&receipt).await?;

        submitting.complete();
        Ok(receipt)
    }

    /// Waits out the reset delay of a submitted form, then clears it.
    pub async fn settle(&mut self) -> Result<(), ContactError> {
        if self.phase != ContactPhase::Submitted {
            return Err(invalid_state(format!(
                "cannot reset contact form while {:?}",
                self.phase
            )));
        }
        tokio::time::sleep(self.timing.reset_delay).await;
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.phase = ContactPhase::Idle;
        self.fields = ContactSubmission::default();
    }
}

/// Holds the form in `Submitting`. Dropping it without `complete` (a failed
/// delivery or a cancelled submit future) puts the form back to `Idle`.
struct SubmittingPhase<'a> {
    phase: &'a mut ContactPhase,
    completed: bool,
}

impl<'a> SubmittingPhase<'a> {
    fn enter(phase: &'a mut ContactPhase) -> Self {
        *phase = ContactPhase::Submitting;
        Self {
            phase,
            completed: false,
        }
    }

    fn complete(mut self) {
        *self.phase = ContactPhase::Submitted;
        self.completed = true;
    }
}

impl Drop for SubmittingPhase<'_> {
    fn drop(&mut self) {
        if !self.completed {
            *self.phase = ContactPhase::Idle;
        }
    }
}

fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .map(|(field, issues)| FieldError {
            field: field.to_string(),
            message: issues
                .first()
                .map(|issue| {
                    issue
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| issue.code.to_string())
                })
                .unwrap_or_else(|| "invalid value".to_string()),
        })
        .collect();
    field_errors.sort_by_key(|error| {
        FIELD_ORDER
            .iter()
            .position(|field| *field == error.field)
            .unwrap_or(FIELD_ORDER.len())
    });
    field_errors
}
