mod form;
mod share;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio::contact::{
    ContactError, ContactForm, ContactReceipt, ContactSink, ContactSubmission, ContactTiming,
    error::delivery_error,
};

#[derive(Default)]
pub struct RecordingSink {
    pub receipts: Mutex<Vec<(ContactReceipt, tokio::time::Instant)>>,
}

impl RecordingSink {
    pub fn delivered(&self) -> Vec<ContactReceipt> {
        self.receipts
            .lock()
            .expect("sink lock should not be poisoned")
            .iter()
            .map(|(receipt, _)| receipt.clone())
            .collect()
    }
}

#[async_trait]
impl ContactSink for RecordingSink {
    async fn deliver(&self, receipt: &ContactReceipt) -> Result<(), ContactError> {
        self.receipts
            .lock()
            .expect("sink lock should not be poisoned")
            .push((receipt.clone(), tokio::time::Instant::now()));
        Ok(())
    }
}

pub struct FailingSink;

#[async_trait]
impl ContactSink for FailingSink {
    async fn deliver(&self, _receipt: &ContactReceipt) -> Result<(), ContactError> {
        Err(delivery_error("mail relay unavailable"))
    }
}

pub fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        name: "  Visitor  ".to_string(),
        email: "visitor@example.org".to_string(),
        subject: "Kolaborasi".to_string(),
        message: "Halo, mari berdiskusi.".to_string(),
    }
}

pub fn form_with(sink: Arc<dyn ContactSink>) -> ContactForm {
    ContactForm::new(ContactTiming::default(), sink)
}
