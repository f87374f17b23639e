use async_trait::async_trait;

use crate::contact::{error::ContactError, ports::ContactSink, types::ContactReceipt};

/// Records submissions in the log and nothing else.
#[derive(Debug, Clone, Default)]
pub struct LogContactSink;

#[async_trait]
impl ContactSink for LogContactSink {
    async fn deliver(&self, receipt: &ContactReceipt) -> Result<(), ContactError> {
        tracing::info!(
            target: "contact",
            receipt_id = %receipt.receipt_id,
            subject = %receipt.submission.subject,
            message_len = receipt.submission.message.len(),
            "contact_submission_recorded"
        );
        Ok(())
    }
}
