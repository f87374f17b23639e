use async_trait::async_trait;

use crate::contact::{error::ContactError, types::ContactReceipt};

#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, receipt: &ContactReceipt) -> Result<(), ContactError>;
}
