use crate::catalog::PortfolioItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_item(item: &PortfolioItem, owner_name: &str, url: impl Into<String>) -> Self {
        Self {
            title: item.title.clone(),
            text: format!("{} - {} Portfolio", item.title, owner_name),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    CopiedToClipboard,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ShareError {
    pub message: String,
}

impl ShareError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub trait NativeSharePort: Send + Sync {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Host without a native share sheet.
#[derive(Debug, Clone, Default)]
pub struct NoopNativeShare;

impl NativeSharePort for NoopNativeShare {
    fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::new("native share is not available"))
    }
}

/// Tries the native share capability first; when it is absent or fails
/// (including a user cancel) the URL is copied to the clipboard instead.
pub fn share_with_fallback(
    native: Option<&dyn NativeSharePort>,
    clipboard: &dyn ClipboardPort,
    payload: &SharePayload,
) -> Result<ShareOutcome, ShareError> {
    if let Some(native) = native {
        match native.share(payload) {
            Ok(()) => return Ok(ShareOutcome::Shared),
            Err(err) => {
                tracing::debug!(
                    target: "share",
                    error = %err,
                    url = %payload.url,
                    "native_share_failed_falling_back"
                );
            }
        }
    }

    clipboard.write_text(&payload.url)?;
    Ok(ShareOutcome::CopiedToClipboard)
}
