use std::sync::Mutex;

use folio::{
    catalog::Catalog,
    share::{
        ClipboardPort, NativeSharePort, NoopNativeShare, ShareError, ShareOutcome, SharePayload,
        share_with_fallback,
    },
};

#[derive(Default)]
struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
}

impl ClipboardPort for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        self.copied
            .lock()
            .expect("clipboard lock should not be poisoned")
            .push(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardPort for BrokenClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::new("clipboard denied"))
    }
}

struct WorkingShare;

impl NativeSharePort for WorkingShare {
    fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Ok(())
    }
}

struct CancelledShare;

impl NativeSharePort for CancelledShare {
    fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::new("user cancelled"))
    }
}

fn payload() -> SharePayload {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/portfolio.json");
    let catalog = Catalog::load(&path).expect("fixture dataset should load");
    let item = catalog.item_by_id("proj-a").expect("item should exist");
    SharePayload::for_item(item, &catalog.profile().name, "http://localhost/projects/proj-a")
}

#[test]
fn given_item_when_building_payload_then_text_names_owner() {
    let payload = payload();

    assert_eq!(payload.title, "A");
    assert_eq!(payload.text, "A - Test Owner Portfolio");
    assert_eq!(payload.url, "http://localhost/projects/proj-a");
}

#[test]
fn given_working_native_share_when_sharing_then_clipboard_untouched() {
    let clipboard = RecordingClipboard::default();

    let outcome = share_with_fallback(Some(&WorkingShare), &clipboard, &payload())
        .expect("native share should succeed");

    assert_eq!(outcome, ShareOutcome::Shared);
    assert!(clipboard.copied.lock().expect("lock").is_empty());
}

#[test]
fn given_missing_or_failing_native_share_when_sharing_then_url_is_copied() {
    let natives: [Option<&dyn NativeSharePort>; 3] =
        [None, Some(&CancelledShare), Some(&NoopNativeShare)];

    for native in natives {
        let clipboard = RecordingClipboard::default();
        let outcome =
            share_with_fallback(native, &clipboard, &payload()).expect("fallback should succeed");

        assert_eq!(outcome, ShareOutcome::CopiedToClipboard);
        assert_eq!(
            *clipboard.copied.lock().expect("lock"),
            vec!["http://localhost/projects/proj-a".to_string()]
        );
    }
}

#[test]
fn given_failing_clipboard_when_falling_back_then_error_surfaces() {
    let err = share_with_fallback(Some(&CancelledShare), &BrokenClipboard, &payload())
        .expect_err("both capabilities failed");
    assert_eq!(err.message, "clipboard denied");
}
