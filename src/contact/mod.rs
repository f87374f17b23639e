pub mod error;
pub mod form;
pub mod noop;
pub mod ports;
pub mod types;

pub use error::{ContactError, ContactErrorKind};
pub use form::ContactForm;
pub use noop::LogContactSink;
pub use ports::ContactSink;
pub use types::{
    ContactField, ContactPhase, ContactReceipt, ContactSubmission, ContactTiming, FieldError,
};
