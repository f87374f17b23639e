use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogErrorKind {
    Io,
    Parse,
    DuplicateId,
    InvalidItem,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CatalogError {
    pub kind: CatalogErrorKind,
    pub message: String,
}

impl CatalogError {
    pub fn new(kind: CatalogErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn io_error(message: impl Into<String>) -> CatalogError {
    CatalogError::new(CatalogErrorKind::Io, message)
}

pub fn parse_error(message: impl Into<String>) -> CatalogError {
    CatalogError::new(CatalogErrorKind::Parse, message)
}

pub fn duplicate_id(message: impl Into<String>) -> CatalogError {
    CatalogError::new(CatalogErrorKind::DuplicateId, message)
}

pub fn invalid_item(message: impl Into<String>) -> CatalogError {
    CatalogError::new(CatalogErrorKind::InvalidItem, message)
}
