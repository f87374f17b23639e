//! Server-side HTML rendering.
//!
//! Components and pages are plain functions from typed props to markup
//! strings. Every piece of dataset text passes through [`html::escape`].

pub mod components;
pub mod format;
pub mod html;
pub mod layout;
pub mod pages;

use time::Date;

use crate::catalog::Catalog;

/// Everything a page needs besides its own props.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub today: Date,
    pub cv_href: String,
    pub new_item_days: i64,
    pub latest_updates: usize,
}
