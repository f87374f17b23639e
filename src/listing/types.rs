use crate::catalog::{Category, PortfolioItem};

use super::state::ListingState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Static description of one category listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSpec {
    pub category: Category,
    pub heading: &'static str,
    pub intro: &'static str,
    /// Plural noun used in the "showing N of M" line.
    pub noun: &'static str,
    pub empty_message: &'static str,
    pub type_options: Vec<TypeOption>,
}

impl ListingSpec {
    pub fn path(&self) -> String {
        format!("/{}", self.category.slug())
    }
}

/// The derived, render-ready result of applying a state to a listing.
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    pub spec: &'a ListingSpec,
    pub state: ListingState,
    pub items: Vec<&'a PortfolioItem>,
    /// Number of items in the page category before filtering.
    pub total: usize,
    pub years: Vec<i32>,
}

impl ListingView<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
