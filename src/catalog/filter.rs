use std::str::FromStr;

use crate::catalog::types::{Category, PortfolioItem, VerificationStatus};

/// The sentinel accepted by every filter field to mean "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// One optional filter field: either unconstrained or pinned to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint<T> {
    All,
    Only(T),
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Constraint::All
    }
}

impl<T> Constraint<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Constraint::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Constraint::All => None,
            Constraint::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Constraint<T> {
    pub fn admits(&self, candidate: &T) -> bool {
        match self {
            Constraint::All => true,
            Constraint::Only(value) => value == candidate,
        }
    }
}

impl<T: FromStr> Constraint<T> {
    /// Empty input, the `all` sentinel and unparsable values all decode to
    /// `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL_SENTINEL) => Constraint::All,
            Some(text) => text.parse().map(Constraint::Only).unwrap_or(Constraint::All),
        }
    }
}

/// Compound item filter. Every field is independent and the fields combine
/// with AND, so the order in which they are set never changes the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub category: Constraint<Category>,
    pub year: Constraint<i32>,
    pub verified: Constraint<VerificationStatus>,
    pub item_type: Constraint<String>,
    /// Matches items carrying any of these tags. Empty means no constraint.
    pub tags: Vec<String>,
    pub query: Option<String>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Constraint::Only(category);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Constraint::Only(year);
        self
    }

    pub fn with_verified(mut self, status: VerificationStatus) -> Self {
        self.verified = Constraint::Only(status);
        self
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Constraint::Only(item_type.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = (!query.is_empty()).then_some(query);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.category.is_all()
            && self.year.is_all()
            && self.verified.is_all()
            && self.item_type.is_all()
            && self.tags.is_empty()
            && self.query.is_none()
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        self.category.admits(&item.category)
            && self.year.admits(&item.year())
            && self.verified.admits(&item.verified_status)
            && self.item_type.admits(&item.r#type)
            && (self.tags.is_empty() || self.tags.iter().any(|tag| item.has_tag(tag)))
            && self
                .query
                .as_deref()
                .is_none_or(|query| matches_query(item, &query.to_lowercase()))
    }
}

/// Case-insensitive substring match against title, summary, description and
/// tags. `lowered_query` must already be lowercase.
pub fn matches_query(item: &PortfolioItem, lowered_query: &str) -> bool {
    item.title.to_lowercase().contains(lowered_query)
        || item.summary.to_lowercase().contains(lowered_query)
        || item.description.to_lowercase().contains(lowered_query)
        || item
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(lowered_query))
}
