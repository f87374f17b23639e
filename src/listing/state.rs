use crate::catalog::{
    ALL_SENTINEL, Category, Constraint, ItemFilter, VerificationStatus,
};

/// Filter state of one listing page, decoded from the request query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingState {
    pub item_type: Constraint<String>,
    pub year: Constraint<i32>,
    pub verified: Constraint<VerificationStatus>,
    pub query: String,
    pub tags: Vec<String>,
}

impl ListingState {
    /// Malformed query strings decode to the empty state.
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|query| serde_urlencoded::from_str(query).ok())
            .unwrap_or_default();

        let mut state = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "type" => state.item_type = Constraint::parse(Some(&value)),
                "year" => state.year = Constraint::parse(Some(&value)),
                "verified" => state.verified = Constraint::parse(Some(&value)),
                "q" => state.query = value.trim().to_string(),
                "tag" => {
                    let tag = value.trim();
                    if !tag.is_empty() && !state.tags.iter().any(|existing| existing == tag) {
                        state.tags.push(tag.to_string());
                    }
                }
                _ => {}
            }
        }
        state
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(item_type) = self.item_type.value() {
            pairs.push(("type", item_type.clone()));
        }
        if let Some(year) = self.year.value() {
            pairs.push(("year", year.to_string()));
        }
        if let Some(status) = self.verified.value() {
            pairs.push(("verified", status.as_str().to_string()));
        }
        if !self.query.is_empty() {
            pairs.push(("q", self.query.clone()));
        }
        for tag in &self.tags {
            pairs.push(("tag", tag.clone()));
        }
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.item_type.is_all()
            || !self.year.is_all()
            || !self.verified.is_all()
            || !self.query.is_empty()
            || !self.tags.is_empty()
    }

    /// Builds the catalog filter for a page pinned to `category`. A type
    /// value naming the page's own category is no constraint at all.
    pub fn to_item_filter(&self, category: Category) -> ItemFilter {
        let item_type = match self.item_type.value() {
            Some(value) if value == category.as_str() || value == ALL_SENTINEL => {
                Constraint::All
            }
            Some(value) => Constraint::Only(value.clone()),
            None => Constraint::All,
        };

        ItemFilter {
            category: Constraint::Only(category),
            year: self.year.clone(),
            verified: self.verified.clone(),
            item_type,
            tags: self.tags.clone(),
            query: (!self.query.is_empty()).then(|| self.query.clone()),
        }
    }
}
