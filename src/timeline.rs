use std::collections::BTreeMap;

use crate::catalog::{Catalog, Category, Constraint, ItemFilter, PortfolioItem, sort_newest_first};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineFilter {
    pub year: Constraint<i32>,
    pub category: Constraint<Category>,
}

impl TimelineFilter {
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|query| serde_urlencoded::from_str(query).ok())
            .unwrap_or_default();

        let mut filter = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "year" => filter.year = Constraint::parse(Some(&value)),
                "category" => filter.category = Constraint::parse(Some(&value)),
                _ => {}
            }
        }
        filter
    }

    fn to_item_filter(&self) -> ItemFilter {
        ItemFilter {
            category: self.category.clone(),
            year: self.year.clone(),
            ..ItemFilter::default()
        }
    }
}

/// Filtered items grouped by calendar year. Within a year items are newest
/// first.
#[derive(Debug, Clone, Default)]
pub struct Timeline<'a> {
    groups: BTreeMap<i32, Vec<&'a PortfolioItem>>,
}

impl<'a> Timeline<'a> {
    pub fn build(catalog: &'a Catalog, filter: &TimelineFilter) -> Self {
        let mut items = catalog.filter(&filter.to_item_filter());
        sort_newest_first(&mut items);

        let mut groups: BTreeMap<i32, Vec<&'a PortfolioItem>> = BTreeMap::new();
        for item in items {
            groups.entry(item.year()).or_default().push(item);
        }
        Self { groups }
    }

    pub fn groups(&self) -> &BTreeMap<i32, Vec<&'a PortfolioItem>> {
        &self.groups
    }

    /// Year groups with the newest year first.
    pub fn newest_first(&self) -> impl Iterator<Item = (i32, &[&'a PortfolioItem])> {
        self.groups
            .iter()
            .rev()
            .map(|(year, items)| (*year, items.as_slice()))
    }

    pub fn item_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
