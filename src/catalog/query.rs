use std::collections::BTreeSet;

use crate::catalog::{
    dataset::Catalog,
    filter::{ItemFilter, matches_query},
    types::{Category, PortfolioItem, Statistics},
};

pub const DEFAULT_LATEST_LIMIT: usize = 5;

impl Catalog {
    /// Items in dataset order, restricted to `category` when given.
    pub fn items(&self, category: Option<Category>) -> Vec<&PortfolioItem> {
        self.all_items()
            .iter()
            .filter(|item| category.is_none_or(|category| item.category == category))
            .collect()
    }

    pub fn item_by_id(&self, id: &str) -> Option<&PortfolioItem> {
        self.position_of(id)
            .and_then(|position| self.all_items().get(position))
    }

    /// The `limit` most recent items, newest first. Items sharing a date keep
    /// dataset order.
    pub fn latest(&self, limit: usize) -> Vec<&PortfolioItem> {
        let mut items: Vec<&PortfolioItem> = self.all_items().iter().collect();
        sort_newest_first(&mut items);
        items.truncate(limit);
        items
    }

    pub fn search(&self, query: &str) -> Vec<&PortfolioItem> {
        let lowered = query.to_lowercase();
        self.all_items()
            .iter()
            .filter(|item| matches_query(item, &lowered))
            .collect()
    }

    pub fn filter(&self, filter: &ItemFilter) -> Vec<&PortfolioItem> {
        self.all_items()
            .iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    pub fn items_by_tag(&self, tag: &str) -> Vec<&PortfolioItem> {
        self.all_items()
            .iter()
            .filter(|item| item.has_tag(tag))
            .collect()
    }

    /// Distinct years present in the dataset, newest first.
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.all_items().iter().map(PortfolioItem::year).collect();
        years.into_iter().rev().collect()
    }

    /// Distinct tags in ascending order.
    pub fn tags(&self) -> Vec<&str> {
        let tags: BTreeSet<&str> = self
            .all_items()
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().collect()
    }

    /// Counters recomputed from the item list. `years_active` spans the
    /// oldest to the newest item year inclusive; citations are not derivable.
    pub fn derived_statistics(&self) -> Statistics {
        let count = |category: Category| {
            self.all_items()
                .iter()
                .filter(|item| item.category == category)
                .count() as u64
        };
        let years = self.years();
        let years_active = match (years.first(), years.last()) {
            (Some(newest), Some(oldest)) => (newest - oldest + 1) as u64,
            _ => 0,
        };

        Statistics {
            total_achievements: count(Category::Achievement),
            total_publications: count(Category::Publication),
            total_projects: count(Category::Project),
            total_certificates: count(Category::Certificate),
            years_active,
            citation_count: None,
        }
    }
}

/// Stable sort, newest date first.
pub fn sort_newest_first(items: &mut [&PortfolioItem]) {
    items.sort_by(|left, right| right.date.cmp(&left.date));
}
