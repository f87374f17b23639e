use std::{collections::HashMap, fs, path::Path};

use sha2::{Digest, Sha256};

use crate::catalog::{
    error::{CatalogError, duplicate_id, invalid_item, io_error, parse_error},
    types::{PortfolioData, PortfolioItem, Profile, Statistics},
};

/// The whole portfolio document, validated and held read-only in memory.
///
/// Constructed once at start-up and shared by reference (usually behind an
/// `Arc`) with everything that renders pages. All query operations live in
/// `catalog::query`.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: PortfolioData,
    index: HashMap<String, usize>,
    fingerprint: String,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)
            .map_err(|err| io_error(format!("failed to read {}: {err}", path.display())))?;
        let catalog = Self::from_json_str(&content)
            .map_err(|err| CatalogError::new(err.kind, format!("{}: {}", path.display(), err)))?;

        tracing::info!(
            target: "catalog",
            path = %path.display(),
            items = catalog.data.items.len(),
            fingerprint = %catalog.fingerprint,
            last_updated = %catalog.data.last_updated,
            "dataset_loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let data: PortfolioData = serde_json::from_str(content)
            .map_err(|err| parse_error(format!("failed to parse portfolio dataset: {err}")))?;
        Self::from_data(data)
    }

    pub fn from_data(data: PortfolioData) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(data.items.len());
        for (position, item) in data.items.iter().enumerate() {
            validate_item(item)?;
            if index.insert(item.id.clone(), position).is_some() {
                return Err(duplicate_id(format!("duplicate item id '{}'", item.id)));
            }
        }

        let canonical = serde_json::to_vec(&data)
            .map_err(|err| parse_error(format!("failed to serialize dataset: {err}")))?;
        let fingerprint = format!("{:x}", Sha256::digest(&canonical));

        let catalog = Self {
            data,
            index,
            fingerprint,
        };
        catalog.warn_on_statistics_drift();
        Ok(catalog)
    }

    pub fn profile(&self) -> &Profile {
        &self.data.profile
    }

    /// Editorial statistics exactly as stored in the dataset.
    pub fn statistics(&self) -> &Statistics {
        &self.data.statistics
    }

    pub fn last_updated(&self) -> &str {
        &self.data.last_updated
    }

    pub fn all_items(&self) -> &[PortfolioItem] {
        &self.data.items
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    /// SHA-256 of the canonical JSON form of the dataset.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn warn_on_statistics_drift(&self) {
        let stored = &self.data.statistics;
        let derived = self.derived_statistics();
        let drifted = [
            ("achievements", stored.total_achievements, derived.total_achievements),
            ("publications", stored.total_publications, derived.total_publications),
            ("projects", stored.total_projects, derived.total_projects),
            ("certificates", stored.total_certificates, derived.total_certificates),
        ];
        for (counter, stored_value, derived_value) in drifted {
            if stored_value != derived_value {
                tracing::warn!(
                    target: "catalog",
                    counter,
                    stored = stored_value,
                    derived = derived_value,
                    "statistics_differ_from_items"
                );
            }
        }
    }
}

fn validate_item(item: &PortfolioItem) -> Result<(), CatalogError> {
    if item.id.trim().is_empty() {
        return Err(invalid_item(format!(
            "item titled '{}' has an empty id",
            item.title
        )));
    }
    if item.title.trim().is_empty() {
        return Err(invalid_item(format!("item '{}' has an empty title", item.id)));
    }
    Ok(())
}
