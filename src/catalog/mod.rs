pub mod dataset;
pub mod error;
pub mod filter;
pub mod query;
pub mod types;

pub use dataset::Catalog;
pub use error::{CatalogError, CatalogErrorKind};
pub use filter::{ALL_SENTINEL, Constraint, ItemFilter};
pub use query::{DEFAULT_LATEST_LIMIT, sort_newest_first};
pub use types::{
    Category, CurrentPosition, Education, EvidenceKind, EvidenceLink, ItemDate, Language,
    PortfolioData, PortfolioItem, Priority, Profile, Statistics, VerificationStatus, VerifiedBy,
    Websites,
};
