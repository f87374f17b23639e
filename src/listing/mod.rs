pub mod specs;
pub mod state;
pub mod types;
pub mod view;

pub use specs::{all_listing_specs, listing_spec};
pub use state::ListingState;
pub use types::{ListingSpec, ListingView, TypeOption};
pub use view::Listing;
