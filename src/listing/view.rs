use crate::catalog::{Catalog, sort_newest_first};

use super::{
    state::ListingState,
    types::{ListingSpec, ListingView},
};

pub struct Listing;

impl Listing {
    /// Applies `state` to the items of the page category and orders the
    /// survivors newest first. Nothing is paginated.
    pub fn view<'a>(
        catalog: &'a Catalog,
        spec: &'a ListingSpec,
        state: &ListingState,
    ) -> ListingView<'a> {
        let total = catalog.items(Some(spec.category)).len();
        let filter = state.to_item_filter(spec.category);
        let mut items = catalog.filter(&filter);
        sort_newest_first(&mut items);

        tracing::debug!(
            target: "listing",
            category = %spec.category,
            total,
            visible = items.len(),
            active_filters = state.has_active_filters(),
            "listing_view_derived"
        );

        ListingView {
            spec,
            state: state.clone(),
            items,
            total,
            years: catalog.years(),
        }
    }
}
