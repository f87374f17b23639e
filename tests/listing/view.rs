use folio::{
    catalog::Category,
    listing::{Listing, ListingState, all_listing_specs, listing_spec},
};

use crate::{fixture_catalog, ids};

#[test]
fn given_verified_filter_on_certificates_when_viewing_then_two_of_three() {
    let catalog = fixture_catalog();
    let spec = listing_spec(Category::Certificate);
    let state = ListingState::from_query(Some("year=all&verified=verified"));

    let view = Listing::view(&catalog, &spec, &state);
    assert_eq!(ids(&view.items), vec!["cert-1", "cert-2"]);
    assert_eq!(view.total, 3);
}

#[test]
fn given_empty_state_when_viewing_projects_then_all_projects_newest_first() {
    let catalog = fixture_catalog();
    let spec = listing_spec(Category::Project);

    let view = Listing::view(&catalog, &spec, &ListingState::default());
    assert_eq!(ids(&view.items), vec!["proj-a", "proj-b", "proj-c"]);
    assert_eq!(view.total, 3);
    assert_eq!(view.years, vec![2023, 2022, 2021, 2020]);
    assert!(!view.is_empty());
}

#[test]
fn given_category_name_as_type_when_viewing_achievements_then_no_type_constraint() {
    let catalog = fixture_catalog();
    let spec = listing_spec(Category::Achievement);

    let everything = Listing::view(&catalog, &spec, &ListingState::default());
    let sentinel = Listing::view(
        &catalog,
        &spec,
        &ListingState::from_query(Some("type=achievement")),
    );
    assert_eq!(ids(&sentinel.items), ids(&everything.items));
    assert_eq!(ids(&sentinel.items), vec!["ach-1"]);

    let grants = Listing::view(&catalog, &spec, &ListingState::from_query(Some("type=grant")));
    assert!(grants.is_empty());
    assert_eq!(grants.total, 1);
}

#[test]
fn given_query_and_type_when_viewing_then_filters_combine() {
    let catalog = fixture_catalog();
    let spec = listing_spec(Category::Project);

    let view = Listing::view(
        &catalog,
        &spec,
        &ListingState::from_query(Some("type=web-app&q=dashboard")),
    );
    assert_eq!(ids(&view.items), vec!["proj-b"]);

    let mismatched = Listing::view(
        &catalog,
        &spec,
        &ListingState::from_query(Some("type=security&q=dashboard")),
    );
    assert!(mismatched.is_empty());
}

#[test]
fn given_tag_param_when_viewing_then_only_tagged_items() {
    let catalog = fixture_catalog();
    let spec = listing_spec(Category::Certificate);

    let view = Listing::view(&catalog, &spec, &ListingState::from_query(Some("tag=Cloud")));
    assert_eq!(ids(&view.items), vec!["cert-1", "cert-3"]);
}

#[test]
fn given_all_specs_then_each_category_has_its_page_and_options() {
    let specs = all_listing_specs();

    assert_eq!(specs.len(), Category::ALL.len());
    for (spec, category) in specs.iter().zip(Category::ALL) {
        assert_eq!(spec.category, category);
        assert_eq!(spec.path(), format!("/{}", category.slug()));
        assert!(!spec.type_options.is_empty());
        assert!(!spec.empty_message.is_empty());
    }

    let projects = listing_spec(Category::Project);
    let values: Vec<&str> = projects.type_options.iter().map(|option| option.value).collect();
    assert_eq!(
        values,
        vec!["med-tech", "security", "research", "web-app", "mobile-app"]
    );
}
