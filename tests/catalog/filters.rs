use folio::catalog::{Category, Constraint, ItemFilter, VerificationStatus};

use crate::{fixture_catalog, ids};

#[test]
fn given_unconstrained_filter_when_filtering_then_everything_matches() {
    let catalog = fixture_catalog();

    let filter = ItemFilter::new();
    assert!(filter.is_unconstrained());
    assert_eq!(catalog.filter(&filter).len(), catalog.all_items().len());
}

#[test]
fn given_verified_certificates_when_filtering_then_only_verified_ones() {
    let catalog = fixture_catalog();

    let filter = ItemFilter::new()
        .with_category(Category::Certificate)
        .with_verified(VerificationStatus::Verified);
    assert_eq!(ids(&catalog.filter(&filter)), vec!["cert-1", "cert-2"]);
}

#[test]
fn given_same_constraints_in_any_order_when_filtering_then_same_result() {
    let catalog = fixture_catalog();

    let forward = ItemFilter::new()
        .with_category(Category::Project)
        .with_year(2023)
        .with_verified(VerificationStatus::Verified)
        .with_tag("Security")
        .with_query("a");
    let backward = ItemFilter::new()
        .with_query("a")
        .with_tag("Security")
        .with_verified(VerificationStatus::Verified)
        .with_year(2023)
        .with_category(Category::Project);

    assert_eq!(forward, backward);
    assert_eq!(ids(&catalog.filter(&forward)), vec!["proj-a"]);
    assert_eq!(catalog.filter(&forward), catalog.filter(&backward));
}

#[test]
fn given_several_tags_when_filtering_then_any_tag_matches() {
    let catalog = fixture_catalog();

    let filter = ItemFilter::new().with_tag("Cloud").with_tag("Web");
    assert_eq!(ids(&catalog.filter(&filter)), vec!["proj-b", "cert-1", "cert-3"]);
}

#[test]
fn given_type_and_year_when_filtering_then_both_apply() {
    let catalog = fixture_catalog();

    let filter = ItemFilter::new().with_type("training").with_year(2022);
    assert_eq!(ids(&catalog.filter(&filter)), vec!["cert-2"]);

    let none = ItemFilter::new().with_type("training").with_year(2023);
    assert!(catalog.filter(&none).is_empty());
}

#[test]
fn given_raw_values_when_parsing_constraints_then_sentinels_and_junk_mean_all() {
    assert_eq!(Constraint::<i32>::parse(None), Constraint::All);
    assert_eq!(Constraint::<i32>::parse(Some("")), Constraint::All);
    assert_eq!(Constraint::<i32>::parse(Some("all")), Constraint::All);
    assert_eq!(Constraint::<i32>::parse(Some("20x3")), Constraint::All);
    assert_eq!(Constraint::<i32>::parse(Some(" 2021 ")), Constraint::Only(2021));
    assert_eq!(
        Constraint::<VerificationStatus>::parse(Some("pending")),
        Constraint::Only(VerificationStatus::Pending)
    );
    assert_eq!(
        Constraint::<Category>::parse(Some("nonsense")),
        Constraint::All
    );
}

#[test]
fn given_empty_query_when_building_filter_then_query_is_absent() {
    let filter = ItemFilter::new().with_query("");
    assert!(filter.query.is_none());
    assert!(filter.is_unconstrained());
}
