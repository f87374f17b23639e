use folio::{
    catalog::{Category, Constraint},
    timeline::{Timeline, TimelineFilter},
};

use crate::{fixture_catalog, ids};

#[test]
fn given_no_filter_when_building_timeline_then_years_newest_first() {
    let catalog = fixture_catalog();

    let timeline = Timeline::build(&catalog, &TimelineFilter::default());
    let years: Vec<i32> = timeline.newest_first().map(|(year, _)| year).collect();
    assert_eq!(years, vec![2023, 2022, 2021, 2020]);
    assert_eq!(timeline.item_count(), catalog.all_items().len());

    let (_, newest) = timeline
        .newest_first()
        .next()
        .expect("timeline should have a newest year");
    assert_eq!(ids(newest), vec!["proj-a", "cert-1"]);
}

#[test]
fn given_year_group_when_building_then_items_are_date_descending() {
    let catalog = fixture_catalog();

    let timeline = Timeline::build(&catalog, &TimelineFilter::default());
    let group = timeline
        .groups()
        .get(&2022)
        .expect("2022 should be present");
    assert_eq!(ids(group), vec!["ach-1", "proj-b", "cert-2"]);
}

#[test]
fn given_category_and_year_query_when_building_then_both_filters_apply() {
    let catalog = fixture_catalog();
    let filter = TimelineFilter::from_query(Some("category=certificate&year=2022"));

    assert_eq!(filter.category, Constraint::Only(Category::Certificate));
    assert_eq!(filter.year, Constraint::Only(2022));

    let timeline = Timeline::build(&catalog, &filter);
    assert_eq!(timeline.groups().len(), 1);
    assert_eq!(timeline.item_count(), 1);
}

#[test]
fn given_filter_matching_nothing_when_building_then_timeline_is_empty() {
    let catalog = fixture_catalog();
    let filter = TimelineFilter::from_query(Some("category=service"));

    let timeline = Timeline::build(&catalog, &filter);
    assert!(timeline.is_empty());
    assert_eq!(timeline.newest_first().count(), 0);
}
