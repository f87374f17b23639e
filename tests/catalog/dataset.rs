use folio::catalog::{Catalog, CatalogErrorKind, Category};

use crate::{catalog_with, fixture_catalog, item, with_captured_logs};

#[test]
fn given_fixture_when_loaded_then_every_item_is_indexed() {
    let catalog = fixture_catalog();

    assert_eq!(catalog.all_items().len(), 8);
    assert_eq!(catalog.profile().name, "Test Owner");
    assert_eq!(catalog.last_updated(), "2023-05-01");
    for item in catalog.all_items() {
        assert_eq!(catalog.item_by_id(&item.id), Some(item));
    }
    assert!(catalog.item_by_id("missing").is_none());
}

#[test]
fn given_same_document_when_loaded_twice_then_fingerprints_match() {
    let first = fixture_catalog();
    let second = fixture_catalog();

    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_eq!(first.fingerprint().len(), 64);

    let changed = catalog_with(vec![item("x", "X", "2020-01-01", Category::Media)]);
    assert_ne!(first.fingerprint(), changed.fingerprint());
}

#[test]
fn given_duplicate_ids_when_building_then_duplicate_id_error() {
    let mut data = fixture_catalog().data().clone();
    data.items = vec![
        item("same", "First", "2021-01-01", Category::Project),
        item("same", "Second", "2022-01-01", Category::Project),
    ];

    let err = Catalog::from_data(data).expect_err("duplicate ids must be rejected");
    assert_eq!(err.kind, CatalogErrorKind::DuplicateId);
    assert!(err.message.contains("same"));
}

#[test]
fn given_empty_title_when_building_then_invalid_item_error() {
    let mut data = fixture_catalog().data().clone();
    data.items = vec![item("p-1", "  ", "2021-01-01", Category::Project)];

    let err = Catalog::from_data(data).expect_err("empty title must be rejected");
    assert_eq!(err.kind, CatalogErrorKind::InvalidItem);
}

#[test]
fn given_invalid_calendar_date_when_parsing_then_parse_error() {
    let content = std::fs::read_to_string(crate::fixture_path())
        .expect("fixture should be readable")
        .replace("2023-05-01", "2023-02-30");

    let err = Catalog::from_json_str(&content).expect_err("invalid date must be rejected");
    assert_eq!(err.kind, CatalogErrorKind::Parse);
}

#[test]
fn given_timestamp_date_when_parsing_then_date_part_is_kept() {
    let content = std::fs::read_to_string(crate::fixture_path())
        .expect("fixture should be readable")
        .replace("\"2021-09-09\"", "\"2021-09-09T08:30:00Z\"");

    let catalog = Catalog::from_json_str(&content).expect("timestamp dates should be accepted");
    let item = catalog.item_by_id("pub-1").expect("item should exist");
    assert_eq!(item.date.to_string(), "2021-09-09");
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    let err = Catalog::load(std::path::Path::new("/nonexistent/portfolio.json"))
        .expect_err("missing file must fail");
    assert_eq!(err.kind, CatalogErrorKind::Io);
}

#[test]
fn given_drifted_statistics_when_building_then_editorial_values_are_kept() {
    let catalog = catalog_with(vec![item("p-1", "Only", "2021-01-01", Category::Project)]);

    assert_eq!(catalog.statistics().total_projects, 3);
    assert_eq!(catalog.statistics().citation_count, Some(7));

    let derived = catalog.derived_statistics();
    assert_eq!(derived.total_projects, 1);
    assert_eq!(derived.total_certificates, 0);
    assert_eq!(derived.years_active, 1);
    assert_eq!(derived.citation_count, None);
}

fn drift_counters(events: &[serde_json::Value]) -> Vec<String> {
    events
        .iter()
        .filter(|event| event["fields"]["message"] == "statistics_differ_from_items")
        .map(|event| {
            assert_eq!(event["level"], "WARN");
            event["fields"]["counter"]
                .as_str()
                .expect("drift warning should name its counter")
                .to_string()
        })
        .collect()
}

#[test]
fn given_drifted_statistics_when_building_then_one_warning_per_counter() {
    let (catalog, events) = with_captured_logs(|| {
        catalog_with(vec![item("p-1", "Only", "2021-01-01", Category::Project)])
    });

    assert_eq!(catalog.all_items().len(), 1);
    assert_eq!(
        drift_counters(&events),
        vec!["achievements", "publications", "projects", "certificates"]
    );
    let projects = events
        .iter()
        .find(|event| event["fields"]["counter"] == "projects")
        .expect("projects drift should be logged");
    assert_eq!(projects["fields"]["stored"], 3);
    assert_eq!(projects["fields"]["derived"], 1);
}

#[test]
fn given_consistent_statistics_when_loading_then_no_drift_warning() {
    let (catalog, events) = with_captured_logs(fixture_catalog);

    assert_eq!(catalog.all_items().len(), 8);
    assert!(drift_counters(&events).is_empty());
}

#[test]
fn given_fixture_when_deriving_statistics_then_counts_match_items() {
    let catalog = fixture_catalog();
    let derived = catalog.derived_statistics();

    assert_eq!(derived.total_achievements, 1);
    assert_eq!(derived.total_publications, 1);
    assert_eq!(derived.total_projects, 3);
    assert_eq!(derived.total_certificates, 3);
    assert_eq!(derived.years_active, 4);
}
