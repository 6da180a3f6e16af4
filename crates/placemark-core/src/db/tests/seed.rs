use std::collections::HashSet;

use crate::db::{LocationStore, RESERVED_RECORDS, SEED_LOCALITIES};

#[test]
fn test_catalog_size() {
    assert_eq!(SEED_LOCALITIES.len(), 97);
    assert_eq!(RESERVED_RECORDS.len(), 3);
}

#[test]
fn test_catalog_names_unique_case_insensitively() {
    let names: HashSet<String> = SEED_LOCALITIES
        .iter()
        .chain(RESERVED_RECORDS)
        .map(|(name, _, _)| name.to_lowercase())
        .collect();
    assert_eq!(names.len(), 100);
}

#[test]
fn test_reserved_record_values() {
    let store = LocationStore::open_in_memory().unwrap();

    let town = store.find_by_name("TestTown1").unwrap().unwrap();
    assert_eq!((town.latitude, town.longitude), (43.999, -79.111));

    let spot = store.find_by_name("DeleteMeSpot").unwrap().unwrap();
    assert_eq!((spot.latitude, spot.longitude), (43.666, -79.444));

    let city = store.find_by_name("UpdateMeCity").unwrap().unwrap();
    assert_eq!((city.latitude, city.longitude), (43.555, -79.555));
}

#[test]
fn test_list_all_matches_catalog() {
    let store = LocationStore::open_in_memory().unwrap();

    let listed: HashSet<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();

    let expected: HashSet<String> = SEED_LOCALITIES
        .iter()
        .chain(RESERVED_RECORDS)
        .map(|(name, _, _)| name.to_string())
        .collect();

    assert_eq!(listed, expected);
    assert_eq!(listed.len(), 100);
}

#[test]
fn test_seed_if_empty_noop_when_populated() {
    let store = LocationStore::open_in_memory().unwrap();

    store.seed_if_empty().unwrap();
    assert_eq!(store.count().unwrap(), 100);
}
