//! Record projection and re-expansion behavior.

use crate::common::record;
use simile::{search_in_maps, Record};

#[test]
fn ranks_records_by_projected_field() {
    let records = vec![
        record(&[("name", "banana"), ("color", "yellow")]),
        record(&[("name", "apple"), ("color", "red")]),
        record(&[("name", "aple"), ("color", "green")]),
    ];

    let ranked = search_in_maps(&records, "apple", "name", 0.1).unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0], records[1]);
    assert_eq!(ranked[1], records[2]);
}

#[test]
fn whole_records_come_back_not_just_keys() {
    let records = vec![record(&[("name", "apple"), ("color", "red")])];
    let ranked = search_in_maps(&records, "apple", "name", 0.5).unwrap();
    assert_eq!(ranked[0].get("color").map(String::as_str), Some("red"));
}

#[test]
fn duplicate_key_values_collapse_to_first_record() {
    let records = vec![
        record(&[("k", "a"), ("id", "0")]),
        record(&[("k", "a"), ("id", "1")]),
        record(&[("k", "b"), ("id", "2")]),
    ];

    let ranked = search_in_maps(&records, "a", "k", 0.0).unwrap();

    // The projection keeps both "a" entries, so cardinality is preserved...
    assert_eq!(ranked.len(), 3);
    // ...but re-expansion is first-match-wins: both resolve to input index 0
    assert_eq!(ranked[0].get("id").map(String::as_str), Some("0"));
    assert_eq!(ranked[1].get("id").map(String::as_str), Some("0"));
    assert_eq!(ranked[2].get("id").map(String::as_str), Some("2"));
}

#[test]
fn missing_key_scores_as_empty_string() {
    let records = vec![
        record(&[("name", "apple")]),
        record(&[("other", "apple")]), // no "name" field
    ];

    // The empty projection scores 0 against a non-empty term and is dropped
    let ranked = search_in_maps(&records, "apple", "name", 0.5).unwrap();
    assert_eq!(ranked, vec![records[0].clone()]);

    // At tolerance 0 it survives and ranks last
    let ranked = search_in_maps(&records, "apple", "name", 0.0).unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[1], records[1]);
}

#[test]
fn empty_record_list_is_not_an_error() {
    let records: Vec<Record> = vec![];
    let ranked = search_in_maps(&records, "x", "k", 0.5).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn input_records_are_not_mutated() {
    let records = vec![record(&[("k", "apple")]), record(&[("k", "banana")])];
    let before = records.clone();

    let _ = search_in_maps(&records, "apple", "k", 0.0).unwrap();
    assert_eq!(records, before);
}
