use serde_json::{Value, json};
use trestle::filters::{self, Filter};
use trestle::prelude::*;

fn columns() -> Vec<Column<Value>> {
    vec![Column::new("id", "ID"), Column::new("name", "Name")]
}

fn records() -> Vec<Value> {
    vec![
        json!({ "id": 1, "name": "apple" }),
        json!({ "id": 2, "name": "banana" }),
        json!({ "id": 3, "name": "apricot" }),
    ]
}

fn names(rows: &[Value]) -> Vec<&str> {
    rows.iter().map(|r| r["name"].as_str().unwrap()).collect()
}

#[test]
fn test_empty_query_returns_all() {
    let rows = records();
    assert_eq!(filters::fuzzy(&rows, &Filter::None, &columns()).len(), 3);
    assert_eq!(
        filters::fuzzy(&rows, &Filter::Text(String::new()), &columns()).len(),
        3
    );
}

#[test]
fn test_fuzzy_matching() {
    let rows = filters::fuzzy(&records(), &"apt".into(), &columns());
    // Non-contiguous match: "apt" hits apricot but not banana.
    assert_eq!(names(&rows), vec!["apricot"]);
}

#[test]
fn test_fuzzy_no_matches() {
    let rows = filters::fuzzy(&records(), &"xyz".into(), &columns());
    assert!(rows.is_empty());
}

#[test]
fn test_fuzzy_case_insensitive() {
    let rows = vec![
        json!({ "id": 1, "name": "Apple" }),
        json!({ "id": 2, "name": "BANANA" }),
    ];
    let rows = filters::fuzzy(&rows, &"apple".into(), &columns());
    assert_eq!(names(&rows), vec!["Apple"]);
}

#[test]
fn test_fuzzy_preserves_record_order() {
    // Scores only gate membership; apricot stays behind apple even though
    // a tighter match could rank it differently.
    let rows = filters::fuzzy(&records(), &"ap".into(), &columns());
    assert_eq!(names(&rows), vec!["apple", "apricot"]);
}

#[test]
fn test_fuzzy_searches_every_column() {
    let rows = filters::fuzzy(&records(), &"2".into(), &columns());
    assert_eq!(names(&rows), vec!["banana"]);
}

#[test]
fn test_substring_with_value_filter() {
    let filter = Filter::Value(json!("ban"));
    let rows = filters::substring(&records(), &filter, &columns());
    assert_eq!(names(&rows), vec!["banana"]);
}

#[test]
fn test_filter_terms() {
    assert_eq!(Filter::None.terms(), "");
    assert_eq!(Filter::Text("berry".into()).terms(), "berry");
    assert_eq!(Filter::Value(json!("berry")).terms(), "berry");
    assert_eq!(Filter::Value(json!(42)).terms(), "42");
}
