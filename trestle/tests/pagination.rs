use serde_json::{Value, json};
use trestle::prelude::*;

fn table_with(count: usize) -> Table<Value> {
    let columns = vec![
        Column::new("id", "ID"),
        Column::new("v", "Value").sortable(),
    ];
    let rows = (1..=count)
        .map(|i| json!({ "id": i, "v": count + 1 - i }))
        .collect();
    Table::with_rows(columns, rows)
}

#[test]
fn test_initial_rows_per_page_from_options() {
    assert_eq!(Pagination::initial(&[10, 20, 50]).rows_per_page, 10);
    assert_eq!(Pagination::initial(&[]).rows_per_page, 5);
}

#[test]
fn test_initial_defaults() {
    let p = Pagination::initial(&[15]);
    assert_eq!(p.sort_by, None);
    assert!(!p.descending);
    assert_eq!(p.page, 1);
    assert_eq!(p.rows_number, None);
}

#[test]
fn test_pages_number() {
    let p = Pagination {
        rows_per_page: 3,
        ..Pagination::default()
    };
    assert_eq!(p.pages_number(7), 3);
    assert_eq!(p.pages_number(6), 2);
    assert_eq!(p.pages_number(0), 1);

    let unlimited = Pagination {
        rows_per_page: 0,
        ..Pagination::default()
    };
    assert_eq!(unlimited.pages_number(1000), 1);
}

#[test]
fn test_row_index_range() {
    let p = Pagination {
        page: 3,
        rows_per_page: 10,
        ..Pagination::default()
    };
    assert_eq!(p.first_row_index(), 20);
    assert_eq!(p.last_row_index(), 30);
}

#[test]
fn test_page_navigation_clamps() {
    let table = table_with(7);
    table.set_rows_per_page(3);
    assert_eq!(table.pages_number(), 3);

    for _ in 0..5 {
        table.next_page();
    }
    assert_eq!(table.pagination().page, 3);

    table.prev_page();
    assert_eq!(table.pagination().page, 2);

    table.first_page();
    assert_eq!(table.pagination().page, 1);

    table.last_page();
    assert_eq!(table.pagination().page, 3);

    table.set_page(0);
    assert_eq!(table.pagination().page, 1);
}

#[test]
fn test_set_rows_per_page_returns_to_first_page() {
    let table = table_with(20);
    table.set_rows_per_page(5);
    table.set_page(3);
    table.set_rows_per_page(10);
    let p = table.pagination();
    assert_eq!(p.rows_per_page, 10);
    assert_eq!(p.page, 1);
}

#[test]
fn test_filter_change_returns_to_first_page() {
    let table = table_with(20);
    table.set_rows_per_page(5);
    table.set_page(3);
    table.set_filter("1".into());
    assert_eq!(table.pagination().page, 1);
}

#[test]
fn test_unchanged_filter_keeps_page() {
    let table = table_with(20);
    table.set_rows_per_page(5);
    table.set_filter("1".into());
    table.set_page(2);
    table.set_filter("1".into());
    assert_eq!(table.pagination().page, 2);
}

#[test]
fn test_three_state_sort_cycle() {
    let table = table_with(3);
    assert_eq!(table.sort("v"), (Some("v".to_string()), false));
    assert_eq!(table.sort("v"), (Some("v".to_string()), true));
    assert_eq!(table.sort("v"), (None, false));
    assert_eq!(table.sort("v"), (Some("v".to_string()), false));
}

#[test]
fn test_binary_state_sort_never_clears() {
    let table = table_with(3);
    table.set_binary_state_sort(true);
    assert_eq!(table.sort("v"), (Some("v".to_string()), false));
    assert_eq!(table.sort("v"), (Some("v".to_string()), true));
    assert_eq!(table.sort("v"), (Some("v".to_string()), false));
    assert_eq!(table.sort("v"), (Some("v".to_string()), true));
}

#[test]
fn test_sort_switches_column_ascending() {
    let table = table_with(3);
    table.sort("v");
    table.sort("v");
    assert_eq!(table.sort("id"), (Some("id".to_string()), false));
}

#[test]
fn test_sort_returns_to_first_page() {
    let table = table_with(20);
    table.set_rows_per_page(5);
    table.set_page(3);
    table.sort("v");
    assert_eq!(table.pagination().page, 1);
}

#[test]
fn test_server_mode_derived_from_pagination() {
    let table = table_with(3);
    assert!(!table.is_server_side());

    let mut p = table.pagination();
    p.rows_number = Some(0);
    table.set_pagination(p);
    assert!(table.is_server_side());

    let mut p = table.pagination();
    p.rows_number = None;
    table.set_pagination(p);
    assert!(!table.is_server_side());
}

#[test]
fn test_server_mode_total_from_rows_number() {
    let table = table_with(3);
    let mut p = table.pagination();
    p.rows_number = Some(42);
    p.rows_per_page = 10;
    table.set_pagination(p);
    assert_eq!(table.computed_rows_number(), 42);
    assert_eq!(table.pages_number(), 5);
}

#[test]
fn test_pagination_echo_does_not_request() {
    let table = table_with(3);
    let mut p = table.pagination();
    p.rows_number = Some(42);
    table.set_pagination(p);
    table.settle();
    assert!(table.drain_events().is_empty());
}

#[test]
fn test_server_noop_navigation_does_not_request() {
    let table = table_with(3);
    let mut p = table.pagination();
    p.rows_number = Some(3);
    p.rows_per_page = 5;
    table.set_pagination(p);

    // Single page: every move clamps back to where it was.
    table.set_page(0);
    table.next_page();
    table.last_page();
    table.settle();
    assert!(table.drain_events().is_empty());

    let mut p = table.pagination();
    p.rows_number = Some(42);
    p.rows_per_page = 10;
    table.set_pagination(p);
    table.next_page();
    table.settle();
    assert_eq!(table.drain_events().len(), 1);
}

#[test]
fn test_pagination_serde_round_trip() {
    let p = Pagination {
        sort_by: Some("v".to_string()),
        descending: true,
        page: 2,
        rows_per_page: 10,
        rows_number: Some(42),
    };
    let text = serde_json::to_string(&p).unwrap();
    assert_eq!(serde_json::from_str::<Pagination>(&text).unwrap(), p);

    // rows_number is omitted, not serialized as null, in client mode.
    let client = Pagination::default();
    let text = serde_json::to_string(&client).unwrap();
    assert!(!text.contains("rows_number"));
}
