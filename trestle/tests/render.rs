use serde_json::{Value, json};
use trestle::components::table::Separator;
use trestle::prelude::*;

fn desserts() -> Vec<Value> {
    vec![
        json!({ "id": 1, "name": "Frozen Yogurt", "calories": 159 }),
        json!({ "id": 2, "name": "Ice cream sandwich", "calories": 237 }),
        json!({ "id": 3, "name": "Eclair", "calories": 262 }),
        json!({ "id": 4, "name": "Cupcake", "calories": 305 }),
        json!({ "id": 5, "name": "Gingerbread", "calories": 356 }),
        json!({ "id": 6, "name": "Jelly bean", "calories": 375 }),
        json!({ "id": 7, "name": "Lollipop", "calories": 392 }),
    ]
}

fn table() -> Table<Value> {
    let columns = vec![
        Column::new("name", "Dessert").sortable(),
        Column::new("calories", "Calories")
            .align(Alignment::Right)
            .sortable(),
    ];
    Table::with_rows(columns, desserts())
}

/// Collect every text node as (content, class) pairs, depth-first.
fn texts(node: &Node) -> Vec<(String, String)> {
    let mut out = Vec::new();
    collect_texts(node, &mut out);
    out
}

fn collect_texts(node: &Node, out: &mut Vec<(String, String)>) {
    match node {
        Node::Text { content, class } => out.push((content.clone(), class.clone())),
        Node::Viewport {
            header, children, ..
        } => {
            collect_texts(header, out);
            for child in children {
                collect_texts(child, out);
            }
        }
        _ => {
            for child in node.children() {
                collect_texts(child, out);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Class composition
// -----------------------------------------------------------------------------

#[test]
fn test_default_container_class() {
    assert_eq!(
        table().container_class(),
        "trestle__container trestle--horizontal-separator column no-wrap \
         trestle__card trestle--no-wrap"
    );
}

#[test]
fn test_container_class_flag_order() {
    let t = table();
    t.set_separator(Separator::Cell);
    t.set_loading(true);
    t.set_dark(true);
    t.set_dense(true);
    t.set_wrap_cells(true);
    t.set_fullscreen(true);
    assert_eq!(
        t.container_class(),
        "trestle__container trestle--cell-separator column no-wrap \
         trestle--loading trestle__card trestle__card--dark dark \
         trestle--dark trestle--dense fullscreen scroll"
    );
}

#[test]
fn test_grid_mode_skips_card_classes() {
    let t = table();
    t.set_grid(true);
    t.set_bordered(true);
    assert_eq!(
        t.container_class(),
        "trestle__container trestle--horizontal-separator column no-wrap \
         trestle--grid trestle--no-wrap"
    );
}

#[test]
fn test_card_default_class_variants() {
    let t = table();
    assert_eq!(t.card_default_class(), " trestle__card");
    t.set_dark(true);
    t.set_square(true);
    t.set_flat(true);
    t.set_bordered(true);
    assert_eq!(
        t.card_default_class(),
        " trestle__card trestle__card--dark dark trestle--square \
         trestle--flat trestle--bordered"
    );
}

#[test]
fn test_card_class_lands_on_container_outside_grid() {
    let t = table();
    t.set_card_class("my-card");
    t.set_card_style("background: teal");
    let tree = t.render();
    let Node::Element { class, style, .. } = &tree else {
        panic!("expected container element");
    };
    assert!(class.ends_with(" my-card"));
    assert_eq!(style, "background: teal");
}

#[test]
fn test_card_class_lands_on_grid_items_in_grid_mode() {
    let t = table();
    t.set_grid(true);
    t.set_card_class("my-card");
    let tree = t.render();
    let Node::Element { class, .. } = &tree else {
        panic!("expected container element");
    };
    assert!(!class.contains("my-card"));
    let item_card = tree.find_class("trestle__grid-item-card").unwrap();
    assert!(item_card.class().unwrap().ends_with(" my-card"));
}

// -----------------------------------------------------------------------------
// Separator parsing
// -----------------------------------------------------------------------------

#[test]
fn test_separator_round_trip() {
    for sep in [
        Separator::Horizontal,
        Separator::Vertical,
        Separator::Cell,
        Separator::None,
    ] {
        assert_eq!(sep.to_string().parse::<Separator>().unwrap(), sep);
    }
}

#[test]
fn test_separator_parse_error() {
    let err = "diagonal".parse::<Separator>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown separator style: \"diagonal\" (expected horizontal, vertical, cell or none)"
    );
}

// -----------------------------------------------------------------------------
// Tree structure
// -----------------------------------------------------------------------------

#[test]
fn test_title_renders_in_top() {
    let t = table();
    assert!(t.render().find_class("trestle__top").is_none());
    t.set_title("Desserts");
    let tree = t.render();
    let top = tree.find_class("trestle__top").unwrap();
    assert_eq!(
        top.children(),
        &[Node::text_classed("Desserts", "trestle__title")]
    );
}

#[test]
fn test_header_cells_carry_sort_classes() {
    let t = table();
    t.set_pagination(Pagination {
        sort_by: Some("calories".into()),
        descending: true,
        ..t.pagination()
    });
    let tree = t.render();
    let header = tree.find_class("trestle__thead").unwrap();
    assert_eq!(
        header.children(),
        &[
            Node::text_classed("Dessert", "text-left sortable"),
            Node::text_classed("Calories", "text-right sortable sorted sort-desc"),
        ]
    );
}

#[test]
fn test_hide_header() {
    let t = table();
    t.set_hide_header(true);
    assert!(t.render().find_class("trestle__thead").is_none());
}

#[test]
fn test_loading_shows_progress_bar() {
    let t = table();
    assert!(t.render().find_class("trestle__linear-progress").is_none());
    t.set_loading(true);
    let bar = t.render();
    let bar = bar.find_class("trestle__linear-progress").unwrap();
    assert!(matches!(
        bar,
        Node::Progress {
            indeterminate: true,
            ..
        }
    ));
}

#[test]
fn test_loading_node_only_shown_while_loading() {
    let t = table();
    t.set_loading_node(Node::text_classed("spinner", "my-overlay"));
    assert!(t.render().find_class("my-overlay").is_none());
    t.set_loading(true);
    assert!(t.render().find_class("my-overlay").is_some());
}

#[test]
fn test_grid_header_only_when_requested() {
    let t = table();
    t.set_grid(true);
    assert!(t.render().find_class("trestle__grid-header").is_none());
    t.set_grid_header(true);
    assert!(t.render().find_class("trestle__grid-header").is_some());
}

#[test]
fn test_body_rows_render_cell_text() {
    let t = table();
    t.set_rows_per_page(3);
    let tree = t.render();
    let body = tree.find_class("trestle__middle").unwrap();
    // Header plus one element per visible row.
    assert_eq!(body.children().len(), 4);
    let first_row = &body.children()[1];
    assert_eq!(
        first_row.children(),
        &[
            Node::text_classed("Frozen Yogurt", "text-left"),
            Node::text_classed("159", "text-right"),
        ]
    );
}

#[test]
fn test_table_class_and_style_reach_body() {
    let t = table();
    t.set_table_class("sticky");
    t.set_table_style("max-height: 400px");
    let tree = t.render();
    let body = tree.find_class("trestle__middle").unwrap();
    let Node::Element { class, style, .. } = body else {
        panic!("expected body element");
    };
    assert_eq!(class, "trestle__middle scroll sticky");
    assert_eq!(style, "max-height: 400px");
}

#[test]
fn test_virtual_body_keeps_header_above_window() {
    let t = table();
    t.set_virtual_scroll(true);
    t.set_rows_per_page(0);
    let tree = t.render();
    let Some(Node::Viewport { header, children, .. }) = tree
        .children()
        .iter()
        .find(|n| matches!(n, Node::Viewport { .. }))
    else {
        panic!("expected viewport body");
    };
    assert!(header.find_class("trestle__thead").is_some());
    assert!(children.len() <= desserts().len());
    assert!(children.iter().all(|n| matches!(n, Node::Element { .. })));
}

// -----------------------------------------------------------------------------
// Bottom bar
// -----------------------------------------------------------------------------

#[test]
fn test_bottom_bar_snapshot() {
    let t = table();
    t.set_rows_per_page(3);
    let tree = t.render();
    let bottom = tree.find_class("trestle__bottom").unwrap();
    assert_eq!(
        *bottom,
        Node::element(
            "trestle__bottom row items-center",
            vec![
                Node::text_classed("Records per page:", "trestle__bottom-item"),
                Node::text_classed("3", "trestle__select"),
                Node::text_classed("1-3 of 7", "trestle__bottom-item"),
                Node::text_classed("\u{00ab}", "trestle__nav trestle__nav--first disabled"),
                Node::text_classed("\u{2039}", "trestle__nav trestle__nav--prev disabled"),
                Node::text_classed("\u{203a}", "trestle__nav trestle__nav--next"),
                Node::text_classed("\u{00bb}", "trestle__nav trestle__nav--last"),
            ],
        )
    );
}

#[test]
fn test_bottom_bar_last_page() {
    let t = table();
    t.set_rows_per_page(3);
    t.last_page();
    let labels = texts(&t.render());
    assert!(labels.iter().any(|(c, _)| c == "7-7 of 7"));
    assert!(
        labels
            .iter()
            .any(|(_, cl)| cl == "trestle__nav trestle__nav--next disabled")
    );
    assert!(
        labels
            .iter()
            .any(|(_, cl)| cl == "trestle__nav trestle__nav--last disabled")
    );
}

#[test]
fn test_rows_per_page_zero_reads_all() {
    let t = table();
    t.set_rows_per_page(0);
    let labels = texts(&t.render());
    assert!(labels.iter().any(|(c, cl)| c == "All" && cl == "trestle__select"));
    assert!(labels.iter().any(|(c, _)| c == "1-7 of 7"));
}

#[test]
fn test_no_data_message() {
    let t = Table::<Value>::new(vec![Column::new("name", "Name")]);
    let tree = t.render();
    let bottom = tree.find_class("trestle__bottom--nodata").unwrap();
    assert_eq!(bottom.children(), &[Node::text("No data available")]);
}

#[test]
fn test_no_results_message_when_filter_active() {
    let t = table();
    t.set_filter("zzz".into());
    t.drain_events();
    let tree = t.render();
    let bottom = tree.find_class("trestle__bottom--nodata").unwrap();
    assert_eq!(bottom.children(), &[Node::text("No matching records found")]);
}

#[test]
fn test_loading_message_wins_when_empty() {
    let t = Table::<Value>::new(vec![Column::new("name", "Name")]);
    t.set_loading(true);
    t.set_loading_label("Fetching desserts...");
    let tree = t.render();
    let bottom = tree.find_class("trestle__bottom--nodata").unwrap();
    assert_eq!(bottom.children(), &[Node::text("Fetching desserts...")]);
}

#[test]
fn test_custom_labels() {
    let t = table();
    t.set_rows_per_page_label("Rader per sida:");
    t.set_rows_per_page(5);
    let labels = texts(&t.render());
    assert!(labels.iter().any(|(c, _)| c == "Rader per sida:"));
}
