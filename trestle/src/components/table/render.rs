//! Display composition: table state in, view tree out.
//!
//! Everything here is a pure description of the current state. Class
//! strings compose in a fixed order so snapshot assertions stay stable.

use std::str::FromStr;

use crate::components::progress::LinearProgress;
use crate::error::ParseSeparatorError;
use crate::node::Node;

use super::column::{Column, Record, value_text};
use super::state::{Table, TableInner};

/// Row/column separator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// Lines between rows.
    #[default]
    Horizontal,
    /// Lines between columns.
    Vertical,
    /// Lines around every cell.
    Cell,
    /// No separator lines.
    None,
}

impl Separator {
    /// Class fragment for this separator style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Horizontal => "horizontal",
            Separator::Vertical => "vertical",
            Separator::Cell => "cell",
            Separator::None => "none",
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Separator {
    type Err = ParseSeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Separator::Horizontal),
            "vertical" => Ok(Separator::Vertical),
            "cell" => Ok(Separator::Cell),
            "none" => Ok(Separator::None),
            other => Err(ParseSeparatorError(other.to_string())),
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

fn card_default_class<T: Record>(g: &TableInner<T>) -> String {
    let mut class = String::from(" trestle__card");
    if g.dark {
        class.push_str(" trestle__card--dark dark");
    }
    if g.square {
        class.push_str(" trestle--square");
    }
    if g.flat {
        class.push_str(" trestle--flat");
    }
    if g.bordered {
        class.push_str(" trestle--bordered");
    }
    class
}

fn container_class<T: Record>(g: &TableInner<T>) -> String {
    let mut class = format!(
        "trestle__container trestle--{}-separator column no-wrap",
        g.separator
    );
    if g.loading {
        class.push_str(" trestle--loading");
    }
    if g.grid {
        class.push_str(" trestle--grid");
    } else {
        class.push_str(&card_default_class(g));
    }
    if g.dark {
        class.push_str(" trestle--dark");
    }
    if g.dense {
        class.push_str(" trestle--dense");
    }
    if !g.wrap_cells {
        class.push_str(" trestle--no-wrap");
    }
    if g.fullscreen {
        class.push_str(" fullscreen scroll");
    }
    class
}

/// Composite fingerprint of the structural properties whose change
/// invalidates virtual-scroll offsets.
fn structure_fingerprint<T: Record>(g: &TableInner<T>) -> String {
    format!(
        "{};{};{};{};{}",
        g.table_style.as_deref().unwrap_or(""),
        g.table_class.as_deref().unwrap_or(""),
        g.table_header_style.as_deref().unwrap_or(""),
        g.table_header_class.as_deref().unwrap_or(""),
        container_class(g),
    )
}

/// Columns to display, in declared order, honoring the visible subset.
fn display_columns<'a, T: Record>(g: &'a TableInner<T>) -> impl Iterator<Item = &'a Column<T>> {
    g.columns.iter().filter(|col| match &g.visible_columns {
        Some(names) => names.iter().any(|n| n == &col.name),
        None => true,
    })
}

fn header_row<T: Record>(g: &TableInner<T>) -> Node {
    let cells = display_columns(g)
        .map(|col| {
            let mut class = col.align.class().to_string();
            if col.sortable {
                class.push_str(" sortable");
            }
            if g.pagination.sort_by.as_deref() == Some(col.name.as_str()) {
                class.push_str(" sorted");
                if g.pagination.descending {
                    class.push_str(" sort-desc");
                }
            }
            Node::text_classed(col.label.clone(), class)
        })
        .collect();

    Node::element_styled(
        join_class("trestle__thead", g.table_header_class.as_deref()),
        g.table_header_style.clone().unwrap_or_default(),
        cells,
    )
}

fn row_node<T: Record>(g: &TableInner<T>, row: &T) -> Node {
    let cells = display_columns(g)
        .map(|col| Node::text_classed(value_text(&col.value(row)), col.align.class()))
        .collect();
    let mut class = String::from("trestle__row");
    let key = g.row_key.key_of(row);
    if g.selected.iter().any(|k| *k == key) {
        class.push_str(" selected");
    }
    if g.expanded.iter().any(|k| *k == key) {
        class.push_str(" expanded");
    }
    Node::element(class, cells)
}

fn grid_item<T: Record>(g: &TableInner<T>, row: &T) -> Node {
    let card_class = join_class(
        &format!("trestle__grid-item-card{}", card_default_class(g)),
        g.card_class.as_deref(),
    );
    Node::element(
        "trestle__grid-item",
        vec![Node::element_styled(
            card_class,
            g.card_style.clone().unwrap_or_default(),
            vec![row_node(g, row)],
        )],
    )
}

fn top_node<T: Record>(g: &TableInner<T>) -> Node {
    match &g.title {
        Some(title) => Node::element(
            "trestle__top",
            vec![Node::text_classed(title.clone(), "trestle__title")],
        ),
        None => Node::Empty,
    }
}

fn bottom_node<T: Record>(g: &TableInner<T>, visible: usize, total: usize) -> Node {
    if visible == 0 {
        let message = if g.loading {
            g.loading_label.clone().unwrap_or_else(|| "Loading...".into())
        } else if !g.filter.is_none() {
            g.no_results_label
                .clone()
                .unwrap_or_else(|| "No matching records found".into())
        } else {
            g.no_data_label
                .clone()
                .unwrap_or_else(|| "No data available".into())
        };
        return Node::element(
            "trestle__bottom trestle__bottom--nodata",
            vec![Node::text(message)],
        );
    }

    let pagination = &g.pagination;
    let pages = pagination.pages_number(total);
    let first = if pagination.rows_per_page == 0 {
        1
    } else {
        pagination.first_row_index() + 1
    };
    let last = first + visible - 1;

    let rows_per_page_text = if pagination.rows_per_page == 0 {
        "All".to_string()
    } else {
        pagination.rows_per_page.to_string()
    };
    let nav = |name: &str, glyph: &str, disabled: bool| {
        let mut class = format!("trestle__nav trestle__nav--{name}");
        if disabled {
            class.push_str(" disabled");
        }
        Node::text_classed(glyph, class)
    };
    let at_first = pagination.page <= 1;
    let at_last = pagination.page >= pages;

    Node::element(
        "trestle__bottom row items-center",
        vec![
            Node::text_classed(
                g.rows_per_page_label
                    .clone()
                    .unwrap_or_else(|| "Records per page:".into()),
                "trestle__bottom-item",
            ),
            Node::text_classed(rows_per_page_text, "trestle__select"),
            Node::text_classed(format!("{first}-{last} of {total}"), "trestle__bottom-item"),
            nav("first", "\u{00ab}", at_first),
            nav("prev", "\u{2039}", at_first),
            nav("next", "\u{203a}", at_last),
            nav("last", "\u{00bb}", at_last),
        ],
    )
}

impl<T: Record> Table<T> {
    /// Default card classes merged onto the container outside grid mode.
    pub fn card_default_class(&self) -> String {
        self.read(String::new(), |g| card_default_class(g))
    }

    /// The container class string, composed deterministically from the
    /// display flags.
    pub fn container_class(&self) -> String {
        self.read(String::new(), |g| container_class(g))
    }

    /// Compose the full view tree for the current state.
    ///
    /// Also keeps the virtual-scroll viewport honest: feeds it the current
    /// item size and count, and resets it when the structural fingerprint
    /// (table/header style and class strings) changed since the last pass.
    pub fn render(&self) -> Node {
        let (rows, total) = self.compute();
        let has_virt = self.has_virtual_scroll();

        if has_virt {
            self.viewport.set_item_size(self.effective_item_size());
            self.viewport.set_item_count(rows.len());
            let fingerprint = self.read(String::new(), |g| structure_fingerprint(g));
            self.viewport.check_fingerprint(&fingerprint);
        }

        let window = self.viewport.window();

        self.read(Node::Empty, |g| {
            let mut children = vec![top_node(g)];

            if g.loading {
                let progress = LinearProgress::new().dark(g.dark);
                children.push(progress.node("trestle__linear-progress"));
            }

            let mut class = container_class(g);
            let mut style = String::new();

            if g.grid {
                if g.grid_header {
                    children.push(Node::element(
                        "trestle__grid-header",
                        vec![header_row(g)],
                    ));
                }
            } else {
                // Caller card class/style land on the container only
                // outside grid mode.
                if let Some(card_class) = g.card_class.as_deref() {
                    class = join_class(&class, Some(card_class));
                }
                if let Some(card_style) = &g.card_style {
                    style = card_style.clone();
                }
            }

            let header = if g.hide_header {
                Node::Empty
            } else {
                header_row(g)
            };

            let body = if g.grid {
                Node::element(
                    "trestle__grid-content row",
                    rows.iter().map(|row| grid_item(g, row)).collect(),
                )
            } else if g.virtual_scroll {
                let window = window.start..window.end.min(rows.len());
                Node::Viewport {
                    class: g.table_class.clone().unwrap_or_default(),
                    style: g.table_style.clone().unwrap_or_default(),
                    from: window.start,
                    to: window.end.saturating_sub(1),
                    header: Box::new(header),
                    children: rows[window].iter().map(|row| row_node(g, row)).collect(),
                }
            } else {
                let mut body_children = Vec::with_capacity(rows.len() + 1);
                if !header.is_empty() {
                    body_children.push(header);
                }
                body_children.extend(rows.iter().map(|row| row_node(g, row)));
                Node::element_styled(
                    join_class("trestle__middle scroll", g.table_class.as_deref()),
                    g.table_style.clone().unwrap_or_default(),
                    body_children,
                )
            };

            children.push(body);
            children.push(bottom_node(g, rows.len(), total));

            if g.loading
                && let Some(loading_node) = &g.loading_node
            {
                children.push(loading_node.clone());
            }

            Node::element_styled(class, style, children)
        })
    }
}
