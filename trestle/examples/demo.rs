use serde_json::json;
use simplelog::{Config, LevelFilter, SimpleLogger};
use trestle::prelude::*;

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default())
        .expect("Failed to initialize logger");

    let columns = vec![
        Column::new("name", "Dessert").sortable(),
        Column::new("calories", "Calories")
            .align(Alignment::Right)
            .sortable(),
        Column::new("fat", "Fat (g)").align(Alignment::Right),
    ];
    let rows = vec![
        json!({ "id": 1, "name": "Frozen Yogurt", "calories": 159, "fat": 6.0 }),
        json!({ "id": 2, "name": "Ice cream sandwich", "calories": 237, "fat": 9.0 }),
        json!({ "id": 3, "name": "Eclair", "calories": 262, "fat": 16.0 }),
        json!({ "id": 4, "name": "Cupcake", "calories": 305, "fat": 3.7 }),
        json!({ "id": 5, "name": "Gingerbread", "calories": 356, "fat": 16.0 }),
        json!({ "id": 6, "name": "Jelly bean", "calories": 375, "fat": 0.0 }),
        json!({ "id": 7, "name": "Lollipop", "calories": 392, "fat": 0.2 }),
    ];

    let table = Table::with_rows(columns, rows);
    table.set_title("Desserts");

    // Sort by calories descending, filter, then flip to page two.
    table.sort("calories");
    table.sort("calories");
    table.set_filter("e".into());
    table.set_rows_per_page(3);
    table.next_page();

    println!("container: {}", table.container_class());
    println!(
        "page {}/{}: {} of {} rows visible",
        table.pagination().page,
        table.pages_number(),
        table.computed_rows().len(),
        table.computed_rows_number()
    );
    println!("{:#?}", table.render());

    table.settle();
    for event in table.drain_events() {
        println!("event: {event:?}");
    }
}
