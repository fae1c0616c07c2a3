//! Categories command handler.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use nori_core::session::Category;

pub fn list() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Title", "Description"]);

    for category in Category::ALL {
        table.add_row(vec![
            category.as_str(),
            category.title(),
            category.info().subtitle,
        ]);
    }
    println!("{table}");
}
