use comfy_table::{Cell, Color};

use crate::naming::prefix_for;
use crate::store::IndexStore;

use super::format::{create_styled_table, header_cell, right_cell, to_pretty_json};

pub(crate) fn print_store_table(store: &IndexStore, use_color: bool) {
    if store.is_empty() {
        println!("No tracked directories.");
        return;
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Directory", use_color),
        header_cell("Last index", use_color),
        header_cell("Last prefix", use_color),
    ]);

    let prefix_color = if use_color { Some(Color::Green) } else { None };
    for entry in store.entries() {
        let mut prefix_cell = Cell::new(prefix_for(entry.last_index));
        if let Some(c) = prefix_color {
            prefix_cell = prefix_cell.fg(c);
        }
        table.add_row(vec![
            Cell::new(&entry.dir),
            right_cell(&entry.last_index.to_string(), None),
            prefix_cell,
        ]);
    }

    println!("{table}");
    println!("\n  {} tracked directories\n", store.len());
}

pub(crate) fn output_store_json(store: &IndexStore) -> String {
    let output: Vec<serde_json::Value> = store
        .entries()
        .iter()
        .map(|entry| {
            serde_json::json!({
                "dir": entry.dir,
                "last_index": entry.last_index,
                "last_prefix": prefix_for(entry.last_index),
            })
        })
        .collect();
    to_pretty_json(&serde_json::Value::Array(output), "[]")
}
