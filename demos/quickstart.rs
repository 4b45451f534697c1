/// Quickstart example - the simplest possible usage
use press::{flatten, FlattenOptions, TableWriter};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    println!("=== Press Quick Start ===\n");

    // Step 1: Your JSON data
    let my_data = json!({
        "data": [
            {"id": "page-views", "name": "Page Views", "unit": "count"},
            {"id": "uniques", "name": "Unique Visitors", "unit": "count"},
            {"id": "bounce-rate", "name": "Bounce Rate", "unit": "percent"}
        ]
    });

    println!("Original JSON:");
    println!("{}\n", serde_json::to_string_pretty(&my_data)?);

    // Step 2: Pick your columns with a path query
    let query = "/data/id,/data/name,/data/unit";

    // Step 3: Flatten into a table
    let table = flatten(&my_data, query, &FlattenOptions::default())?;

    println!("Flattened table ({} columns, {} rows):\n", table.width(), table.rows.len());

    // Step 4: Look at what we got
    for row in table.clone().into_values() {
        println!("{}", serde_json::to_string(&row)?);
    }

    // Step 5: Or stream it to any writer as JSON Lines
    println!("\nSame table through TableWriter:");
    let mut writer = TableWriter::new(std::io::stdout().lock());
    writer.write_table(&table)?;
    writer.flush()?;

    println!("\nTry renaming the columns:");
    let options = FlattenOptions::default().with_column_names(vec![
        "Metric ID".to_string(),
        "Metric Name".to_string(),
        "Unit".to_string(),
    ]);
    let renamed = flatten(&my_data, query, &options)?;
    println!("  header = {:?}", renamed.header.unwrap());

    Ok(())
}
