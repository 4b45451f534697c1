/// Flattening a grouped time-series export
///
/// The analytics API nests each segment's records under a group wrapper,
/// with the segment label as a sibling of the record array. Reshape first,
/// then flatten.
use press::{flatten, reshape_grouped_response, FlattenOptions};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    println!("=== Grouped API Response ===\n");

    // A trimmed-down time-series export: one group per audience segment
    let response = json!({
        "results": [
            {
                "segment": "organic",
                "data": [
                    {"date": "2020-01-01", "values": [120]},
                    {"date": "2020-01-02", "values": [98]}
                ]
            },
            {
                "segment": "paid",
                "data": [
                    {"date": "2020-01-01", "values": [45]},
                    {"date": "2020-01-02", "values": [51]}
                ]
            }
        ]
    });

    println!("Raw response:");
    println!("{}\n", serde_json::to_string_pretty(&response)?);

    // Flattening the raw shape can't pair each row with its segment label -
    // the label lives next to the record array, not inside the records.
    // Lift it in first:
    let reshaped = reshape_grouped_response(&response);

    println!("Reshaped (segment lifted into every record):");
    println!("{}\n", serde_json::to_string_pretty(&reshaped)?);

    let table = flatten(
        &reshaped,
        "/results/data/date,/results/data/values,/results/data/segment",
        &FlattenOptions::default(),
    )?;

    println!("Final table:");
    for row in table.into_values() {
        println!("{}", serde_json::to_string(&row)?);
    }

    Ok(())
}
