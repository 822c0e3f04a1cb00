//! Basic DSV parsing and serialization.
//!
//! Run with: cargo run --example quick_start

use dsv_codec::{parse, serialize, DsvOptions};

fn main() {
    let lines = [
        "id,name,email",
        "42,Alice Johnson,alice@example.com",
        "43,Bob Smith,bob@example.com",
    ];

    // Parse into key→value records; the first row becomes the header
    let parsed = parse(&lines, &DsvOptions::csv());
    assert!(parsed.errors.is_empty());

    for record in &parsed.records {
        println!(
            "{} <{}>",
            record.get("name").unwrap(),
            record.get("email").unwrap()
        );
    }

    // Serialize back to text
    let output = serialize(&parsed.records, &DsvOptions::csv());
    println!("\nCSV output:\n{}", output.text);
}
