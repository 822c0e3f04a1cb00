//! Parsing the same data in different DSV dialects.
//!
//! Run with: cargo run --example dialects

use dsv_codec::{parse, DsvOptions, Record};

fn show(label: &str, records: &[Record]) {
    println!("{label}:");
    for record in records {
        println!("  {:?}", record);
    }
    println!();
}

fn main() {
    // CSV: comma delimiter, RFC 4180 quote doubling
    let csv = parse(
        &["city,population", "\"Washington, D.C.\",702250"],
        &DsvOptions::csv(),
    );
    show("csv", &csv.records);

    // TSV: same quoting rules, tab delimiter
    let tsv = parse(&["city\tpopulation", "Berlin\t3755251"], &DsvOptions::tsv());
    show("tsv", &tsv.records);

    // SSV: space-delimited output of tools like `ps`, header skipped,
    // runs of spaces collapsed
    let ssv = parse(
        &["PID   TTY   TIME", "1     ?     00:00:03", "1337  pts/0 00:00:00"],
        &DsvOptions::ssv(),
    );
    show("ssv", &ssv.records);

    // A custom dialect: semicolons, single quotes, backslash escapes
    let custom = parse(
        &["name;quote", "Kant;'so-called \\'duty\\''"],
        &DsvOptions::new()
            .with_delimiter(';')
            .with_quote('\'')
            .with_escape('\\')
            .with_header(Vec::<String>::new()),
    );
    show("custom", &custom.records);
}
