//! Error accumulation and verbosity levels.
//!
//! Run with: cargo run --example error_handling

use dsv_codec::{parse, DsvOptions, Verbosity};

fn main() {
    let lines = ["a,b", "1,2", "1,2,3", "3,4", "5"];

    for verbosity in [
        Verbosity::Quiet,
        Verbosity::WithLines,
        Verbosity::WithDetails,
    ] {
        let options = DsvOptions::csv().with_verbosity(verbosity);
        let output = parse(&lines, &options);

        println!("{:?}: {} records", verbosity, output.records.len());
        for error in &output.errors {
            println!("  {}", error);
        }
        println!();
    }
}
