//! Prints how each command-line argument scans under general and JSON rules.
//!
//! ```text
//! cargo run --example scan_literals -- 123.456 01 .5 99999999999999999999999
//! ```
#![allow(missing_docs)]

use asciinum::{ParseOptions, parse_number_string};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: scan_literals <literal>...");
        std::process::exit(2);
    }

    let dialects = [
        ("general", ParseOptions::default()),
        ("json", ParseOptions::json().with_parse_ints(true)),
    ];
    for arg in &args {
        println!("{arg}");
        for (name, options) in dialects {
            match parse_number_string(arg.as_bytes(), options) {
                Ok(n) => {
                    let sign = if n.negative { "-" } else { "" };
                    let rest = &arg[n.lastmatch..];
                    println!(
                        "  {name:<8} {sign}{} x 10^{}  int={} truncated={} rest={rest:?}",
                        n.mantissa, n.exponent, n.is_64bit_int, n.too_many_digits
                    );
                }
                Err(e) => println!("  {name:<8} rejected: {e}"),
            }
        }
    }
}
