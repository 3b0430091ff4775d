//! Form Field Validation Example
//!
//! This example builds a missing-field report for a submitted form: fields
//! that are absent or blank are collected and capitalized for display.
//!
//! Run with: cargo run --example form_fields

use millrace::prelude::*;
use std::collections::HashMap;

const REQUIRED_FIELDS: [&str; 5] = ["name", "email", "age", "phone", "city"];

fn main() {
    println!("=== Form Field Validation Example ===\n");

    let mut submission = HashMap::new();
    submission.insert("name", "greta");
    submission.insert("email", "");
    submission.insert("age", "52");
    submission.insert("city", "bergen");

    println!("submission: {:?}\n", submission);

    // present at all, regardless of content
    let present = over(is_defined(), pluck_from(&submission));
    // present and non-blank
    let filled = over(is_truthy(), pluck_from(&submission));

    for field in REQUIRED_FIELDS {
        println!(
            "{:>6}: present={:<5} filled={}",
            field,
            present.check(field),
            filled.check(field)
        );
    }

    let missing: Vec<&str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !filled.check(*field))
        .collect();

    let labels: Vec<String> = missing
        .iter()
        .filter_map(|field| ucfirst().apply(*field).ok())
        .collect();

    println!("\nPlease fill in: {}", labels.join(", ")); // Email, Phone
}
