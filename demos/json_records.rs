//! JSON Record Filtering Example
//!
//! This example runs the field-access combinators over `serde_json::Value`
//! records, filtering and projecting without defining any structs.
//!
//! Run with: cargo run --example json_records --features json

use millrace::predicate::*;
use millrace::transform::*;
use serde_json::json;

fn main() {
    println!("=== JSON Record Filtering Example ===\n");

    let records = vec![
        json!({"name": "alice", "role": "admin", "active": true}),
        json!({"name": "bo", "active": false}),
        json!({"name": "cleo", "role": "editor"}),
        json!(["not", "an", "object"]),
    ];

    // records that carry a role field at all
    let has_role = over(is_defined(), pluck("role"));
    let with_roles: Vec<_> = records.iter().filter(|r| has_role.check(*r)).collect();
    println!("records with a role: {}", with_roles.len()); // 2

    // project the role names, defaulting the rest
    let role_label = pipe(pluck("role"), |role: &Option<serde_json::Value>| {
        role.as_ref()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_else(|| "none".to_string())
    });
    for record in &records {
        println!("role: {}", role_label.apply(record));
    }

    // one record, many keys
    let profile = json!({"name": "alice", "role": "admin"});
    let field = pluck_from(&profile);
    for key in ["name", "role", "team"] {
        println!("{}: {:?}", key, field.apply(key));
    }
}
