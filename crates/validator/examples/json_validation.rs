//! Validating JSON payloads with rules loaded from JSON.
//!
//! Run: `cargo run -p sieve-validator --example json_validation`

use serde_json::json;
use sieve_validator::prelude::*;

fn main() {
    direct_value_validation();
    configured_rules();
}

/// Check raw JSON values by converting them into [`Value`].
fn direct_value_validation() {
    println!("=== Direct Value Validation ===\n");

    let min3 = valid_min_size(3);
    println!("min_size(3) on \"hello\": {}", status(&min3.validate(&json!("hello").into())));
    println!("min_size(3) on \"hi\":    {}", status(&min3.validate(&json!("hi").into())));

    let port = valid_range(1, 65535);
    println!("range(1, 65535) on 8080: {}", status(&port.validate(&json!(8080).into())));

    // Type mismatch: a number handed to a size rule
    println!("min_size(3) on 42: {}", status(&min3.validate(&json!(42).into())));

    println!();
}

/// Build validators from a rule table and apply them to a payload.
fn configured_rules() {
    println!("=== Configured Rules ===\n");

    let rules: Vec<(String, ValidationRule)> = match serde_json::from_value(json!([
        ["host", {"rule": "required"}],
        ["host", {"rule": "max_size", "size": 253}],
        ["port", {"rule": "range", "min": 1, "max": 65535}],
        ["admin", {"rule": "email"}]
    ])) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("bad rule table: {e}");
            return;
        }
    };

    let payload = json!({
        "host": "localhost",
        "port": 70000,
        "admin": "ops@example.com"
    });

    for (field, rule) in &rules {
        let validator = match rule.build() {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{field}: {e}");
                continue;
            }
        };
        let value = payload.get(field).map_or(Value::Nil, Value::from);
        println!("{field} [{}]: {}", rule.code(), status(&validator.validate(&value)));
    }
}

fn status(result: &Result<(), ValidationError>) -> String {
    match result {
        Ok(()) => "✓ valid".to_string(),
        Err(e) => format!("✗ {e}"),
    }
}
