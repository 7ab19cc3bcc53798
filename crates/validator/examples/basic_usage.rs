//! Basic usage example for sieve-validator

use sieve_validator::prelude::*;

fn main() {
    let validator = valid_min_size(5);

    match validator.validate(&Value::from("hello")) {
        Ok(()) => println!("✓ 'hello' is valid (size >= 5)"),
        Err(e) => println!("✗ Error: {e}"),
    }

    match validator.validate(&Value::from("hi")) {
        Ok(()) => println!("✓ 'hi' is valid"),
        Err(e) => println!("✗ 'hi' is invalid: {e}"),
    }

    // Wrong types are unsatisfied, never a panic.
    let age = valid_range(18, 130);
    for input in [Value::from(42), Value::from("42"), Value::Nil] {
        println!("range(18, 130) on {input:?}: {}", age.is_satisfied(&input));
    }
}
