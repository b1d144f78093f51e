//! Basic usage example for textguard-validator
//!
//! Runs a few candidates through `not_empty().max_length(20).not_equals("foo")`
//! and prints either the validated value or the failure message.

use serde_json::json;
use textguard_validator::foundation::AsCandidate;
use textguard_validator::StringValidator;

fn check<S: AsCandidate + ?Sized>(validator: &StringValidator, candidate: &S) {
    match validator.go(candidate) {
        Ok(value) => println!("✓ {value}"),
        Err(e) => println!("✗ {e}"),
    }
}

fn main() {
    let validator = StringValidator::new()
        .not_empty()
        .max_length(20)
        .not_equals("foo");

    check(&validator, "foo");
    check(&validator, "bar");
    check(&validator, "something longer than 20");
    check(&validator, "");
    check(&validator, &json!(null));
    check(&validator, &json!(42));
}
