//! Integration tests for JSON inputs and JSON-described rule lists.

use pretty_assertions::assert_eq;
use serde_json::json;
use textguard_validator::prelude::*;

#[test]
fn json_strings_pass_through_rules() {
    let validator = StringValidator::new().min_length(2);
    assert_eq!(validator.go(&json!("ok")).unwrap(), "ok");
    assert_eq!(
        validator.go(&json!("o")).unwrap_err().message,
        "String length must be greater than or equal to 2 but was 1."
    );
}

#[test]
fn rules_from_json_list() {
    let validator = StringValidator::from_json(&json!([
        {"kind": "min_length", "min": 1},
        {"kind": "max_length", "max": 20},
        {"kind": "not_equal", "value": "foo"}
    ]));

    assert_eq!(
        validator,
        StringValidator::new().not_empty().max_length(20).not_equals("foo")
    );
}

#[test]
fn non_list_initial_rules_are_ignored() {
    for value in [json!(null), json!(3), json!("min_length"), json!({"rules": []})] {
        let validator = StringValidator::from_json(&value);
        assert!(validator.is_empty());
        assert_eq!(validator.go("anything").unwrap(), "anything");
    }
}

#[test]
fn validator_serializes_as_rule_list() {
    let validator = StringValidator::new()
        .equals("a")
        .rule(MaxLength::bytes(8))
        .equals("b");

    assert_eq!(
        serde_json::to_value(&validator).unwrap(),
        json!([
            {"kind": "max_length", "max": 8, "mode": "bytes"},
            {"kind": "equal", "value": "b"}
        ])
    );
}

#[test]
fn utf16_length_rules() {
    let validator = StringValidator::new().rule(MaxLength::utf16(2));
    assert!(validator.go("\u{1f600}").is_ok());

    let err = validator.go("a\u{1f600}").unwrap_err();
    assert_eq!(
        err.message,
        "String length must be less than or equal to 2 but was 3."
    );
}

#[test]
fn typed_and_candidate_paths_agree() {
    let validator = StringValidator::new().not_equals("x");
    assert_eq!(
        validator.validate("x").unwrap_err(),
        validator.validate_candidate(&json!("x")).unwrap_err()
    );
    assert!(
        validator
            .validate_candidate(&json!(1))
            .unwrap_err()
            .is_type_mismatch()
    );
}
