//! Verifies that `use textguard_validator::prelude::*` brings in everything
//! a consumer needs.

use textguard_validator::prelude::*;

#[test]
fn prelude_provides_builder_and_traits() {
    let v = StringValidator::new().min_length(3).max_length(20);
    assert!(v.validate("hello").is_ok());
    assert!(v.go("hi").is_err());
}

#[test]
fn prelude_provides_rule_factories() {
    let v = StringValidator::new()
        .rule(not_empty())
        .rule(empty())
        .rule(equals("a"))
        .rule(not_equals("b"))
        .rule(min_length(0))
        .rule(max_length(1));

    let kinds: Vec<RuleKind> = v.rules().iter().map(Rule::kind).collect();
    assert_eq!(
        kinds,
        [
            RuleKind::Equal,
            RuleKind::NotEqual,
            RuleKind::MinLength,
            RuleKind::MaxLength
        ]
    );
}

#[test]
fn prelude_provides_candidate_types() {
    assert_eq!("x".as_candidate(), Candidate::Str("x"));
    assert_eq!(LengthMode::default(), LengthMode::Chars);
}
