//! The rule model
//!
//! Four rule kinds exist: equal, not-equal, min-length and max-length. Each is
//! a standalone [`Validate`] implementation; [`Rule`] is the closed union over
//! them that a [`StringValidator`](crate::StringValidator) stores.
//!
//! ```
//! use textguard_validator::foundation::Validate;
//! use textguard_validator::rules::{Rule, RuleKind, min_length};
//!
//! let rule = Rule::from(min_length(3));
//! assert_eq!(rule.kind(), RuleKind::MinLength);
//! assert!(rule.validate("abc").is_ok());
//! ```

pub mod equality;
pub mod length;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

pub use equality::{Equals, NotEquals, equals, not_equals};
pub use length::{LengthMode, MaxLength, MinLength, empty, max_length, min_length, not_empty};

// ============================================================================
// RULE KIND
// ============================================================================

/// Identifies the slot a rule occupies; a validator holds at most one rule
/// per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Exact match.
    Equal,
    /// Exact mismatch.
    NotEqual,
    /// Lower length bound.
    MinLength,
    /// Upper length bound.
    MaxLength,
}

impl RuleKind {
    /// All kinds.
    pub const ALL: [RuleKind; 4] = [
        RuleKind::Equal,
        RuleKind::NotEqual,
        RuleKind::MinLength,
        RuleKind::MaxLength,
    ];

    /// Stable snake_case name, matching the error code the kind produces.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Equal => "equal",
            RuleKind::NotEqual => "not_equal",
            RuleKind::MinLength => "min_length",
            RuleKind::MaxLength => "max_length",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A single constraint with its parameter.
///
/// Serialized internally tagged by `kind`:
/// `{"kind": "min_length", "min": 1}`, `{"kind": "not_equal", "value": "foo"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Value must equal the expected string.
    Equal(Equals),
    /// Value must differ from the rejected string.
    NotEqual(NotEquals),
    /// Value length must be at least `min`.
    MinLength(MinLength),
    /// Value length must be at most `max`.
    MaxLength(MaxLength),
}

impl Rule {
    /// The slot this rule occupies.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Equal(_) => RuleKind::Equal,
            Rule::NotEqual(_) => RuleKind::NotEqual,
            Rule::MinLength(_) => RuleKind::MinLength,
            Rule::MaxLength(_) => RuleKind::MaxLength,
        }
    }
}

impl Validate for Rule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Equal(rule) => rule.validate(input),
            Rule::NotEqual(rule) => rule.validate(input),
            Rule::MinLength(rule) => rule.validate(input),
            Rule::MaxLength(rule) => rule.validate(input),
        }
    }
}

impl From<Equals> for Rule {
    fn from(rule: Equals) -> Self {
        Rule::Equal(rule)
    }
}

impl From<NotEquals> for Rule {
    fn from(rule: NotEquals) -> Self {
        Rule::NotEqual(rule)
    }
}

impl From<MinLength> for Rule {
    fn from(rule: MinLength) -> Self {
        Rule::MinLength(rule)
    }
}

impl From<MaxLength> for Rule {
    fn from(rule: MaxLength) -> Self {
        Rule::MaxLength(rule)
    }
}

// ============================================================================
// TESTS
// ============================================================================
