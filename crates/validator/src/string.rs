//! The fluent string validator
//!
//! [`StringValidator`] holds an ordered list of [`Rule`]s with at most one
//! rule per [`RuleKind`]. Adding a rule whose kind is already present removes
//! the old rule and appends the new one, so a replaced kind moves to the end
//! of the evaluation order.
//!
//! # Examples
//!
//! ```
//! use textguard_validator::StringValidator;
//! use serde_json::json;
//!
//! let validator = StringValidator::new()
//!     .not_empty()
//!     .max_length(20)
//!     .not_equals("foo");
//!
//! assert_eq!(validator.go("bar").unwrap(), "bar");
//! assert_eq!(validator.go("foo").unwrap_err().to_string(), "Value must not be foo.");
//! assert_eq!(
//!     validator.go(&json!(42)).unwrap_err().to_string(),
//!     "StringValidator expected a string but received number."
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::foundation::{AsCandidate, Validate, ValidationError, ValidationResult};
use crate::rules::{Equals, MaxLength, MinLength, NotEquals, Rule, RuleKind};

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// A builder of string rules plus the evaluation entry point [`go`](Self::go).
///
/// Configuration methods consume and return the validator, so a chain reads
/// left to right. Evaluation takes `&self` and never touches the rule list,
/// which makes a configured validator safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct StringValidator {
    rules: Vec<Rule>,
}

impl StringValidator {
    /// Creates a validator with no rules. It accepts every string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from an initial rule list.
    ///
    /// Rules are added one by one, so a later rule of a repeated kind wins.
    #[must_use]
    pub fn from_rules<I, R>(rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        let mut validator = Self::new();
        for rule in rules {
            validator.insert(rule.into());
        }
        validator
    }

    /// Creates a validator from an untyped initial rule list.
    ///
    /// Anything other than a JSON array yields an empty validator. Array
    /// entries that do not describe a rule are skipped.
    #[must_use]
    pub fn from_json(rules: &serde_json::Value) -> Self {
        let Some(entries) = rules.as_array() else {
            debug!(
                received = crate::foundation::candidate::json_type_name(rules),
                "initial rules are not a list; starting empty"
            );
            return Self::new();
        };

        let mut validator = Self::new();
        for (index, entry) in entries.iter().enumerate() {
            match Rule::deserialize(entry) {
                Ok(rule) => {
                    validator.insert(rule);
                }
                Err(error) => warn!(index, %error, "skipping invalid initial rule"),
            }
        }
        validator
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Requires the value to equal `value` exactly.
    pub fn equals(self, value: impl Into<String>) -> Self {
        self.rule(Equals::new(value))
    }

    /// Requires the value to differ from `value`.
    pub fn not_equals(self, value: impl Into<String>) -> Self {
        self.rule(NotEquals::new(value))
    }

    /// Requires at least `min` characters.
    pub fn min_length(self, min: i64) -> Self {
        self.rule(MinLength::new(min))
    }

    /// Requires at most `max` characters.
    pub fn max_length(self, max: i64) -> Self {
        self.rule(MaxLength::new(max))
    }

    /// Requires at least one character. Occupies the min-length slot.
    pub fn not_empty(self) -> Self {
        self.min_length(1)
    }

    /// Requires the empty string. Occupies the max-length slot.
    pub fn empty(self) -> Self {
        self.max_length(0)
    }

    /// Adds any rule, replacing an existing rule of the same kind.
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.insert(rule.into());
        self
    }

    /// Adds `rule` in place and returns the rule of the same kind it displaced.
    pub fn insert(&mut self, rule: Rule) -> Option<Rule> {
        let kind = rule.kind();
        let replaced = self
            .rules
            .iter()
            .position(|existing| existing.kind() == kind)
            .map(|index| self.rules.remove(index));

        if let Some(old) = &replaced {
            debug!(%kind, ?old, new = ?rule, "replacing rule of the same kind");
        }
        self.rules.push(rule);
        replaced
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule occupying `kind`'s slot, if any.
    #[must_use]
    pub fn get(&self, kind: RuleKind) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.kind() == kind)
    }

    /// Number of configured rules (at most one per kind).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // ------------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------------

    /// Validates an unknown value.
    ///
    /// Non-string inputs fail with a `type_mismatch` error before any rule
    /// runs. Otherwise rules run in order and the first failure is returned;
    /// if all pass, the original string is handed back.
    pub fn go<S>(&self, value: &S) -> ValidationResult<String>
    where
        S: AsCandidate + ?Sized,
    {
        let candidate = value.as_candidate();
        let input = candidate.into_str().inspect_err(|_| {
            trace!(received = candidate.kind_name(), "candidate is not a string");
        })?;

        match self.validate(input) {
            Ok(()) => {
                trace!(rules = self.rules.len(), "candidate accepted");
                Ok(input.to_owned())
            }
            Err(error) => {
                trace!(code = %error.code, "candidate rejected");
                Err(error)
            }
        }
    }
}

impl Validate for StringValidator {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.rules.iter().try_for_each(|rule| rule.validate(input))
    }
}

impl From<Vec<Rule>> for StringValidator {
    fn from(rules: Vec<Rule>) -> Self {
        Self::from_rules(rules)
    }
}

impl From<StringValidator> for Vec<Rule> {
    fn from(validator: StringValidator) -> Self {
        validator.rules
    }
}

impl FromIterator<Rule> for StringValidator {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::from_rules(iter)
    }
}

impl Extend<Rule> for StringValidator {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        for rule in iter {
            self.insert(rule);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
