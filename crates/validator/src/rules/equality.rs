//! Equality rules
//!
//! Comparison is exact: no trimming, no case folding, no normalization.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

crate::rule! {
    /// Validates that a string equals an expected value.
    #[derive(PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub Equals { value: String } for str;
    rule(self, input) { input == self.value }
    error(self, input) { ValidationError::equal(&self.value, input) }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn equals(value: impl Into<String>);
}

crate::rule! {
    /// Validates that a string differs from a rejected value.
    #[derive(PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub NotEquals { value: String } for str;
    rule(self, input) { input != self.value }
    error(self, input) { ValidationError::not_equal(&self.value) }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn not_equals(value: impl Into<String>);
}
