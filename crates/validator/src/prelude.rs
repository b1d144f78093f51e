//! Prelude module for convenient imports.
//!
//! ```
//! use textguard_validator::prelude::*;
//!
//! let validator = StringValidator::new().rule(min_length(2)).rule(not_equals("no"));
//! assert!(validator.validate("ok").is_ok());
//! ```

pub use crate::foundation::{
    AsCandidate, Candidate, Validate, ValidationError, ValidationResult, Verdict,
};

pub use crate::rules::{
    Equals, LengthMode, MaxLength, MinLength, NotEquals, Rule, RuleKind, empty, equals,
    max_length, min_length, not_empty, not_equals,
};

pub use crate::string::StringValidator;
