//! # textguard-validator
//!
//! A small fluent validator for string values.
//!
//! ## Quick Start
//!
//! ```
//! use textguard_validator::prelude::*;
//!
//! let username = StringValidator::new().not_empty().max_length(20).not_equals("root");
//!
//! assert_eq!(username.go("alice").unwrap(), "alice");
//! assert!(username.go("root").is_err());
//! assert!(username.go(&serde_json::Value::Null).unwrap_err().is_type_mismatch());
//! ```
//!
//! ## Rules
//!
//! - [`Equals`](rules::Equals), [`NotEquals`](rules::NotEquals)
//! - [`MinLength`](rules::MinLength), [`MaxLength`](rules::MaxLength)
//!   (`not_empty` and `empty` are shorthands for `min_length(1)` and `max_length(0)`)
//!
//! A validator keeps at most one rule of each kind and evaluates them in the
//! order they were (last) added, stopping at the first failure.
//!
//! ## Measuring length
//!
//! `min_length`/`max_length` count Unicode scalar values
//! ([`LengthMode::Chars`](rules::LengthMode::Chars)). Hosts with UTF-16
//! strings, such as JavaScript, count a character outside the Basic
//! Multilingual Plane as two units. To get their lengths and messages, build
//! the rule with [`LengthMode::Utf16`](rules::LengthMode::Utf16):
//!
//! ```
//! use textguard_validator::prelude::*;
//!
//! assert_eq!(StringValidator::new().max_length(1).go("😀").unwrap(), "😀");
//!
//! let utf16 = StringValidator::new().rule(MaxLength::utf16(1));
//! assert_eq!(
//!     utf16.go("😀").unwrap_err().message,
//!     "String length must be less than or equal to 1 but was 2."
//! );
//! ```

pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod string;

pub use foundation::{Candidate, ValidationError, Verdict};
pub use string::StringValidator;
