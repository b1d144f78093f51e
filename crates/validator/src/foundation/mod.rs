//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`AsCandidate`]
//! - **Errors**: [`ValidationError`]
//! - **Outcomes**: [`Verdict`]
//!
//! # Architecture
//!
//! ## 1. Classify once
//!
//! Unknown input is turned into a [`Candidate`] at the boundary. Only string
//! candidates reach rule logic; everything else becomes a `type_mismatch`
//! failure.
//!
//! ## 2. Failures are data
//!
//! Nothing in this crate panics to signal a rejected value. Every failure is a
//! [`ValidationError`] whose `Display` is the human-readable message:
//!
//! ```
//! use textguard_validator::foundation::ValidationError;
//!
//! let error = ValidationError::min_length(1, 0);
//! assert_eq!(
//!     error.to_string(),
//!     "String length must be greater than or equal to 1 but was 0."
//! );
//! ```

pub mod candidate;
pub mod error;
pub mod traits;
pub mod verdict;

pub use candidate::{AsCandidate, Candidate};
pub use error::{ErrorParams, ValidationError};
pub use traits::Validate;
pub use verdict::Verdict;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
