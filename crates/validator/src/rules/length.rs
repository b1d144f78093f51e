//! String length rules
//!
//! By default, length is measured in Unicode scalar values (chars).
//! `bytes` counts UTF-8 bytes, `utf16` counts UTF-16 code units (the length
//! a UTF-16 host such as a browser reports).
//!
//! Bounds are signed and never checked at construction: a negative minimum
//! always passes, a negative maximum never does.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
    /// Count UTF-16 code units.
    Utf16,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Utf16 => input.encode_utf16().count(),
        }
    }

    fn is_chars(&self) -> bool {
        *self == LengthMode::Chars
    }
}

/// Widens a measured length for comparison against a signed bound.
#[inline]
fn signed(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub MinLength {
        min: i64,
        #[serde(default, skip_serializing_if = "LengthMode::is_chars")]
        mode: LengthMode,
    } for str;
    rule(self, input) { signed(self.mode.measure(input)) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, self.mode.measure(input)) }
    new(min: i64) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: i64);
}

impl MinLength {
    /// Creates a minimum length rule that counts bytes.
    #[must_use]
    pub fn bytes(min: i64) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }

    /// Creates a minimum length rule that counts UTF-16 code units.
    #[must_use]
    pub fn utf16(min: i64) -> Self {
        Self {
            min,
            mode: LengthMode::Utf16,
        }
    }
}

/// Requires at least one character; shorthand for `min_length(1)`.
#[must_use]
pub fn not_empty() -> MinLength {
    MinLength::new(1)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub MaxLength {
        max: i64,
        #[serde(default, skip_serializing_if = "LengthMode::is_chars")]
        mode: LengthMode,
    } for str;
    rule(self, input) { signed(self.mode.measure(input)) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, self.mode.measure(input)) }
    new(max: i64) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: i64);
}

impl MaxLength {
    /// Creates a maximum length rule that counts bytes.
    #[must_use]
    pub fn bytes(max: i64) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }

    /// Creates a maximum length rule that counts UTF-16 code units.
    #[must_use]
    pub fn utf16(max: i64) -> Self {
        Self {
            max,
            mode: LengthMode::Utf16,
        }
    }
}

/// Requires the empty string; shorthand for `max_length(0)`.
#[must_use]
pub fn empty() -> MaxLength {
    MaxLength::new(0)
}

// ============================================================================
// TESTS
// ============================================================================
