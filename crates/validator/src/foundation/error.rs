//! Error type for validation failures
//!
//! A failure carries a stable machine-readable `code`, the human-readable
//! `message` that callers surface, and the parameters that were interpolated
//! into it. `Display` renders the message verbatim.
//!
//! All string fields use `Cow<'static, str>` so static codes cost nothing.

use std::borrow::Cow;

use smallvec::SmallVec;

/// Inline storage for error parameters (rules record at most two).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use textguard_validator::foundation::ValidationError;
///
/// let error = ValidationError::not_equal("foo");
/// assert_eq!(error.code, "not_equal");
/// assert_eq!(error.to_string(), "Value must not be foo.");
/// assert_eq!(error.param("rejected"), Some("foo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// One of `type_mismatch`, `equal`, `not_equal`, `min_length`, `max_length`.
    pub code: Cow<'static, str>,

    /// Human-readable failure message.
    pub message: Cow<'static, str>,

    /// Values interpolated into the message, as ordered key-value pairs.
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns `true` if the candidate was rejected before any rule ran.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        self.code == "type_mismatch"
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error for a candidate that is not a string.
    ///
    /// `actual` is the runtime kind that was received: `null`, `undefined`,
    /// or a type name such as `number`.
    pub fn type_mismatch(actual: impl Into<Cow<'static, str>>) -> Self {
        let actual = actual.into();
        Self::new(
            "type_mismatch",
            format!("StringValidator expected a string but received {actual}."),
        )
        .with_param("expected", "string")
        .with_param("actual", actual)
    }

    /// Creates an "equal" error.
    pub fn equal(expected: &str, actual: &str) -> Self {
        Self::new(
            "equal",
            format!("Value was expected to be {expected} but was {actual}."),
        )
        .with_param("expected", expected.to_owned())
        .with_param("actual", actual.to_owned())
    }

    /// Creates a "not_equal" error.
    pub fn not_equal(rejected: &str) -> Self {
        Self::new("not_equal", format!("Value must not be {rejected}."))
            .with_param("rejected", rejected.to_owned())
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: i64, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("String length must be greater than or equal to {min} but was {actual}."),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: i64, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("String length must be less than or equal to {max} but was {actual}."),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
