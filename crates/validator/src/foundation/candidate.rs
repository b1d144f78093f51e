//! Classification of unknown inputs
//!
//! Evaluation accepts values whose type is not known up front. Every input is
//! classified exactly once into a [`Candidate`] before any rule looks at it;
//! only the [`Candidate::Str`] variant ever reaches rule logic.

use crate::foundation::ValidationError;

// ============================================================================
// CANDIDATE
// ============================================================================

/// The classified form of an input handed to
/// [`StringValidator::go`](crate::StringValidator::go).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// A string value, ready for rule evaluation.
    Str(&'a str),
    /// An explicit null.
    Null,
    /// No value at all.
    Absent,
    /// Some other type, identified by its runtime type name.
    Other(&'static str),
}

impl<'a> Candidate<'a> {
    /// Name of the received kind, as reported in type-mismatch messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Candidate::Str(_) => "string",
            Candidate::Null => "null",
            Candidate::Absent => "undefined",
            Candidate::Other(name) => *name,
        }
    }

    /// Passes string candidates through and rejects everything else.
    pub fn into_str(self) -> Result<&'a str, ValidationError> {
        match self {
            Candidate::Str(s) => Ok(s),
            other => Err(ValidationError::type_mismatch(other.kind_name())),
        }
    }
}

// ============================================================================
// CORE TRAIT: AsCandidate
// ============================================================================

/// Types that can be offered to a validator as an unknown input.
pub trait AsCandidate {
    /// Classifies `self`.
    fn as_candidate(&self) -> Candidate<'_>;
}

impl AsCandidate for Candidate<'_> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        *self
    }
}

impl AsCandidate for str {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Str(self)
    }
}

impl AsCandidate for String {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Str(self.as_str())
    }
}

impl AsCandidate for Box<str> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Str(self)
    }
}

impl AsCandidate for std::borrow::Cow<'_, str> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Str(self.as_ref())
    }
}

impl<T: AsCandidate + ?Sized> AsCandidate for &T {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        (**self).as_candidate()
    }
}

/// `None` is an absent value.
impl<T: AsCandidate> AsCandidate for Option<T> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        match self {
            Some(value) => value.as_candidate(),
            None => Candidate::Absent,
        }
    }
}

/// The unit value stands in for an explicit null.
impl AsCandidate for () {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Null
    }
}

impl AsCandidate for bool {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Other("boolean")
    }
}

impl AsCandidate for char {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Other("char")
    }
}

macro_rules! numeric_candidate {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsCandidate for $ty {
                #[inline]
                fn as_candidate(&self) -> Candidate<'_> {
                    Candidate::Other("number")
                }
            }
        )+
    };
}

numeric_candidate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ============================================================================
// SERDE JSON VALUE CONVERSIONS
// ============================================================================

/// Returns a human-readable type name for a JSON value.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl AsCandidate for serde_json::Value {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        match self {
            serde_json::Value::String(s) => Candidate::Str(s.as_str()),
            serde_json::Value::Null => Candidate::Null,
            other => Candidate::Other(json_type_name(other)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
