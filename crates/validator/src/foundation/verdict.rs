//! Serializable evaluation outcome
//!
//! [`Verdict`] is the wire form of an evaluation result:
//! `{"ok": true, "value": "..."}` or `{"ok": false, "message": "..."}`.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

/// Success-with-value or failure-with-message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "VerdictRepr", try_from = "VerdictRepr")]
pub enum Verdict {
    /// The candidate passed every rule; carries the validated value.
    Success(String),
    /// The candidate was rejected; carries the failure message.
    Failure(String),
}

impl Verdict {
    /// Returns `true` for a successful verdict.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Success(_))
    }

    /// The value on success, the message on failure.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Verdict::Success(value) | Verdict::Failure(value) => value,
        }
    }
}

impl From<Result<String, ValidationError>> for Verdict {
    fn from(result: Result<String, ValidationError>) -> Self {
        match result {
            Ok(value) => Verdict::Success(value),
            Err(error) => Verdict::Failure(error.message.into_owned()),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct VerdictRepr {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<Verdict> for VerdictRepr {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Success(value) => Self {
                ok: true,
                value: Some(value),
                message: None,
            },
            Verdict::Failure(message) => Self {
                ok: false,
                value: None,
                message: Some(message),
            },
        }
    }
}

impl TryFrom<VerdictRepr> for Verdict {
    type Error = String;

    fn try_from(repr: VerdictRepr) -> Result<Self, Self::Error> {
        match repr {
            VerdictRepr {
                ok: true,
                value: Some(value),
                ..
            } => Ok(Verdict::Success(value)),
            VerdictRepr {
                ok: false,
                message: Some(message),
                ..
            } => Ok(Verdict::Failure(message)),
            VerdictRepr { ok: true, .. } => Err("successful verdict is missing `value`".into()),
            VerdictRepr { ok: false, .. } => Err("failed verdict is missing `message`".into()),
        }
    }
}
