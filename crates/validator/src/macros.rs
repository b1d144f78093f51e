//! Macros for creating rules with minimal boilerplate.
//!
//! # Examples
//!
//! ```
//! use textguard_validator::rule;
//! use textguard_validator::foundation::{Validate, ValidationError};
//!
//! rule! {
//!     #[derive(PartialEq, Eq)]
//!     pub Prefixed { prefix: String } for str;
//!     rule(self, input) { input.starts_with(self.prefix.as_str()) }
//!     error(self, input) {
//!         ValidationError::new("prefixed", format!("Value must start with {}.", self.prefix))
//!     }
//!     new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
//!     fn prefixed(prefix: impl Into<String>);
//! }
//!
//! assert!(prefixed("tg_").validate("tg_user").is_ok());
//! assert_eq!(
//!     prefixed("tg_").validate("user").unwrap_err().message,
//!     "Value must start with tg_."
//! );
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Validate` implementation,
/// constructor, and optionally a factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. Fields accept their own attributes (e.g. `#[serde(default)]`)
/// and are always `pub`.
///
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: i64, mode: LengthMode } for str;
///     rule(self, input) { signed(self.mode.measure(input)) >= self.min }
///     error(self, input) { ValidationError::min_length(self.min, self.mode.measure(input)) }
///     new(min: i64) { Self { min, mode: LengthMode::Chars } }
///     fn min_length(min: i64);
/// }
/// ```
///
/// Omit the trailing `fn` line to skip the factory function.
#[macro_export]
macro_rules! rule {
    // ── Struct with fields + new + factory fn ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $( $(#[$fmeta:meta])* $field:ident: $fty:ty ),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $( $(#[$fmeta])* $field: $fty ),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + new, no factory ─────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $( $(#[$fmeta:meta])* $field:ident: $fty:ty ),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: $fty, )+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    crate::rule! {
        #[derive(PartialEq, Eq)]
        Contains { needle: char } for str;
        rule(self, input) { input.contains(self.needle) }
        error(self, input) {
            ValidationError::new("contains", format!("{input:?} lacks {:?}", self.needle))
        }
        new(needle: char) { Self { needle } }
    }

    crate::rule! {
        ShorterThan { limit: usize } for str;
        rule(self, input) { input.len() < self.limit }
        error(self, input) { ValidationError::new("shorter_than", "too long") }
        new(limit: usize) { Self { limit } }
        fn shorter_than(limit: usize);
    }

    #[test]
    fn test_rule_without_factory() {
        let rule = Contains::new('@');
        assert_eq!(rule.needle, '@');
        assert!(rule.validate("a@b").is_ok());

        let err = rule.validate("ab").unwrap_err();
        assert_eq!(err.code, "contains");
        assert_eq!(err.message, "\"ab\" lacks '@'");
    }

    #[test]
    fn test_rule_with_factory() {
        assert!(shorter_than(3).validate("ab").is_ok());
        assert_eq!(shorter_than(3).validate("abc").unwrap_err().code, "shorter_than");
    }
}
