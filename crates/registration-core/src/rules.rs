//! Rule primitives for the validation schema.
//!
//! A [`Rule`] is one predicate plus the message shown when it fails. A
//! [`Refinement`] is a rule over the whole value set whose error lands on
//! a single target field.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::field::{FieldRef, FormField};
use crate::values::RawFormValues;

// Email address pattern, ASCII only.
//
// Local part of letters, digits and `_'+-.`, ending in a non-dot; one or
// more dot-terminated domain labels that do not start with a hyphen; a TLD
// of at least two letters. Leading dots and `..` are rejected in
// `is_email` since the regex crate has no lookahead.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("EMAIL_REGEX: invalid regex pattern")
});

/// Whether `value` is a well-formed email address.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

/// Length of `value` in UTF-16 code units.
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// The predicate half of a [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// At least `n` characters.
    MinChars(usize),
    /// At most `n` characters.
    MaxChars(usize),
    /// A well-formed email address.
    Email,
    /// The checkbox is ticked.
    Accepted,
}

impl Check {
    /// Text checks fail on a checkbox and `Accepted` fails on text.
    ///
    /// Lengths count UTF-16 code units, the way a browser measures input.
    pub fn passes(&self, value: FieldRef<'_>) -> bool {
        match (self, value) {
            (Check::MinChars(n), FieldRef::Text(s)) => text_len(s) >= *n,
            (Check::MaxChars(n), FieldRef::Text(s)) => text_len(s) <= *n,
            (Check::Email, FieldRef::Text(s)) => is_email(s),
            (Check::Accepted, FieldRef::Checked(checked)) => checked,
            _ => false,
        }
    }
}

/// A single predicate + message pair evaluated against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    check: Check,
    message: Cow<'static, str>,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn min_chars(n: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::MinChars(n), message)
    }

    pub fn max_chars(n: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::MaxChars(n), message)
    }

    pub fn email(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Email, message)
    }

    pub fn accepted(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Accepted, message)
    }

    pub fn check(&self) -> Check {
        self.check
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passes(&self, value: FieldRef<'_>) -> bool {
        self.check.passes(value)
    }
}

/// A cross-field rule. Its error attaches to `target`.
#[derive(Debug, Clone)]
pub struct Refinement {
    target: FormField,
    predicate: fn(&RawFormValues) -> bool,
    message: Cow<'static, str>,
}

impl Refinement {
    pub fn new(
        target: FormField,
        predicate: fn(&RawFormValues) -> bool,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            target,
            predicate,
            message: message.into(),
        }
    }

    /// `password` and `confirmPassword` are identical.
    pub fn passwords_match(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(
            FormField::ConfirmPassword,
            |values| values.password == values.confirm_password,
            message,
        )
    }

    pub fn target(&self) -> FormField {
        self.target
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passes(&self, values: &RawFormValues) -> bool {
        (self.predicate)(values)
    }
}
