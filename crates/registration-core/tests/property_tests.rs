//! Property-based tests for the registration schema
//!
//! Uses proptest to check the accept/reject contract over generated inputs.

use proptest::prelude::*;
use registration_core::{validate, FormField, RawFormValues, ValidationResult};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Names between 1 and 50 characters
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z '\\-]{0,49}").expect("valid regex")
}

/// Addresses the email grammar accepts
fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,20}@[a-z0-9]{1,20}\\.[a-z]{2,6}").expect("valid regex")
}

/// Passwords between 8 and 256 characters
fn password_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{8,256}").expect("valid regex")
}

/// A form where every rule passes
fn valid_form_strategy() -> impl Strategy<Value = RawFormValues> {
    (
        name_strategy(),
        name_strategy(),
        email_strategy(),
        password_strategy(),
    )
        .prop_map(|(first_name, last_name, email, password)| RawFormValues {
            first_name,
            last_name,
            email,
            confirm_password: password.clone(),
            password,
            terms_accepted: true,
        })
}

/// Any form at all, mostly invalid
fn any_form_strategy() -> impl Strategy<Value = RawFormValues> {
    (
        ".{0,60}",
        ".{0,60}",
        ".{0,40}",
        ".{0,20}",
        ".{0,20}",
        any::<bool>(),
    )
        .prop_map(
            |(first_name, last_name, email, password, confirm_password, terms_accepted)| {
                RawFormValues {
                    first_name,
                    last_name,
                    email,
                    password,
                    confirm_password,
                    terms_accepted,
                }
            },
        )
}

fn flags(input: &RawFormValues, field: FormField) -> bool {
    validate(input)
        .errors()
        .map(|e| e.contains(field))
        .unwrap_or(false)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A fully compliant form validates to a payload equal to its input
    #[test]
    fn valid_forms_pass_unchanged(input in valid_form_strategy()) {
        match validate(&input) {
            ValidationResult::Valid(values) => prop_assert_eq!(RawFormValues::from(values), input),
            ValidationResult::Invalid(errors) => prop_assert!(false, "unexpected errors: {}", errors),
        }
    }

    /// An empty first name is always flagged
    #[test]
    fn empty_first_name_is_flagged(mut input in any_form_strategy()) {
        input.first_name.clear();
        prop_assert!(flags(&input, FormField::FirstName));
    }

    /// Passwords shorter than 8 characters are always flagged
    #[test]
    fn short_password_is_flagged(mut input in valid_form_strategy(), len in 0usize..8) {
        input.password = "x".repeat(len);
        input.confirm_password = input.password.clone();
        prop_assert!(flags(&input, FormField::Password));
    }

    /// Passwords longer than 256 characters are always flagged
    #[test]
    fn long_password_is_flagged(mut input in valid_form_strategy(), len in 257usize..400) {
        input.password = "x".repeat(len);
        input.confirm_password = input.password.clone();
        prop_assert!(flags(&input, FormField::Password));
    }

    /// A mismatch is reported on confirmPassword, never on password
    #[test]
    fn mismatch_flags_confirm_only(mut input in valid_form_strategy(), suffix in "[a-z]{1,5}") {
        input.confirm_password.push_str(&suffix);
        let result = validate(&input);
        let errors = result.errors().expect("mismatch must be invalid");
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors.message(FormField::ConfirmPassword), Some("Passwords do not match"));
        prop_assert!(!errors.contains(FormField::Password));
    }

    /// An unticked terms box is always flagged
    #[test]
    fn unaccepted_terms_are_flagged(mut input in any_form_strategy()) {
        input.terms_accepted = false;
        prop_assert!(flags(&input, FormField::Terms));
    }

    /// Validation is a pure function of its input
    #[test]
    fn validate_is_idempotent(input in any_form_strategy()) {
        prop_assert_eq!(validate(&input), validate(&input));
    }

    /// Each field carries at most one error
    #[test]
    fn at_most_one_error_per_field(input in any_form_strategy()) {
        if let ValidationResult::Invalid(errors) = validate(&input) {
            let mut fields: Vec<_> = errors.fields().collect();
            let total = fields.len();
            fields.sort();
            fields.dedup();
            prop_assert_eq!(fields.len(), total);
        }
    }
}
