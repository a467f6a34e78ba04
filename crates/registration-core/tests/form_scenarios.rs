//! End-to-end scenarios for the registration form
//!
//! Drives a `RegistrationForm` the way the desktop view does: field edits
//! followed by a submit that hands the payload to a callback.

use registration_core::{
    ErrorClearing, FormConfig, FormField, FormPhase, FormValues, RawFormValues, RegistrationForm,
};

// ============================================================================
// Helpers
// ============================================================================

fn fill(form: &mut RegistrationForm, values: &RawFormValues) {
    form.on_field_change(FormField::FirstName, values.first_name.as_str());
    form.on_field_change(FormField::LastName, values.last_name.as_str());
    form.on_field_change(FormField::Email, values.email.as_str());
    form.on_field_change(FormField::Password, values.password.as_str());
    form.on_field_change(FormField::ConfirmPassword, values.confirm_password.as_str());
    form.on_field_change(FormField::Terms, values.terms_accepted);
}

fn jane() -> RawFormValues {
    RawFormValues::from_json(
        r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "password": "secret123",
            "confirmPassword": "secret123",
            "termsAccepted": true
        }"#,
    )
    .unwrap()
}

/// Submit and collect every payload the callback receives.
fn submit_collect(form: &mut RegistrationForm) -> Vec<FormValues> {
    let mut received = Vec::new();
    form.submit_with(|values| received.push(values));
    received
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_valid_registration_invokes_callback_with_input() {
    let mut form = RegistrationForm::default();
    fill(&mut form, &jane());

    let received = submit_collect(&mut form);

    assert_eq!(received.len(), 1);
    assert_eq!(RawFormValues::from(received[0].clone()), jane());
    assert_eq!(form.phase(), FormPhase::SubmittedSuccess);
}

#[test]
fn test_mismatched_confirmation_blocks_callback() {
    let mut form = RegistrationForm::default();
    let mut input = jane();
    input.confirm_password = "secret124".to_string();
    fill(&mut form, &input);

    let received = submit_collect(&mut form);

    assert!(received.is_empty());
    assert_eq!(form.errors().len(), 1);
    assert_eq!(
        form.error(FormField::ConfirmPassword),
        Some("Passwords do not match")
    );
    assert!(form.error(FormField::Password).is_none());
}

#[test]
fn test_invalid_email_flags_only_email() {
    let mut form = RegistrationForm::default();
    let mut input = jane();
    input.email = "not-an-email".to_string();
    fill(&mut form, &input);

    let received = submit_collect(&mut form);

    assert!(received.is_empty());
    for field in FormField::ALL {
        if field == FormField::Email {
            assert_eq!(form.error(field), Some("Invalid email"));
        } else {
            assert!(form.error(field).is_none(), "{} should be clean", field.id());
        }
    }
}

#[test]
fn test_fix_and_resubmit() {
    let mut form = RegistrationForm::default();
    let mut input = jane();
    input.terms_accepted = false;
    fill(&mut form, &input);

    assert!(submit_collect(&mut form).is_empty());
    assert_eq!(form.phase(), FormPhase::SubmittedInvalid);

    form.on_field_change(FormField::Terms, true);
    assert_eq!(form.phase(), FormPhase::Editing);
    // Default policy keeps the stale error until the next submit.
    assert!(form.error(FormField::Terms).is_some());

    let received = submit_collect(&mut form);
    assert_eq!(received.len(), 1);
    assert!(form.errors().is_empty());
}

#[test]
fn test_each_submit_replaces_error_set() {
    let mut form = RegistrationForm::default();
    form.submit();
    assert_eq!(form.errors().len(), 5);

    let mut input = jane();
    input.last_name = String::new();
    fill(&mut form, &input);
    form.submit();

    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(FormField::LastName), Some("Last name required"));
    assert_eq!(form.submit_count(), 2);
}

#[test]
fn test_revalidate_policy_tracks_edits() {
    let mut form = RegistrationForm::new(FormConfig {
        error_clearing: ErrorClearing::Revalidate,
    });
    let mut input = jane();
    input.password = "short".to_string();
    input.confirm_password = "short".to_string();
    fill(&mut form, &input);
    form.submit();
    assert!(form.error(FormField::Password).is_some());

    // Only the edited field is refreshed; confirmPassword was not touched.
    form.on_field_change(FormField::Password, "secret123");
    assert!(form.error(FormField::Password).is_none());
    assert!(form.error(FormField::ConfirmPassword).is_none());

    form.on_field_change(FormField::ConfirmPassword, "secret12");
    assert_eq!(
        form.error(FormField::ConfirmPassword),
        Some("Passwords do not match")
    );

    form.on_field_change(FormField::ConfirmPassword, "secret123");
    assert!(form.errors().is_empty());
    assert_eq!(submit_collect(&mut form).len(), 1);
}
