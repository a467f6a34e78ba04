//! Registration Form - account sign-up card
//!
//! Owns a single `RegistrationForm` state object. Each input gets its current
//! value and error as props and reports edits back; the submit button runs
//! validation once and forwards a valid payload to `on_valid_submit`.

use dioxus::prelude::*;
use registration_core::{FormField, FormValues, RegistrationForm, SubmitOutcome};
use registration_ui::{Checkbox, InertLink, SubmitButton, TextInput};

use crate::context::use_form_config;

/// Props for RegistrationFormView component
#[derive(Props, Clone, PartialEq)]
pub struct RegistrationFormViewProps {
    /// Handler for a submission that passed every rule
    pub on_valid_submit: EventHandler<FormValues>,
}

/// One text input bound to a field of the form.
#[component]
fn FormTextField(form: Signal<RegistrationForm>, field: FormField) -> Element {
    let mut form = form;
    let (value, error) = {
        let state = form.read();
        (
            state.text(field).to_string(),
            state.error(field).map(str::to_string),
        )
    };

    rsx! {
        TextInput {
            id: field.id().to_string(),
            label: field.label().to_string(),
            value,
            error,
            input_type: field.input_type().to_string(),
            placeholder: field.placeholder().map(str::to_string),
            autocomplete: field.autocomplete().map(str::to_string),
            oninput: move |value: String| form.write().on_field_change(field, value),
        }
    }
}

/// Registration form component
///
/// Fields:
/// - First / last name (side by side)
/// - Email
/// - Password / confirm password (side by side)
/// - Terms acceptance checkbox
#[component]
pub fn RegistrationFormView(props: RegistrationFormViewProps) -> Element {
    let config = use_form_config();
    let mut form = use_signal(|| RegistrationForm::new(config));

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let outcome = form.write().submit();
        match outcome {
            SubmitOutcome::Accepted(values) => props.on_valid_submit.call(values),
            SubmitOutcome::Rejected(errors) => {
                tracing::debug!("Registration rejected: {}", errors);
            }
        }
    };

    let terms_checked = form.read().values().terms_accepted;
    let terms_error = form.read().error(FormField::Terms).map(str::to_string);

    rsx! {
        div { class: "registration-card",
            h3 { class: "registration-title", "Registration" }

            form {
                class: "registration-form",
                "novalidate": true,
                onsubmit: on_submit,

                div { class: "form-row",
                    div { class: "form-col",
                        FormTextField { form: form, field: FormField::FirstName }
                    }
                    div { class: "form-col",
                        FormTextField { form: form, field: FormField::LastName }
                    }
                }

                FormTextField { form: form, field: FormField::Email }

                div { class: "form-row",
                    div { class: "form-col",
                        FormTextField { form: form, field: FormField::Password }
                    }
                    div { class: "form-col",
                        FormTextField { form: form, field: FormField::ConfirmPassword }
                    }
                }

                Checkbox {
                    id: FormField::Terms.id().to_string(),
                    label: FormField::Terms.label().to_string(),
                    checked: terms_checked,
                    error: terms_error,
                    onchange: move |checked: bool| {
                        form.write().on_field_change(FormField::Terms, checked)
                    },
                }

                div { class: "form-actions",
                    SubmitButton { class: "btn-block".to_string(), "Register Account" }
                }

                hr { class: "form-divider" }

                InertLink { "Forgot your password?" }
                InertLink { "Already have an account? Login here" }
            }
        }
    }
}
