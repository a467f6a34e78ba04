//! Form state for the registration form.
//!
//! [`RegistrationForm`] is an explicit, exclusively owned state object. The
//! front end holds one instance, passes the current value and error of each
//! field down to its inputs, and routes input events back through
//! [`RegistrationForm::on_field_change`].
//!
//! ## Lifecycle
//!
//! ```text
//! Pristine -> Editing -> Submitting -> SubmittedSuccess
//!                ^              \
//!                |               -> SubmittedInvalid
//!                +---- next edit ------------+
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::field::{FieldRef, FieldValue, FormField};
use crate::schema::{registration_schema, Schema, ValidationResult};
use crate::values::{FormValues, RawFormValues};

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Nothing edited since mount or reset.
    #[default]
    Pristine,
    Editing,
    /// Validation in progress. Only observable from inside `submit`.
    Submitting,
    SubmittedSuccess,
    SubmittedInvalid,
}

impl FormPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormPhase::Pristine => "pristine",
            FormPhase::Editing => "editing",
            FormPhase::Submitting => "submitting",
            FormPhase::SubmittedSuccess => "submitted-success",
            FormPhase::SubmittedInvalid => "submitted-invalid",
        }
    }
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a displayed field error goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorClearing {
    /// Errors stay until the next full submit.
    #[default]
    OnSubmit,
    /// Editing a field clears that field's error.
    OnEdit,
    /// After the first submit, every edit reruns the schema and refreshes
    /// the edited field's error. Other fields keep what they show.
    Revalidate,
}

impl ErrorClearing {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClearing::OnSubmit => "on-submit",
            ErrorClearing::OnEdit => "on-edit",
            ErrorClearing::Revalidate => "revalidate",
        }
    }
}

/// Behavioural settings for a [`RegistrationForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub error_clearing: ErrorClearing,
}

/// Result of [`RegistrationForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed. Carries the payload for the submit callback.
    Accepted(FormValues),
    /// At least one rule failed. The errors are also stored on the form.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Values, errors and lifecycle of one registration form instance.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    schema: &'static Schema,
    config: FormConfig,
    values: RawFormValues,
    errors: ValidationErrors,
    dirty: BTreeSet<FormField>,
    phase: FormPhase,
    submit_count: u32,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl PartialEq for RegistrationForm {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema)
            && self.config == other.config
            && self.values == other.values
            && self.errors == other.errors
            && self.dirty == other.dirty
            && self.phase == other.phase
            && self.submit_count == other.submit_count
    }
}

impl RegistrationForm {
    /// Empty form bound to the registration schema.
    pub fn new(config: FormConfig) -> Self {
        Self::with_schema(registration_schema(), config)
    }

    pub fn with_schema(schema: &'static Schema, config: FormConfig) -> Self {
        Self {
            schema,
            config,
            values: RawFormValues::default(),
            errors: ValidationErrors::new(),
            dirty: BTreeSet::new(),
            phase: FormPhase::Pristine,
            submit_count: 0,
        }
    }

    pub fn config(&self) -> FormConfig {
        self.config
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn values(&self) -> &RawFormValues {
        &self.values
    }

    pub fn value(&self, field: FormField) -> FieldRef<'_> {
        self.values.get(field)
    }

    /// Current text of a text field; empty for the checkbox.
    pub fn text(&self, field: FormField) -> &str {
        match self.values.get(field) {
            FieldRef::Text(s) => s,
            FieldRef::Checked(_) => "",
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Message to display next to `field`, if any.
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.message(field)
    }

    pub fn is_dirty(&self, field: FormField) -> bool {
        self.dirty.contains(&field)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Apply one input event.
    ///
    /// Values of the wrong kind for `field` are ignored.
    pub fn on_field_change(&mut self, field: FormField, value: impl Into<FieldValue>) {
        if !self.values.set(field, value.into()) {
            return;
        }
        self.dirty.insert(field);

        if self.phase != FormPhase::Editing {
            tracing::debug!(from = %self.phase, field = field.id(), "form editing");
            self.phase = FormPhase::Editing;
        }

        match self.config.error_clearing {
            ErrorClearing::OnSubmit => {}
            ErrorClearing::OnEdit => {
                if self.errors.remove(field).is_some() {
                    tracing::debug!(field = field.id(), "cleared field error on edit");
                }
            }
            ErrorClearing::Revalidate => {
                if self.submit_count > 0 {
                    self.revalidate_field(field);
                }
            }
        }
    }

    fn revalidate_field(&mut self, field: FormField) {
        let fresh = match self.schema.validate(&self.values) {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => errors.get(field).cloned(),
        };
        self.errors.remove(field);
        if let Some(error) = fresh {
            self.errors.push(error);
        }
    }

    /// Validate the current values once.
    ///
    /// On success the errors are cleared, the values reset to empty and the
    /// payload returned. On failure the error set replaces the previous one
    /// and the values are kept for the user to fix.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.phase = FormPhase::Submitting;
        self.submit_count += 1;

        match self.schema.validate(&self.values) {
            ValidationResult::Valid(values) => {
                self.errors.clear();
                self.values = RawFormValues::default();
                self.dirty.clear();
                self.phase = FormPhase::SubmittedSuccess;
                tracing::debug!(attempt = self.submit_count, "form submitted");
                SubmitOutcome::Accepted(values)
            }
            ValidationResult::Invalid(errors) => {
                self.errors = errors.clone();
                self.phase = FormPhase::SubmittedInvalid;
                tracing::debug!(
                    attempt = self.submit_count,
                    failed = errors.len(),
                    "form submission rejected"
                );
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// [`submit`](Self::submit), handing an accepted payload to `on_valid`.
    ///
    /// `on_valid` runs exactly once on success and never on failure.
    pub fn submit_with<F>(&mut self, on_valid: F) -> bool
    where
        F: FnOnce(FormValues),
    {
        match self.submit() {
            SubmitOutcome::Accepted(values) => {
                on_valid(values);
                true
            }
            SubmitOutcome::Rejected(_) => false,
        }
    }

    /// Back to the freshly mounted state, keeping schema and config.
    pub fn reset(&mut self) {
        *self = Self::with_schema(self.schema, self.config);
    }
}
