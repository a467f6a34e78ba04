//! Declarative validation schema.
//!
//! A [`Schema`] is an ordered list of per-field rule lists plus any number of
//! cross-field [`Refinement`]s. Validation is a pure function of its input:
//! every outcome is data, nothing is thrown.
//!
//! ## Evaluation order
//!
//! 1. Each field's rules run in declaration order; the first failing rule
//!    produces that field's only error.
//! 2. Every refinement then runs, even when per-field rules already failed.
//!    A refinement error is kept only if its target field has no error yet.

use std::sync::LazyLock;

use crate::error::{FieldError, ValidationErrors};
use crate::field::FormField;
use crate::rules::{Refinement, Rule};
use crate::values::{FormValues, RawFormValues};

/// Maximum length of either name field.
pub const NAME_MAX_CHARS: usize = 50;
/// Minimum password length.
pub const PASSWORD_MIN_CHARS: usize = 8;
/// Maximum password length.
pub const PASSWORD_MAX_CHARS: usize = 256;

static REGISTRATION_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder()
        .field(
            FormField::FirstName,
            [
                Rule::min_chars(1, "First name required"),
                Rule::max_chars(NAME_MAX_CHARS, "First name should be less than 50 characters"),
            ],
        )
        .field(
            FormField::LastName,
            [
                Rule::min_chars(1, "Last name required"),
                Rule::max_chars(NAME_MAX_CHARS, "Last name should be less than 50 characters"),
            ],
        )
        .field(
            FormField::Email,
            [Rule::min_chars(1, "Email required"), Rule::email("Invalid email")],
        )
        .field(
            FormField::Password,
            [
                Rule::min_chars(PASSWORD_MIN_CHARS, "Password must be at least 8 characters"),
                Rule::max_chars(PASSWORD_MAX_CHARS, "Password must be less than 256 characters"),
            ],
        )
        .field(
            FormField::Terms,
            [Rule::accepted("You must accept the terms and conditions")],
        )
        .refine(Refinement::passwords_match("Passwords do not match"))
        .build()
});

/// The schema used by the registration form.
pub fn registration_schema() -> &'static Schema {
    &REGISTRATION_SCHEMA
}

/// Validate `input` against the registration schema.
pub fn validate(input: &RawFormValues) -> ValidationResult {
    registration_schema().validate(input)
}

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(FormValues),
    Invalid(ValidationErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The errors of an invalid result, `None` when valid.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<FormValues, ValidationErrors> {
        match self {
            ValidationResult::Valid(values) => Ok(values),
            ValidationResult::Invalid(errors) => Err(errors),
        }
    }
}

#[derive(Debug, Clone)]
struct FieldRules {
    field: FormField,
    rules: Vec<Rule>,
}

/// A set of per-field rules and cross-field refinements.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
    refinements: Vec<Refinement>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Rules declared for `field`, empty if the field has none.
    pub fn rules(&self, field: FormField) -> &[Rule] {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn refinements(&self) -> &[Refinement] {
        &self.refinements
    }

    /// Run every rule against `input`.
    pub fn validate(&self, input: &RawFormValues) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        for FieldRules { field, rules } in &self.fields {
            let value = input.get(*field);
            if let Some(rule) = rules.iter().find(|rule| !rule.passes(value)) {
                errors.push(FieldError::new(*field, rule.message()));
            }
        }

        for refinement in &self.refinements {
            if !refinement.passes(input) {
                errors.push(FieldError::new(refinement.target(), refinement.message()));
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid(FormValues::from_checked(input))
        } else {
            tracing::debug!(
                failed = errors.len(),
                fields = ?errors.fields().map(|f| f.id()).collect::<Vec<_>>(),
                "validation failed"
            );
            ValidationResult::Invalid(errors)
        }
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Append rules for `field`. Declaring a field twice extends its list.
    pub fn field(mut self, field: FormField, rules: impl IntoIterator<Item = Rule>) -> Self {
        match self.schema.fields.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.rules.extend(rules),
            None => self.schema.fields.push(FieldRules {
                field,
                rules: rules.into_iter().collect(),
            }),
        }
        self
    }

    pub fn refine(mut self, refinement: Refinement) -> Self {
        self.schema.refinements.push(refinement);
        self
    }

    pub fn build(self) -> Schema {
        self.schema
    }
}
