//! Registration Core Library
//!
//! Validation schema and form state for the account registration form.
//!
//! ## Overview
//!
//! The crate is UI-agnostic. A front end binds its inputs to a
//! [`RegistrationForm`], forwards every edit through
//! [`RegistrationForm::on_field_change`], and calls
//! [`RegistrationForm::submit`] when the user presses the submit button.
//! Only a fully validated [`FormValues`] payload ever leaves the form.
//!
//! ## Quick Start
//!
//! ```
//! use registration_core::{FormField, RegistrationForm, SubmitOutcome};
//!
//! let mut form = RegistrationForm::default();
//! form.on_field_change(FormField::FirstName, "Jane");
//! form.on_field_change(FormField::LastName, "Doe");
//! form.on_field_change(FormField::Email, "jane@example.com");
//! form.on_field_change(FormField::Password, "secret123");
//! form.on_field_change(FormField::ConfirmPassword, "secret123");
//! form.on_field_change(FormField::Terms, true);
//!
//! match form.submit() {
//!     SubmitOutcome::Accepted(values) => assert_eq!(values.email, "jane@example.com"),
//!     SubmitOutcome::Rejected(errors) => panic!("unexpected errors: {errors}"),
//! }
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod rules;
pub mod schema;
pub mod values;

// Re-exports
pub use error::{FieldError, RegistrationError, RegistrationResult, ValidationErrors};
pub use field::{FieldRef, FieldValue, FormField};
pub use form::{ErrorClearing, FormConfig, FormPhase, RegistrationForm, SubmitOutcome};
pub use rules::{is_email, text_len, Check, Refinement, Rule};
pub use schema::{registration_schema, validate, Schema, SchemaBuilder, ValidationResult};
pub use values::{FormValues, RawFormValues};
