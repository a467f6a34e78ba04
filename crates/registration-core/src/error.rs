//! Error types for the registration form

use std::fmt;

use thiserror::Error;

use crate::field::FormField;

/// A single violated rule, attached to the field it is displayed next to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {message}", .field.id())]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field error produced by one validation run.
///
/// Holds at most one error per field, in the order the schema checks fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the field already has one.
    ///
    /// Returns `false` when an earlier error for the field was kept.
    pub fn push(&mut self, error: FieldError) -> bool {
        if self.contains(error.field) {
            return false;
        }
        self.errors.push(error);
        true
    }

    /// Drop the error for `field`, returning it if there was one.
    pub fn remove(&mut self, field: FormField) -> Option<FieldError> {
        let idx = self.errors.iter().position(|e| e.field == field)?;
        Some(self.errors.remove(idx))
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Message for `field`, if it failed.
    pub fn message(&self, field: FormField) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = ValidationErrors::new();
        for error in iter {
            errors.push(error);
        }
        errors
    }
}

/// Main error type for registration operations
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using RegistrationError
pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new(FormField::ConfirmPassword, "Passwords do not match");
        assert_eq!(format!("{}", err), "confirmPassword: Passwords do not match");
    }

    #[test]
    fn test_push_keeps_first_error_per_field() {
        let mut errors = ValidationErrors::new();
        assert!(errors.push(FieldError::new(FormField::Email, "Email required")));
        assert!(!errors.push(FieldError::new(FormField::Email, "Invalid email")));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(FormField::Email), Some("Email required"));
    }

    #[test]
    fn test_remove() {
        let mut errors: ValidationErrors = [
            FieldError::new(FormField::FirstName, "First name required"),
            FieldError::new(FormField::Terms, "You must accept the terms and conditions"),
        ]
        .into_iter()
        .collect();

        assert!(errors.remove(FormField::FirstName).is_some());
        assert!(errors.remove(FormField::FirstName).is_none());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FormField::Terms]);
    }

    #[test]
    fn test_errors_display_joins_fields() {
        let errors: ValidationErrors = [
            FieldError::new(FormField::FirstName, "First name required"),
            FieldError::new(FormField::Email, "Invalid email"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            errors.to_string(),
            "firstName: First name required; email: Invalid email"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RegistrationError = json_err.into();
        assert!(matches!(err, RegistrationError::Serialization(_)));
    }
}
