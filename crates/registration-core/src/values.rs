//! Raw and validated form values.

use serde::{Deserialize, Serialize};

use crate::error::RegistrationResult;
use crate::field::{FieldRef, FieldValue, FormField};

const REDACTED: &str = "********";

/// Values as the user typed them. Nothing here has been checked.
///
/// Missing keys deserialize to empty strings and an unchecked box, the
/// same state the form starts in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl RawFormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON record, e.g. one captured from a test harness.
    pub fn from_json(json: &str) -> RegistrationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, field: FormField) -> FieldRef<'_> {
        match field {
            FormField::FirstName => FieldRef::Text(&self.first_name),
            FormField::LastName => FieldRef::Text(&self.last_name),
            FormField::Email => FieldRef::Text(&self.email),
            FormField::Password => FieldRef::Text(&self.password),
            FormField::ConfirmPassword => FieldRef::Text(&self.confirm_password),
            FormField::Terms => FieldRef::Checked(self.terms_accepted),
        }
    }

    /// Update a single field.
    ///
    /// Returns `false` and leaves the values untouched when the value kind
    /// does not match the field (text for the checkbox or vice versa).
    pub fn set(&mut self, field: FormField, value: FieldValue) -> bool {
        match (field, value) {
            (FormField::Terms, FieldValue::Checked(checked)) => {
                self.terms_accepted = checked;
                true
            }
            (FormField::Terms, FieldValue::Text(_)) => {
                tracing::warn!(field = field.id(), "ignoring text value for checkbox");
                false
            }
            (_, FieldValue::Checked(_)) => {
                tracing::warn!(field = field.id(), "ignoring checkbox value for text field");
                false
            }
            (FormField::FirstName, FieldValue::Text(text)) => {
                self.first_name = text;
                true
            }
            (FormField::LastName, FieldValue::Text(text)) => {
                self.last_name = text;
                true
            }
            (FormField::Email, FieldValue::Text(text)) => {
                self.email = text;
                true
            }
            (FormField::Password, FieldValue::Text(text)) => {
                self.password = text;
                true
            }
            (FormField::ConfirmPassword, FieldValue::Text(text)) => {
                self.confirm_password = text;
                true
            }
        }
    }
}

/// The validated payload handed to the submit callback.
///
/// Produced by [`crate::schema::Schema::validate`] once every rule passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl FormValues {
    pub(crate) fn from_checked(raw: &RawFormValues) -> Self {
        Self {
            first_name: raw.first_name.clone(),
            last_name: raw.last_name.clone(),
            email: raw.email.clone(),
            password: raw.password.clone(),
            confirm_password: raw.confirm_password.clone(),
            terms_accepted: raw.terms_accepted,
        }
    }

    /// Copy with both password fields masked, safe to log.
    pub fn redacted(&self) -> FormValues {
        FormValues {
            password: REDACTED.to_string(),
            confirm_password: REDACTED.to_string(),
            ..self.clone()
        }
    }
}

impl From<FormValues> for RawFormValues {
    fn from(values: FormValues) -> Self {
        RawFormValues {
            first_name: values.first_name,
            last_name: values.last_name,
            email: values.email,
            password: values.password,
            confirm_password: values.confirm_password,
            terms_accepted: values.terms_accepted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_each_field() {
        let mut raw = RawFormValues::new();
        assert!(raw.set(FormField::Email, "jane@example.com".into()));
        assert!(raw.set(FormField::Terms, true.into()));
        assert_eq!(raw.get(FormField::Email), FieldRef::Text("jane@example.com"));
        assert_eq!(raw.get(FormField::Terms), FieldRef::Checked(true));
    }

    #[test]
    fn set_rejects_mismatched_kind() {
        let mut raw = RawFormValues::new();
        assert!(!raw.set(FormField::Terms, "yes".into()));
        assert!(!raw.set(FormField::Password, true.into()));
        assert_eq!(raw, RawFormValues::default());
    }

    #[test]
    fn from_json_defaults_missing_keys() {
        let raw = RawFormValues::from_json(r#"{"firstName":"Jane","termsAccepted":true}"#).unwrap();
        assert_eq!(raw.first_name, "Jane");
        assert_eq!(raw.last_name, "");
        assert!(raw.terms_accepted);
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        assert!(RawFormValues::from_json(r#"{"termsAccepted":"true"}"#).is_err());
    }

    #[test]
    fn redacted_masks_passwords_only() {
        let values = FormValues {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
            terms_accepted: true,
        };
        let masked = values.redacted();
        assert_eq!(masked.first_name, "Jane");
        assert_ne!(masked.password, values.password);
        assert_ne!(masked.confirm_password, values.confirm_password);

        let json = serde_json::to_string(&masked).unwrap();
        assert!(json.contains("\"termsAccepted\":true"));
        assert!(!json.contains("secret123"));
    }
}
