//! Field catalogue for the registration form.
//!
//! Each [`FormField`] carries the presentation metadata a front end needs
//! (DOM id, label, placeholder, input type). The ids are stable so an
//! end-to-end harness can target them.

use serde::{Deserialize, Serialize};

/// One named slot of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
        FormField::Terms,
    ];

    /// Stable DOM id of the rendered control.
    pub fn id(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
            FormField::Terms => "terms",
        }
    }

    pub fn from_id(id: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm Password",
            FormField::Terms => "Accept Terms & Conditions",
        }
    }

    /// Placeholder text; the checkbox has none.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FormField::Terms => None,
            other => Some(other.label()),
        }
    }

    /// HTML input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::FirstName | FormField::LastName => "text",
            FormField::Email => "email",
            FormField::Password | FormField::ConfirmPassword => "password",
            FormField::Terms => "checkbox",
        }
    }

    pub fn autocomplete(&self) -> Option<&'static str> {
        match self {
            FormField::Email => Some("email"),
            FormField::Password | FormField::ConfirmPassword => Some("new-password"),
            _ => None,
        }
    }

    /// Whether the field holds text (everything except the terms checkbox).
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Terms)
    }
}

/// An owned value for one field, as produced by an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn as_field_ref(&self) -> FieldRef<'_> {
        match self {
            FieldValue::Text(s) => FieldRef::Text(s),
            FieldValue::Checked(b) => FieldRef::Checked(*b),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

/// A borrowed view of one field's current value, what rules check against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    Text(&'a str),
    Checked(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        let ids: Vec<_> = FormField::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(
            ids,
            ["firstName", "lastName", "email", "password", "confirmPassword", "terms"]
        );
    }

    #[test]
    fn from_id_roundtrips_every_field() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_id(field.id()), Some(field));
        }
        assert_eq!(FormField::from_id("termsAccepted"), None);
    }

    #[test]
    fn presentation_metadata() {
        assert_eq!(FormField::Email.input_type(), "email");
        assert_eq!(FormField::ConfirmPassword.autocomplete(), Some("new-password"));
        assert_eq!(FormField::FirstName.autocomplete(), None);
        assert_eq!(FormField::LastName.placeholder(), Some("Last Name"));
        assert_eq!(FormField::Terms.placeholder(), None);
        assert!(!FormField::Terms.is_text());
    }

    #[test]
    fn field_value_conversions() {
        assert_eq!(FieldValue::from("x"), FieldValue::Text("x".to_string()));
        assert_eq!(FieldValue::from(true).as_field_ref(), FieldRef::Checked(true));
    }
}
