//! Text Input Component
//!
//! Labeled text input bound to an external value and change handler.
//! Features:
//! - Label associated with the input through its id
//! - Error message rendered beneath the input when present
//! - Red border (`input-field--invalid`) while an error is shown

use dioxus::prelude::*;

/// Properties for the TextInput component
#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    /// DOM id, also used for label association
    pub id: String,
    /// Label text shown above the input
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Error message to show beneath the input
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, password)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Browser autocomplete hint
    #[props(default)]
    pub autocomplete: Option<String>,
}

/// CSS classes for the input element.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-field--invalid"
    } else {
        "input-field"
    }
}

/// Labeled text input with an optional error line
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     TextInput {
///         id: "email".to_string(),
///         label: "Email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         input_type: "email".to_string(),
///         error: Some("Invalid email".to_string()),
///     }
/// }
/// ```
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let class = input_class(props.error.is_some());

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: props.autocomplete.as_deref().unwrap_or("off"),
                "aria-invalid": props.error.is_some(),
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}
