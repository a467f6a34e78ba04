//! Checkbox Component
//!
//! A single checkbox with its label on the right, used for the terms
//! acceptance box. Label turns red while an error is shown.

use dioxus::prelude::*;

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    /// DOM id, also used for label association
    pub id: String,
    /// Label text
    pub label: String,
    /// Whether the box is ticked
    pub checked: bool,
    /// Handler called with the toggled state
    pub onchange: EventHandler<bool>,
    /// Error message to show beneath the box
    #[props(default)]
    pub error: Option<String>,
}

/// CSS classes for the checkbox label.
pub fn checkbox_label_class(has_error: bool) -> &'static str {
    if has_error {
        "checkbox-label checkbox-label--invalid"
    } else {
        "checkbox-label"
    }
}

#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let label_class = checkbox_label_class(props.error.is_some());
    let checked = props.checked;

    rsx! {
        div { class: "form-field form-field--checkbox",
            input {
                id: "{props.id}",
                class: "checkbox",
                r#type: "checkbox",
                checked: checked,
                "aria-invalid": props.error.is_some(),
                onchange: move |_| props.onchange.call(!checked),
            }
            label {
                class: "{label_class}",
                r#for: "{props.id}",
                "{props.label}"
            }
            if let Some(error) = &props.error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}
