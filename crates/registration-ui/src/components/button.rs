//! Submit Button Component
//!
//! Full-width slate pill that submits the enclosing form.

use dioxus::prelude::*;

/// Properties for the SubmitButton component
#[derive(Clone, PartialEq, Props)]
pub struct SubmitButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Full class string for the button plus optional extra classes.
pub fn submit_button_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("btn-primary {}", extra),
        _ => "btn-primary".to_string(),
    }
}

/// Submit button for a form; the form's `onsubmit` handles the action.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     form { onsubmit: on_submit,
///         SubmitButton { class: "btn-block".to_string(), "Register Account" }
///     }
/// }
/// ```
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let full_class = submit_button_class(props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "submit",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_button_class_appends_extra() {
        assert_eq!(submit_button_class(None), "btn-primary");
        assert_eq!(submit_button_class(Some("")), "btn-primary");
        assert_eq!(
            submit_button_class(Some("btn-block")),
            "btn-primary btn-block"
        );
    }
}
