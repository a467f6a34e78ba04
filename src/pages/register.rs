//! Register page - centered registration card.

use dioxus::prelude::*;
use registration_core::FormValues;

use crate::components::RegistrationFormView;

/// Stand-in for the network submission: logs the payload with passwords masked.
fn log_submission(values: &FormValues) {
    match serde_json::to_string(&values.redacted()) {
        Ok(json) => tracing::info!("Registration submitted: {}", json),
        Err(e) => tracing::error!("Failed to serialize registration: {}", e),
    }
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let on_valid_submit = move |values: FormValues| log_submission(&values);

    rsx! {
        main { class: "register-page",
            div { class: "register-container",
                RegistrationFormView { on_valid_submit: on_valid_submit }
            }
        }
    }
}
