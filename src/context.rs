//! Form configuration context.
//!
//! The App provides the [`FormConfig`] parsed from the command line to all
//! components via `use_context`. Form values and errors are not shared this
//! way; each form view owns its own state.

use dioxus::prelude::*;
use registration_core::FormConfig;

/// Get the form configuration set from command line args.
pub fn get_form_config() -> FormConfig {
    crate::get_form_config()
}

/// Hook to access the form configuration from context.
pub fn use_form_config() -> FormConfig {
    use_context::<FormConfig>()
}
