use dioxus::prelude::*;

use crate::context::get_form_config;
use crate::pages::Register;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Registration card
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Register {},
}

/// Root application component.
///
/// Provides global styles, form configuration and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_form_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
