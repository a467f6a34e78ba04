//! Placeholder navigation link with no destination yet.

use dioxus::prelude::*;

#[component]
pub fn InertLink(children: Element) -> Element {
    rsx! {
        div { class: "inert-link-row",
            a { class: "inert-link", role: "link", "aria-disabled": "true", {children} }
        }
    }
}
