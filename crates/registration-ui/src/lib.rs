//! Registration UI Components
//!
//! Dioxus leaf components for the registration form. They are purely
//! presentational: each one renders the value and error it is given and
//! reports input events back to its parent. None of them validates.

pub mod components;

pub use components::*;
