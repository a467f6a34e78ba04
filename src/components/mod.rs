//! UI Components for the registration app.

mod registration_form;

pub use registration_form::RegistrationFormView;
