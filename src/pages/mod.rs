//! Page components for the registration app.

mod register;

pub use register::Register;
