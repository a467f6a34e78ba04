//! Reusable form components.

mod button;
mod checkbox;
mod input;
mod link;

pub use button::*;
pub use checkbox::*;
pub use input::*;
pub use link::*;
