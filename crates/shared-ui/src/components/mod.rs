pub mod button;
pub mod form;
pub mod input_field;

pub use button::*;
pub use form::*;
pub use input_field::*;
