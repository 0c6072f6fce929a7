pub mod components;
pub mod form_state;

pub use components::*;
pub use form_state::*;
