pub mod config;
pub mod error;
pub mod form;

// Registration steps
pub mod registration;

pub use config::*;
pub use error::*;
pub use form::*;
pub use registration::{
    validate, validate_with, KolideDetailsForm, KolideDetailsRequest, FORM_FIELDS,
    KOLIDE_WEB_ADDRESS,
};
