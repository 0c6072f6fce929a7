use crate::form::{FieldValues, FormSchema, ValidationOptions, ValidationResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Field name for the Kolide web address.
pub const KOLIDE_WEB_ADDRESS: &str = "kolide_web_address";

/// Fields tracked by the Kolide details registration step.
pub const FORM_FIELDS: &[&str] = &[KOLIDE_WEB_ADDRESS];

/// Reported when the web address is missing, blank, or not a string.
pub const WEB_ADDRESS_REQUIRED: &str = "Kolide Web Address must be present";
/// Reported when `require_url` is set and the address is not an http(s) URL.
pub const WEB_ADDRESS_INVALID_URL: &str = "Kolide Web Address must be a valid URL";

/// Payload submitted by the Kolide details step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct KolideDetailsRequest {
    #[validate(length(min = 1, message = "Kolide Web Address must be present"))]
    pub kolide_web_address: String,
}

impl KolideDetailsRequest {
    /// Read the request out of raw form values. Missing and non-string
    /// values become an empty address; surrounding whitespace is trimmed.
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            kolide_web_address: values
                .get_str(KOLIDE_WEB_ADDRESS)
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Stricter shape check applied only when [`ValidationOptions::require_url`]
/// is set.
#[derive(Debug, Validate)]
struct WebAddressUrl {
    #[validate(url(message = "Kolide Web Address must be a valid URL"))]
    kolide_web_address: String,
}

fn has_http_scheme(address: &str) -> bool {
    let lower = address.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Validate the Kolide details step with default options (presence only).
pub fn validate(values: &FieldValues) -> ValidationResult {
    validate_with(values, &ValidationOptions::default())
}

/// Validate the Kolide details step.
///
/// The address is required; a missing, empty, whitespace-only or non-string
/// value is reported under [`KOLIDE_WEB_ADDRESS`]. With `require_url` set, a
/// present address must also be an absolute `http`/`https` URL.
pub fn validate_with(values: &FieldValues, options: &ValidationOptions) -> ValidationResult {
    let request = KolideDetailsRequest::from_values(values);
    if let Err(errors) = request.validate() {
        return ValidationResult::from(errors);
    }

    if options.require_url {
        let shape = WebAddressUrl {
            kolide_web_address: request.kolide_web_address,
        };
        if let Err(errors) = shape.validate() {
            return ValidationResult::from(errors);
        }
        if !has_http_scheme(&shape.kolide_web_address) {
            return ValidationResult::from_errors(
                [(KOLIDE_WEB_ADDRESS.to_string(), WEB_ADDRESS_INVALID_URL.to_string())]
                    .into_iter()
                    .collect(),
            );
        }
    }

    ValidationResult::ok()
}

/// Form schema for the Kolide details registration step.
pub struct KolideDetailsForm;

impl FormSchema for KolideDetailsForm {
    const FIELDS: &'static [&'static str] = FORM_FIELDS;
    type Output = KolideDetailsRequest;

    fn validate(values: &FieldValues, options: &ValidationOptions) -> ValidationResult {
        validate_with(values, options)
    }

    fn output(values: &FieldValues) -> Self::Output {
        KolideDetailsRequest::from_values(values)
    }
}
