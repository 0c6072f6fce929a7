use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{validate, validate_with, FORM_FIELDS, KOLIDE_WEB_ADDRESS};

use crate::common::{strict, values};

#[test]
fn valid_address_serializes_to_empty_errors() {
    let result = validate(&values(json!({"kolide_web_address": "https://kolide.example.com"})));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"valid": true, "errors": {}})
    );
}

#[test]
fn empty_address_serializes_with_message() {
    let result = validate(&values(json!({"kolide_web_address": ""})));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "valid": false,
            "errors": {"kolide_web_address": "Kolide Web Address must be present"}
        })
    );
}

#[test]
fn absent_key_serializes_with_message() {
    let result = validate(&values(json!({})));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "valid": false,
            "errors": {"kolide_web_address": "Kolide Web Address must be present"}
        })
    );
}

#[test]
fn any_non_blank_string_is_accepted() {
    for input in ["a", "kolide", " x ", "https://kolide.example.com", "http://10.0.0.1:8080"] {
        let result = validate(&values(json!({"kolide_web_address": input})));
        assert!(result.is_valid(), "{input:?} should be valid");
        assert_eq!(result.error(KOLIDE_WEB_ADDRESS), None);
    }
}

#[test]
fn blank_or_non_string_values_are_rejected() {
    for input in [
        json!({"kolide_web_address": ""}),
        json!({"kolide_web_address": "   "}),
        json!({"kolide_web_address": null}),
        json!({"kolide_web_address": 0}),
        json!({"kolide_web_address": {"url": "https://kolide.example.com"}}),
        json!({"other_field": "https://kolide.example.com"}),
    ] {
        let result = validate(&values(input.clone()));
        assert!(!result.is_valid(), "{input} should be invalid");
        let message = result.error(KOLIDE_WEB_ADDRESS).unwrap_or_default();
        assert!(!message.is_empty(), "{input} should carry a message");
    }
}

#[test]
fn valid_flag_matches_error_map() {
    for input in [
        json!({}),
        json!({"kolide_web_address": "x"}),
        json!({"kolide_web_address": false}),
        json!({"kolide_web_address": " "}),
    ] {
        let result = validate(&values(input));
        assert_eq!(result.is_valid(), result.errors().is_empty());
    }
}

#[test]
fn repeated_validation_is_identical() {
    let input = values(json!({"kolide_web_address": "https://kolide.example.com"}));
    let first = validate(&input);
    let second = validate(&input);
    assert_eq!(first, second);
    assert_eq!(validate_with(&input, &strict()), validate_with(&input, &strict()));
}

#[test]
fn strict_mode_rejects_bare_host() {
    let result = validate_with(&values(json!({"kolide_web_address": "kolide.example.com"})), &strict());
    assert_eq!(
        result.error(KOLIDE_WEB_ADDRESS),
        Some("Kolide Web Address must be a valid URL")
    );
    let result = validate_with(
        &values(json!({"kolide_web_address": "https://kolide.example.com"})),
        &strict(),
    );
    assert!(result.is_valid());
}

#[test]
fn field_list_is_exported() {
    assert_eq!(FORM_FIELDS, &[KOLIDE_WEB_ADDRESS]);
}
