//! Generic form state: field values, validation results, and the container
//! that ties them to a submit callback.
//!
//! A form is described by a [`FormSchema`] (its fixed field names, a pure
//! validation function, and the typed payload it produces). [`FormContainer`]
//! owns the values for one schema, re-validates after every change, and only
//! forwards to the submit callback when the values pass validation.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// Current values of a form, keyed by field name.
///
/// Values stay untyped so that data restored from JSON keeps whatever shape
/// it arrived in. Only string values are treated as present by validators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, Value>);

impl FieldValues {
    /// Parse values from a JSON object. Anything other than an object is a
    /// bad request.
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(AppError::bad_request(format!(
                "Form values must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// The value under `name` if, and only if, it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Validation result
// ---------------------------------------------------------------------------

/// Outcome of validating a set of field values.
///
/// `valid` is derived from `errors` at construction, so a result is valid
/// exactly when no field carries a non-empty message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    /// A result with no errors.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Build a result from per-field messages. Empty messages are dropped.
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        let errors: BTreeMap<String, String> = errors
            .into_iter()
            .filter(|(_, msg)| !msg.trim().is_empty())
            .collect();
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Error message for `field`, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl From<validator::ValidationErrors> for ValidationResult {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::from_errors(crate::error::first_messages(&errors))
    }
}

/// Knobs that tighten validation beyond the required-field rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Require URL-typed fields to hold an absolute `http`/`https` URL.
    #[serde(default)]
    pub require_url: bool,
}

// ---------------------------------------------------------------------------
// Schema and container
// ---------------------------------------------------------------------------

/// Static description of a form: its field names, validation, and payload.
pub trait FormSchema {
    /// Field names tracked by the container, in display order.
    const FIELDS: &'static [&'static str];

    /// Typed payload handed to the submit callback.
    type Output: Clone + fmt::Debug;

    /// Pure validation of the current values.
    fn validate(values: &FieldValues, options: &ValidationOptions) -> ValidationResult;

    /// Build the payload. Only called after `validate` passed.
    fn output(values: &FieldValues) -> Self::Output;
}

/// Per-field view model handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    /// Current value; empty when the stored value is missing or not a string.
    pub value: String,
    /// Error to display. Hidden until the field is edited or a submit is
    /// attempted.
    pub error: Option<String>,
}

/// Owns the values of one form, re-validating on every change and gating
/// submission on a valid result.
pub struct FormContainer<S: FormSchema> {
    initial: FieldValues,
    values: FieldValues,
    touched: BTreeSet<String>,
    submit_attempted: bool,
    options: ValidationOptions,
    result: ValidationResult,
    _schema: PhantomData<fn() -> S>,
}

impl<S: FormSchema> FormContainer<S> {
    /// Start with every declared field set to an empty string.
    pub fn new(options: ValidationOptions) -> Self {
        let values = S::FIELDS.iter().map(|name| (*name, "")).collect();
        Self::with_values(values, options)
    }

    /// Start from existing values. Keys the schema does not declare are
    /// dropped; declared keys that are missing stay missing.
    pub fn with_values(values: FieldValues, options: ValidationOptions) -> Self {
        let values: FieldValues = values
            .0
            .into_iter()
            .filter(|(name, _)| S::FIELDS.contains(&name.as_str()))
            .collect();
        let result = S::validate(&values, &options);
        Self {
            initial: values.clone(),
            values,
            touched: BTreeSet::new(),
            submit_attempted: false,
            options,
            result,
            _schema: PhantomData,
        }
    }

    /// Store a new value for `name` and re-validate.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), AppError> {
        if !S::FIELDS.contains(&name) {
            return Err(AppError::bad_request(format!("Unknown field: {name}")));
        }
        let value: String = value.into();
        self.values.set(name, value);
        self.touched.insert(name.to_string());
        self.revalidate();
        Ok(())
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn can_submit(&self) -> bool {
        self.result.is_valid()
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// View model for a declared field.
    pub fn field(&self, name: &str) -> Option<FormField> {
        S::FIELDS
            .iter()
            .find(|declared| **declared == name)
            .map(|declared| self.build_field(declared))
    }

    /// View models for every declared field, in schema order.
    pub fn fields(&self) -> Vec<FormField> {
        S::FIELDS.iter().map(|name| self.build_field(name)).collect()
    }

    /// Re-validate and, if the values pass, call `on_submit` with the payload.
    ///
    /// A failed submit returns a validation error carrying the per-field
    /// messages and leaves the callback uncalled.
    pub fn submit<F>(&mut self, on_submit: F) -> Result<S::Output, AppError>
    where
        F: FnOnce(&S::Output),
    {
        self.submit_attempted = true;
        self.revalidate();
        if !self.result.is_valid() {
            return Err(AppError::validation(
                "Validation failed",
                self.result.errors().clone(),
            ));
        }
        let output = S::output(&self.values);
        on_submit(&output);
        Ok(output)
    }

    /// Return to the values the container was created with.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.submit_attempted = false;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.result = S::validate(&self.values, &self.options);
    }

    fn build_field(&self, name: &str) -> FormField {
        let show_error = self.submit_attempted || self.touched.contains(name);
        FormField {
            name: name.to_string(),
            value: self.values.get_str(name).unwrap_or_default().to_string(),
            error: show_error
                .then(|| self.result.error(name).map(str::to_string))
                .flatten(),
        }
    }
}

impl<S: FormSchema> Clone for FormContainer<S> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            values: self.values.clone(),
            touched: self.touched.clone(),
            submit_attempted: self.submit_attempted,
            options: self.options,
            result: self.result.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: FormSchema> fmt::Debug for FormContainer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormContainer")
            .field("fields", &S::FIELDS)
            .field("values", &self.values)
            .field("touched", &self.touched)
            .field("submit_attempted", &self.submit_attempted)
            .field("options", &self.options)
            .field("result", &self.result)
            .finish()
    }
}
