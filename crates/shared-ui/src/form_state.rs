use dioxus::prelude::*;
use shared_types::{AppError, FormContainer, FormSchema, ValidationOptions, ValidationResult};

/// A form field bundled with the handler that writes back into its form.
#[derive(Clone, PartialEq)]
pub struct BoundField {
    pub name: String,
    pub value: String,
    /// Message to show inline; empty when the field is valid or not yet
    /// edited.
    pub error: String,
    pub on_input: EventHandler<String>,
}

/// Signal-backed handle to a [`FormContainer`].
///
/// Copyable like any other signal handle; every copy refers to the same
/// container.
pub struct UseForm<S: FormSchema + 'static> {
    container: Signal<FormContainer<S>>,
}

impl<S: FormSchema + 'static> Clone for UseForm<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: FormSchema + 'static> Copy for UseForm<S> {}

impl<S: FormSchema + 'static> PartialEq for UseForm<S> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

/// Create a form container for schema `S` scoped to the calling component.
///
/// `options` is read on the first render only.
pub fn use_form<S: FormSchema + 'static>(options: ValidationOptions) -> UseForm<S> {
    let container = use_signal(|| FormContainer::<S>::new(options));
    UseForm { container }
}

impl<S: FormSchema + 'static> UseForm<S> {
    /// Every declared field with its value, visible error, and input handler.
    pub fn fields(&self) -> Vec<BoundField> {
        self.container
            .read()
            .fields()
            .into_iter()
            .map(|field| {
                let mut form = *self;
                let name = field.name.clone();
                BoundField {
                    name: field.name,
                    value: field.value,
                    error: field.error.unwrap_or_default(),
                    on_input: EventHandler::new(move |value: String| form.set_value(&name, value)),
                }
            })
            .collect()
    }

    /// Store `value` for `name`. Writes to undeclared fields are logged and
    /// dropped.
    pub fn set_value(&mut self, name: &str, value: String) {
        if let Err(e) = self.container.write().set_value(name, value) {
            tracing::warn!(field = name, error = %e, "Ignoring input for undeclared form field");
        }
    }

    pub fn result(&self) -> ValidationResult {
        self.container.read().result().clone()
    }

    pub fn can_submit(&self) -> bool {
        self.container.read().can_submit()
    }

    /// Re-validate and forward the payload to `on_submit` when valid.
    pub fn submit<F>(&mut self, on_submit: F) -> Result<S::Output, AppError>
    where
        F: FnOnce(&S::Output),
    {
        let outcome = self.container.write().submit(on_submit);
        match &outcome {
            Ok(_) => tracing::debug!(fields = ?S::FIELDS, "Form submitted"),
            Err(e) => tracing::debug!(
                fields = ?e.field_errors.keys().collect::<Vec<_>>(),
                "Form submission blocked by validation"
            ),
        }
        outcome
    }

    pub fn reset(&mut self) {
        self.container.write().reset();
    }
}
