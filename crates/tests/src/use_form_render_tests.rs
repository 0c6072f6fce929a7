use dioxus::prelude::*;
use shared_types::{KolideDetailsForm, ValidationOptions, KOLIDE_WEB_ADDRESS};
use shared_ui::{use_form, InputFieldWithIcon};

use crate::common::render;

/// Renders every bound field of the Kolide details form, optionally typing
/// `prefill` and pressing submit on the first render.
#[component]
fn BoundFields(#[props(default)] prefill: String, submit: bool) -> Element {
    let mut form = use_form::<KolideDetailsForm>(ValidationOptions::default());
    let blocked = use_hook(move || {
        if !prefill.is_empty() {
            form.set_value(KOLIDE_WEB_ADDRESS, prefill);
        }
        submit && form.submit(|_| {}).is_err()
    });

    rsx! {
        for field in form.fields() {
            InputFieldWithIcon {
                key: "{field.name}",
                name: field.name,
                value: field.value,
                error: field.error,
                on_input: field.on_input,
                icon: rsx! {},
            }
        }
        if blocked {
            p { class: "blocked", "blocked" }
        }
    }
}

#[test]
fn untouched_form_renders_without_error() {
    let html = render(|| rsx! { BoundFields { submit: false } });
    assert!(html.contains(r#"name="kolide_web_address""#), "{html}");
    assert!(!html.contains("must be present"), "{html}");
    assert!(!html.contains("blocked"), "{html}");
}

#[test]
fn blank_input_renders_inline_error() {
    let html = render(|| rsx! { BoundFields { prefill: "   ", submit: false } });
    assert!(html.contains("Kolide Web Address must be present"), "{html}");
}

#[test]
fn submit_on_empty_form_is_blocked_and_error_shown() {
    let html = render(|| rsx! { BoundFields { submit: true } });
    assert!(html.contains("blocked"), "{html}");
    assert!(html.contains("Kolide Web Address must be present"), "{html}");
}

#[test]
fn filled_form_submits_and_renders_value() {
    let html = render(|| {
        rsx! { BoundFields { prefill: "https://kolide.example.com", submit: true } }
    });
    assert!(html.contains(r#"value="https://kolide.example.com""#), "{html}");
    assert!(!html.contains("blocked"), "{html}");
    assert!(!html.contains("input-error"), "{html}");
}

/// Types `typed` through the first bound field's input handler on the first
/// render, optionally resets, and renders the hook's verdict next to the
/// fields.
#[component]
fn TypedFields(typed: String, #[props(default)] then_reset: bool) -> Element {
    let mut form = use_form::<KolideDetailsForm>(ValidationOptions::default());
    let can_submit = use_hook(move || {
        let fields = form.fields();
        fields[0].on_input.call(typed);
        if then_reset {
            form.reset();
        }
        form.can_submit()
    });
    let error_count = form.result().errors().len();

    rsx! {
        for field in form.fields() {
            InputFieldWithIcon {
                key: "{field.name}",
                name: field.name,
                value: field.value,
                error: field.error,
                on_input: field.on_input,
                icon: rsx! {},
            }
        }
        p { class: "can-submit", "{can_submit}" }
        p { class: "error-count", "{error_count}" }
    }
}

#[test]
fn blank_input_through_handler_shows_error_and_blocks_submit() {
    let html = render(|| rsx! { TypedFields { typed: "   " } });
    assert!(html.contains("Kolide Web Address must be present"), "{html}");
    assert!(html.contains(r#"<p class="can-submit">false</p>"#), "{html}");
    assert!(html.contains(r#"<p class="error-count">1</p>"#), "{html}");
}

#[test]
fn address_through_handler_is_stored_and_submittable() {
    let html = render(|| rsx! { TypedFields { typed: "https://kolide.example.com" } });
    assert!(html.contains(r#"value="https://kolide.example.com""#), "{html}");
    assert!(html.contains(r#"<p class="can-submit">true</p>"#), "{html}");
    assert!(html.contains(r#"<p class="error-count">0</p>"#), "{html}");
    assert!(!html.contains("input-error"), "{html}");
}

#[test]
fn reset_after_input_hides_error_again() {
    let html = render(|| rsx! { TypedFields { typed: "   ", then_reset: true } });
    assert!(!html.contains("must be present"), "{html}");
    assert!(!html.contains("input-error"), "{html}");
    assert!(html.contains(r#"<p class="can-submit">false</p>"#), "{html}");
}
