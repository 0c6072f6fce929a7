use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGlobe;
use dioxus_free_icons::Icon;
use shared_types::{AppConfig, KolideDetailsForm, KolideDetailsRequest, KOLIDE_WEB_ADDRESS};
use shared_ui::{use_form, BoundField, Button, ButtonVariant, Form, InputFieldWithIcon};

/// Kolide details registration step: a single web-address field and a
/// submit button.
///
/// Stateless: values, errors, and input handlers arrive pre-bound in
/// `fields`. A field missing from `fields` renders empty.
#[component]
pub fn KolideDetails(fields: Vec<BoundField>, handle_submit: EventHandler<()>) -> Element {
    let web_address = fields
        .iter()
        .find(|f| f.name == KOLIDE_WEB_ADDRESS)
        .cloned()
        .unwrap_or_else(|| BoundField {
            name: KOLIDE_WEB_ADDRESS.to_string(),
            value: String::new(),
            error: String::new(),
            on_input: EventHandler::default(),
        });

    rsx! {
        Form { class: "kolide-details", onsubmit: handle_submit,
            InputFieldWithIcon {
                name: web_address.name,
                value: web_address.value,
                error: web_address.error,
                on_input: web_address.on_input,
                input_type: "url",
                placeholder: "Kolide Web Address",
                icon: rsx! { Icon { icon: FaGlobe, width: 16, height: 16 } },
            }
            Button { variant: ButtonVariant::Gradient, submit: true, "Submit" }
        }
    }
}

/// Binds [`KolideDetails`] to a form container and forwards the validated
/// payload to `on_submit`.
#[component]
pub fn KolideDetailsStep(on_submit: EventHandler<KolideDetailsRequest>) -> Element {
    let config: AppConfig = use_context();
    let mut form = use_form::<KolideDetailsForm>(config.registration.validation_options());

    let handle_submit = move |_: ()| {
        let outcome = form.submit(|details| {
            tracing::info!(
                kolide_web_address = %details.kolide_web_address,
                "Kolide details accepted"
            );
        });
        match outcome {
            Ok(details) => on_submit.call(details),
            Err(e) => tracing::debug!(error = %e, "Kolide details not submitted"),
        }
    };

    rsx! {
        KolideDetails { fields: form.fields(), handle_submit }
    }
}

/// Registration page for the Kolide details step.
///
/// Transport of the submitted details lives outside this page; it keeps the
/// last accepted address and shows it back as confirmation.
#[component]
pub fn RegisterKolideDetails() -> Element {
    let mut saved = use_signal(|| Option::<KolideDetailsRequest>::None);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./registration.css") }

        div { class: "registration-page",
            div { class: "registration-card",
                h1 { class: "registration-title", "Kolide Details" }
                p { class: "registration-description",
                    "Enter the address your team uses to reach Kolide."
                }
                if let Some(details) = saved() {
                    div { class: "registration-success",
                        "Saved "
                        code { {details.kolide_web_address} }
                    }
                }
                KolideDetailsStep { on_submit: move |details| saved.set(Some(details)) }
            }
        }
    }
}
