use dioxus::prelude::*;

/// Text input with a leading icon and an inline error line.
///
/// The error line is only rendered when `error` is non-empty, and the wrapper
/// gains a `has-error` class so the icon and border pick up the error colour.
#[component]
pub fn InputFieldWithIcon(
    /// Field name, also used as the input `name` and `id`.
    #[props(default)]
    name: String,
    #[props(default)] value: String,
    /// Inline error message; empty means the field is valid.
    #[props(default)]
    error: String,
    /// Called with the new text on every keystroke.
    #[props(default)]
    on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    /// Icon rendered inside the leading slot.
    icon: Element,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_error = !error.is_empty();
    let wrapper_class = if has_error {
        "input-with-icon has-error"
    } else {
        "input-with-icon"
    };
    let error_id = format!("{name}-error");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: wrapper_class,
            div { class: "input-with-icon-field",
                span { class: "input-icon", {icon} }
                input {
                    r#type: "{input_type}",
                    id: "{name}",
                    name: "{name}",
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    aria_invalid: has_error,
                    oninput: move |evt| on_input.call(evt.value()),
                    ..merged,
                }
            }
            if has_error {
                div { id: "{error_id}", class: "input-error", role: "alert", "{error}" }
            }
        }
    }
}
