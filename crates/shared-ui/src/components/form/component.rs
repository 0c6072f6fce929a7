use dioxus::prelude::*;

/// Form element that calls `onsubmit` instead of reloading the page.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(());
            },
            ..merged,
            {children}
        }
    }
}
