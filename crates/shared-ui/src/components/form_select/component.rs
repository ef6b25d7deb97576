use dioxus::prelude::*;

/// A labeled native `<select>`.
///
/// The reference-data dropdowns on the report form disable themselves until
/// their upstream dependency resolves, so `disabled` is first-class here.
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "select-wrapper",
            if !label.is_empty() {
                label { class: "select-label", "{label}" }
            }
            select {
                class: "select-input",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
