use dioxus::prelude::*;

/// Injects pre-rendered markup. The caller is responsible for sanitizing it.
#[component]
pub fn HtmlContent(content: String) -> Element {
    rsx! {
        div {
            class: "html-content",
            style: "max-width: 1000px; padding: 0 45px;",
            dangerous_inner_html: "{content}"
        }
    }
}
