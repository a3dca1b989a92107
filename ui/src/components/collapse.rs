use dioxus::prelude::*;

/// Height transition that keeps its children mounted.
///
/// Animates `grid-template-rows` between `0fr` and `1fr`, so collapsed
/// content has zero visible height without measuring the DOM.
#[component]
pub fn Collapse(is_open: bool, id: String, transition: String, children: Element) -> Element {
    let class = if is_open { "collapse open" } else { "collapse" };
    let rows = if is_open { "1fr" } else { "0fr" };
    let hidden = if is_open { "false" } else { "true" };

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            role: "region",
            aria_hidden: "{hidden}",
            style: "display: grid; grid-template-rows: {rows}; transition: {transition};",
            div {
                class: "collapse-inner",
                style: "overflow: hidden; min-height: 0;",
                {children}
            }
        }
    }
}
