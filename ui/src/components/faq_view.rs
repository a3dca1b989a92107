use dioxus::prelude::*;

use faq_common::location::PageLocation;
use faq_common::source::parse_faq;

use super::browser::BrowserLocation;
use super::questions_list::QuestionsList;

const FAQ_MD: &str = include_str!("../../../docs/faq.md");

#[component]
pub fn FaqView() -> Element {
    let document = use_hook(|| parse_faq(FAQ_MD));
    let location = use_hook(|| BrowserLocation.snapshot());

    rsx! {
        div { class: "faq-view",
            div {
                class: "faq-preamble",
                dangerous_inner_html: "{document.preamble_html}"
            }
            QuestionsList { entries: document.entries.clone(), location }
        }
    }
}
