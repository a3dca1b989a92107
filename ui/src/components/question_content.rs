use dioxus::prelude::*;

use faq_common::question::Answer;

use super::app::use_faq_config;
use super::collapse::Collapse;
use super::html_content::HtmlContent;

/// Answer body under a collapse, driven entirely by `question_expanded`.
#[component]
pub fn QuestionContent(question_expanded: bool, answer: Answer, region_id: String) -> Element {
    let config = use_faq_config();

    rsx! {
        div { class: "question-content",
            Collapse {
                is_open: question_expanded,
                id: region_id,
                transition: config.collapse_transition.to_string(),
                HtmlContent { content: answer.html.clone() }
            }
        }
    }
}
