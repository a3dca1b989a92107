use dioxus::prelude::*;

use faq_common::location::StaticLocation;
use faq_common::question::FaqEntry;

use super::questions_list_item::QuestionsListItem;

/// Every entry as its own independent item.
#[component]
pub fn QuestionsList(entries: Vec<FaqEntry>, location: StaticLocation) -> Element {
    rsx! {
        div { class: "faq-questions",
            for (i, entry) in entries.iter().enumerate() {
                QuestionsListItem {
                    key: "{i}",
                    question: entry.question.clone(),
                    answer: entry.answer.clone(),
                    location: location.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faq_common::source::parse_faq;

    fn app() -> Element {
        let doc = parse_faq("## What is this?\nA demo.\n## Is it free?\nYes.\n");
        rsx! {
            QuestionsList {
                entries: doc.entries,
                location: StaticLocation::new("https://x.test/faq", "?question=is-it-free"),
            }
        }
    }

    #[test]
    fn test_only_anchored_item_expanded() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let first = html.find(r#"id="what-is-this""#).unwrap();
        let second = html.find(r#"id="is-it-free""#).unwrap();
        let expanded = html.find("faq-question expanded").unwrap();

        assert_eq!(html.matches("faq-question expanded").count(), 1);
        assert!(first < second);
        assert!(first < expanded);
    }
}
