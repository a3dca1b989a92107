use dioxus::prelude::*;

use faq_common::clipboard::{copy_and_notify, CopyOutcome};
use faq_common::item::{ItemStore, QuestionItemState};
use faq_common::location::StaticLocation;
use faq_common::question::{Answer, Question};

use super::app::use_faq_config;
use super::browser::{sleep, BrowserClipboard};
use super::question_content::QuestionContent;

/// One FAQ entry: a header row with copy-link and toggle controls, then the
/// collapsible answer.
#[component]
pub fn QuestionsListItem(question: Question, answer: Answer, location: StaticLocation) -> Element {
    let config = use_faq_config();
    let mut item = use_signal(|| QuestionItemState::new(&question, &location, &config));

    let state = item.read();
    let question_id = state.question_id().to_string();
    let region_id = state.answer_region_id();
    let expanded = state.is_expanded();
    let notification_visible = state.is_notification_visible();
    drop(state);

    let on_copy = {
        let question_id = question_id.clone();
        let config = config.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            let mut store = SignalStore(item);
            let question_id = question_id.clone();
            let location = location.clone();
            let config = config.clone();
            spawn(async move {
                match copy_and_notify(&mut store, &BrowserClipboard, &location, &config, sleep).await {
                    Ok(CopyOutcome::Copied(link)) => {
                        tracing::debug!("Copied anchor link: {link}");
                    }
                    Ok(CopyOutcome::AlreadyShowing) => {}
                    Err(e) => {
                        tracing::warn!("Could not copy link to {question_id}: {e}");
                    }
                }
            });
        }
    };

    let on_toggle = {
        let question_id = question_id.clone();
        move |_: MouseEvent| {
            let expanded = item.write().toggle();
            tracing::debug!(expanded, "Toggled {question_id}");
        }
    };

    let item_class = if expanded { "faq-question expanded" } else { "faq-question" };
    let margin = config.bottom_margin(expanded);
    let margin_transition = config.margin_transition;
    let (tooltip_transform, tooltip_opacity, tooltip_visibility) = if notification_visible {
        ("translateX(-50%) translateY(-100%)", "1", "visible")
    } else {
        ("translateX(-50%) translateY(-80%)", "0", "hidden")
    };
    let icon_rotation = if expanded { "rotate(90deg)" } else { "rotate(180deg)" };
    let stroke_width = if expanded { "0px" } else { "20px" };
    let copy_label = format!("Copy a link to question: \"{}\"", question.text);
    let toggle_label = format!("See answer to \"{}\"", question.text);

    rsx! {
        div {
            id: "{question_id}",
            class: "{item_class}",
            style: "padding-top: 40px; margin-bottom: {margin}; transition: {margin_transition};",
            div {
                class: "top-container",
                style: "display: flex; flex-direction: row; align-items: flex-start; border-bottom: 1.5px solid var(--faq-primary, currentColor); margin-bottom: 30px; position: relative;",
                div { class: "copy-link-button", style: "position: relative;",
                    button {
                        r#type: "button",
                        class: "anchor-link",
                        aria_label: "{copy_label}",
                        style: "height: 30px; width: 20px; margin-right: 20px; margin-top: 5px; cursor: pointer;",
                        onclick: on_copy,
                        LinkIcon {}
                    }
                    div {
                        class: "text-copied-notification",
                        role: "status",
                        style: "position: absolute; top: -15px; left: 50%; transform: {tooltip_transform}; height: auto; padding: 5px 10px; text-align: center; opacity: {tooltip_opacity}; visibility: {tooltip_visibility}; background-color: black; border-radius: 4px; transition: opacity 0.3s ease, visibility 0.3s ease, transform 0.3s ease; z-index: 1;",
                        span { style: "color: white; line-height: 1; white-space: nowrap;", "Copied!" }
                        div {
                            class: "tooltip-triangle",
                            style: "position: absolute; left: 0; right: 0; bottom: -6px; margin: 0 auto; width: 0; height: 0; border-left: 6px solid transparent; border-right: 6px solid transparent; border-top: 6px solid black;",
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "toggle-button",
                    aria_label: "{toggle_label}",
                    aria_expanded: "{expanded}",
                    aria_controls: "{region_id}",
                    style: "width: 100%; display: flex; flex-direction: row; align-items: flex-start; justify-content: space-between; padding: 0; cursor: pointer;",
                    onclick: on_toggle,
                    h2 { class: "the-question", style: "max-width: 500px;", "{question.text}" }
                    div {
                        class: "icon",
                        style: "display: block; padding: 7.5px; border: 1.5px solid var(--faq-primary, currentColor); border-radius: 50%;",
                        div {
                            class: "icon-container",
                            style: "box-sizing: border-box; transition: transform 0.3s; width: 20px; height: 20px; transform: {icon_rotation}; position: relative;",
                            div {
                                class: "stroke-horizontal",
                                style: "display: block; width: {stroke_width}; height: 0px; border-bottom: solid 2px; position: absolute; bottom: 9px;",
                            }
                            div {
                                class: "stroke-vertical",
                                style: "display: block; width: 20px; height: 0px; border-bottom: solid 2px; position: absolute; bottom: 9px; transform: rotate(90deg); transform-origin: center; transition: width 0.3s;",
                            }
                        }
                    }
                }
            }
            div { class: "bottom-container",
                QuestionContent { question_expanded: expanded, answer: answer.clone(), region_id: region_id.clone() }
            }
        }
    }
}

/// Item state held in the component's signal.
#[derive(Clone, Copy)]
struct SignalStore(Signal<QuestionItemState>);

impl ItemStore for SignalStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut QuestionItemState) -> R) -> R {
        f(&mut self.0.write())
    }
}

#[component]
fn LinkIcon() -> Element {
    rsx! {
        svg {
            "xmlns": "http://www.w3.org/2000/svg",
            "viewBox": "0 0 72 88",
            style: "height: 100%; width: 100%;",
            path { d: "M53.9655 46.8234c.7779 2.6163.1415 5.5154-1.7677 7.4246l-25.173 25.173c-2.8992 2.8992-7.566 2.8992-10.4652 0l-7.566-7.566c-2.8992-2.8992-2.8992-7.566 0-10.4652l25.173-25.173c2.899-2.8991 7.566-2.8991 10.4651 0l3.3941 3.3941 3.9598-3.9598-3.394-3.3941c-5.0912-5.0912-13.2937-5.0912-18.3849 0L5.0337 57.43c-5.0911 5.0912-5.0911 13.2936 0 18.3848l7.6368 7.6367c5.0912 5.0912 13.2936 5.0912 18.3848 0l25.173-25.173c3.677-3.677 4.8083-9.1924 2.8284-14.1421-.2121-.495-.495-1.0607-.7778-1.6263l-4.3134 4.3133z" }
            path { d: "M41.8033 4.2556l-25.173 25.173c-4.2426 4.2426-4.9497 10.748-2.0506 15.7685l4.3133-4.3134c-.8485-2.5456-.212-5.4447 1.7678-7.4246l25.173-25.173c2.8991-2.8992 7.566-2.8992 10.4652 0l7.6367 7.6367c2.8992 2.8992 2.8992 7.566 0 10.4652l-25.173 25.173c-2.8991 2.8992-7.566 2.8992-10.4651 0l-3.3234-3.3234-4.0305 4.0305 3.3234 3.3234c5.0911 5.0912 13.2936 5.0912 18.3847 0l25.2437-25.2437c5.0912-5.0912 5.0912-13.2936 0-18.3848l-7.7074-7.7074c-5.0912-5.0912-13.3643-5.0205-18.3848 0z" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn item(search: &'static str) -> Element {
        rsx! {
            QuestionsListItem {
                question: Question::new("What is this?"),
                answer: Answer::new("<p>A demo.</p>"),
                location: StaticLocation::new("https://x.test/faq", search),
            }
        }
    }

    fn anchored() -> Element {
        item("?question=what-is-this")
    }

    fn unanchored() -> Element {
        item("?question=something-else")
    }

    #[test]
    fn test_anchored_item_renders_expanded() {
        let html = render(anchored);
        assert!(html.contains("faq-question expanded"));
        assert!(html.contains("margin-bottom: 60px"));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("rotate(90deg)"));
        assert!(html.contains("grid-template-rows: 1fr"));
    }

    #[test]
    fn test_unanchored_item_renders_collapsed() {
        let html = render(unanchored);
        assert!(!html.contains("faq-question expanded"));
        assert!(html.contains("margin-bottom: 0;"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains("rotate(180deg)"));
        assert!(html.contains("grid-template-rows: 0fr"));
        // Collapsed content stays mounted.
        assert!(html.contains("<p>A demo.</p>"));
    }

    #[test]
    fn test_controls_are_labelled() {
        let html = render(unanchored);
        assert!(html.contains("Copy a link to question: "));
        assert!(html.contains("See answer to "));
        assert!(html.contains(r#"aria-controls="what-is-this-answer""#));
        assert!(html.contains(r#"id="what-is-this-answer""#));
    }

    #[test]
    fn test_notification_starts_hidden() {
        let html = render(unanchored);
        assert!(html.contains("Copied!"));
        assert!(html.contains("visibility: hidden"));
        assert!(html.contains("opacity: 0;"));
    }
}
