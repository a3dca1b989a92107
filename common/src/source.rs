use pulldown_cmark::{html, Options, Parser};

use crate::question::{Answer, FaqEntry, Question};

/// A parsed FAQ document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqDocument {
    /// Rendered markup of everything before the first question.
    pub preamble_html: String,
    pub entries: Vec<FaqEntry>,
}

fn render(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(markdown, opts));
    out
}

/// Parse Markdown where each `## ` heading is a question and the lines up
/// to the next one are its answer.
pub fn parse_faq(source: &str) -> FaqDocument {
    let mut preamble_md = String::new();
    let mut entries = Vec::new();
    let mut current_question: Option<String> = None;
    let mut current_body = String::new();

    for line in source.lines() {
        if let Some(title) = line.strip_prefix("## ") {
            if let Some(prev) = current_question.take() {
                entries.push(entry(prev, &current_body));
                current_body.clear();
            }
            current_question = Some(title.trim().to_string());
        } else if current_question.is_some() {
            current_body.push_str(line);
            current_body.push('\n');
        } else {
            preamble_md.push_str(line);
            preamble_md.push('\n');
        }
    }

    if let Some(last) = current_question {
        entries.push(entry(last, &current_body));
    }

    FaqDocument {
        preamble_html: render(&preamble_md),
        entries,
    }
}

fn entry(question: String, body_md: &str) -> FaqEntry {
    FaqEntry {
        question: Question::new(question),
        answer: Answer::new(render(body_md)),
    }
}
