use serde::{Deserialize, Serialize};

use crate::slug::to_kebab_case;

/// A question as supplied by the FAQ content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Stable identifier derived from the question text.
    pub fn id(&self) -> String {
        to_kebab_case(&self.text)
    }
}

/// Pre-rendered answer markup. Sanitization is the content source's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub html: String,
}

impl Answer {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: Question,
    pub answer: Answer,
}
