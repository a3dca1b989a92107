use url::form_urlencoded;

/// The page location an FAQ item reads its anchor from.
///
/// Browsers expose `window.location`; tests and SSR hand in a
/// [`StaticLocation`].
pub trait PageLocation {
    /// Query string, with or without the leading `?`.
    fn search(&self) -> String;

    /// Full URL of the current page.
    fn href(&self) -> String;

    /// Freeze the current values.
    fn snapshot(&self) -> StaticLocation {
        StaticLocation {
            href: self.href(),
            search: self.search(),
        }
    }
}

/// A fixed location value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation {
    pub href: String,
    pub search: String,
}

impl StaticLocation {
    pub fn new(href: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            search: search.into(),
        }
    }
}

impl PageLocation for StaticLocation {
    fn search(&self) -> String {
        self.search.clone()
    }

    fn href(&self) -> String {
        self.href.clone()
    }
}

/// Value of `param` in a query string.
///
/// Returns `None` when the parameter is absent or appears more than once,
/// since a repeated parameter cannot name a single question.
pub fn anchored_question_id(search: &str, param: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut values = form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned());

    let first = values.next()?;
    match values.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Shareable deep link: `<href>?<param>=<question_id>`.
pub fn anchor_link(href: &str, param: &str, question_id: &str) -> String {
    format!("{href}?{param}={question_id}")
}
