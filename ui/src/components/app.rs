use dioxus::prelude::*;

use faq_common::config::FaqConfig;

use super::faq_view::FaqView;

#[component]
pub fn App() -> Element {
    use_context_provider(FaqConfig::default);
    use_hook(|| tracing::info!("FAQ page mounted"));

    rsx! { FaqView {} }
}

/// Settings provided by [`App`], or the defaults when rendered on its own.
pub fn use_faq_config() -> FaqConfig {
    try_use_context::<FaqConfig>().unwrap_or_default()
}
