use std::time::Duration;

use faq_common::clipboard::{Clipboard, ClipboardError};
use faq_common::location::PageLocation;

/// `window.location` of the running page.
///
/// Reads that fail (or have no window, as on native builds) yield empty
/// strings, which never match an anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl PageLocation for BrowserLocation {
    fn search(&self) -> String {
        #[cfg(target_family = "wasm")]
        {
            match web_sys::window().map(|w| w.location().search()) {
                Some(Ok(search)) => return search,
                Some(Err(e)) => tracing::warn!("Failed to read location.search: {:?}", e),
                None => tracing::warn!("No window; treating location as empty"),
            }
        }
        String::new()
    }

    fn href(&self) -> String {
        #[cfg(target_family = "wasm")]
        {
            match web_sys::window().map(|w| w.location().href()) {
                Some(Ok(href)) => return href,
                Some(Err(e)) => tracing::warn!("Failed to read location.href: {:?}", e),
                None => tracing::warn!("No window; treating location as empty"),
            }
        }
        String::new()
    }
}

/// `navigator.clipboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_family = "wasm")]
        {
            let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
            let promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
        }
        #[cfg(not(target_family = "wasm"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable)
        }
    }
}

/// Wait on the browser timer queue.
pub async fn sleep(duration: Duration) {
    #[cfg(target_family = "wasm")]
    {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
    #[cfg(not(target_family = "wasm"))]
    {
        // Native builds only render; there is no timer queue to wait on.
        let _ = duration;
        std::future::pending::<()>().await;
    }
}
