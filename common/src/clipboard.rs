use std::future::Future;
use std::time::Duration;

use crate::config::FaqConfig;
use crate::item::ItemStore;
use crate::location::{anchor_link, PageLocation};

/// Errors from the clipboard capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable from this host.
    Unavailable,
    /// The host refused the write (permissions, focus, ...).
    Rejected(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "clipboard unavailable"),
            Self::Rejected(msg) => write!(f, "clipboard write rejected: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Write-text access to the system clipboard.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Build the deep link for `question_id` and put it on the clipboard.
///
/// Returns the link that was written.
pub async fn copy_anchor_link<C, L>(
    clipboard: &C,
    location: &L,
    question_id: &str,
    config: &FaqConfig,
) -> Result<String, ClipboardError>
where
    C: Clipboard,
    L: PageLocation,
{
    let link = anchor_link(&location.href(), config.anchor_param, question_id);
    clipboard.write_text(&link).await?;
    Ok(link)
}

/// Result of a copy-link click that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// A notification was already showing; nothing was written.
    AlreadyShowing,
    /// The link was written and its notification has been shown and hidden.
    Copied(String),
}

/// Copy-link click: guard on the visible notification, write the link,
/// show "Copied!" and hide it again once `sleep(window)` resolves.
///
/// A notification that is already showing is left alone, without extending
/// its window. A failed write shows nothing.
pub async fn copy_and_notify<S, C, L, F, Fut>(
    store: &mut S,
    clipboard: &C,
    location: &L,
    config: &FaqConfig,
    sleep: F,
) -> Result<CopyOutcome, ClipboardError>
where
    S: ItemStore,
    C: Clipboard,
    L: PageLocation,
    F: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let question_id = store.update(|s| {
        if s.is_notification_visible() {
            None
        } else {
            Some(s.question_id().to_string())
        }
    });
    let Some(question_id) = question_id else {
        return Ok(CopyOutcome::AlreadyShowing);
    };

    let link = copy_anchor_link(clipboard, location, &question_id, config).await?;

    if let Some(ticket) = store.update(|s| s.notify_copied(config)) {
        sleep(ticket.delay()).await;
        store.update(|s| s.hide_notification(&ticket));
    }
    Ok(CopyOutcome::Copied(link))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use futures::future;

    use super::*;
    use crate::item::QuestionItemState;
    use crate::location::StaticLocation;
    use crate::question::Question;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: RefCell<Option<String>>,
    }

    impl Clipboard for MemoryClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Rejected("NotAllowedError".into()))
        }
    }

    #[test]
    fn test_copy_writes_link() {
        let clipboard = MemoryClipboard::default();
        let location = StaticLocation::new("https://x.test/faq", "");
        let link = block_on(copy_anchor_link(
            &clipboard,
            &location,
            "what-is-this",
            &FaqConfig::default(),
        ))
        .unwrap();

        assert_eq!(link, "https://x.test/faq?question=what-is-this");
        assert_eq!(clipboard.contents.borrow().as_deref(), Some(link.as_str()));
    }

    #[test]
    fn test_copy_propagates_rejection() {
        let location = StaticLocation::new("https://x.test/faq", "");
        let err = block_on(copy_anchor_link(
            &DeniedClipboard,
            &location,
            "what-is-this",
            &FaqConfig::default(),
        ))
        .unwrap_err();

        assert_eq!(err.to_string(), "clipboard write rejected: NotAllowedError");
    }

    fn shared_item() -> (Rc<RefCell<QuestionItemState>>, StaticLocation) {
        let location = StaticLocation::new("https://x.test/faq", "");
        let state = QuestionItemState::new(
            &Question::new("What is this?"),
            &location,
            &FaqConfig::default(),
        );
        (Rc::new(RefCell::new(state)), location)
    }

    #[test]
    fn test_copy_and_notify_hides_after_sleep() {
        let (mut item, location) = shared_item();
        let clipboard = MemoryClipboard::default();
        let watched = Rc::clone(&item);
        let config = FaqConfig::default();

        let outcome = block_on(copy_and_notify(
            &mut item,
            &clipboard,
            &location,
            &config,
            |delay| {
                assert_eq!(delay, config.copy_notification);
                assert!(watched.borrow().is_notification_visible());
                future::ready(())
            },
        ))
        .unwrap();

        assert_eq!(
            outcome,
            CopyOutcome::Copied("https://x.test/faq?question=what-is-this".into())
        );
        assert!(!item.borrow().is_notification_visible());
    }

    #[test]
    fn test_copy_and_notify_skips_while_showing() {
        let (mut item, location) = shared_item();
        let config = FaqConfig::default();
        let _ticket = item.borrow_mut().notify_copied(&config).unwrap();
        let clipboard = MemoryClipboard::default();

        let outcome = block_on(copy_and_notify(
            &mut item,
            &clipboard,
            &location,
            &config,
            |_| future::ready(()),
        ))
        .unwrap();

        assert_eq!(outcome, CopyOutcome::AlreadyShowing);
        assert!(clipboard.contents.borrow().is_none());
        assert!(item.borrow().is_notification_visible());
    }

    #[test]
    fn test_copy_and_notify_failure_shows_nothing() {
        let (mut item, location) = shared_item();
        let err = block_on(copy_and_notify(
            &mut item,
            &DeniedClipboard,
            &location,
            &FaqConfig::default(),
            |_| future::ready(()),
        ))
        .unwrap_err();

        assert!(matches!(err, ClipboardError::Rejected(_)));
        assert!(!item.borrow().is_notification_visible());
    }
}
