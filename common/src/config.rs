use std::time::Duration;

/// Query parameter carrying the anchored question slug.
pub const ANCHOR_PARAM: &str = "question";

/// How long the "Copied!" notification stays visible.
pub const COPY_NOTIFICATION_MS: u64 = 1_500;

/// Presentation and timing settings shared by every FAQ item.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqConfig {
    /// Name of the query parameter used for deep links.
    pub anchor_param: &'static str,
    /// Visibility window of the copy notification.
    pub copy_notification: Duration,
    /// CSS transition of the answer collapse.
    pub collapse_transition: &'static str,
    /// CSS transition of the item's bottom margin.
    pub margin_transition: &'static str,
    /// Bottom margin applied while an item is expanded.
    pub expanded_margin_px: u32,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            anchor_param: ANCHOR_PARAM,
            copy_notification: Duration::from_millis(COPY_NOTIFICATION_MS),
            collapse_transition: "grid-template-rows .33s cubic-bezier(.4, 0, .2, 1)",
            margin_transition: "margin 0.3s ease",
            expanded_margin_px: 60,
        }
    }
}

impl FaqConfig {
    /// Bottom margin for an item in the given expansion state.
    pub fn bottom_margin(&self, expanded: bool) -> String {
        if expanded {
            format!("{}px", self.expanded_margin_px)
        } else {
            "0".to_string()
        }
    }
}
