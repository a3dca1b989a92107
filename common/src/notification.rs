use std::time::Duration;

/// Handle for the one pending hide of a copy notification.
///
/// A ticket only hides the notification it was issued for; once that
/// notification is gone (hidden, or its owner torn down and rebuilt) the
/// ticket is inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideTicket {
    generation: u64,
    delay: Duration,
}

impl HideTicket {
    /// Time to wait before handing the ticket back to [`CopyNotification::hide`].
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// "Copied!" notification flag.
///
/// `hidden --trigger--> visible --hide(ticket)--> hidden`. Triggering while
/// visible is dropped and does not extend the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyNotification {
    visible: bool,
    generation: u64,
}

impl CopyNotification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the notification. Returns the ticket to schedule, or `None` if
    /// one is already showing.
    pub fn trigger(&mut self, window: Duration) -> Option<HideTicket> {
        if self.visible {
            return None;
        }
        self.visible = true;
        self.generation += 1;
        Some(HideTicket {
            generation: self.generation,
            delay: window,
        })
    }

    /// Hide the notification the ticket was issued for. Returns whether the
    /// state changed.
    pub fn hide(&mut self, ticket: &HideTicket) -> bool {
        if self.visible && ticket.generation == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}
