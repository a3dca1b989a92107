use std::cell::RefCell;
use std::rc::Rc;

use crate::config::FaqConfig;
use crate::location::{anchored_question_id, PageLocation};
use crate::notification::{CopyNotification, HideTicket};
use crate::question::Question;

/// Local state of one rendered FAQ item.
///
/// Built when the item mounts and dropped with it. Items never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionItemState {
    question_id: String,
    expanded: bool,
    notification: CopyNotification,
}

impl QuestionItemState {
    /// Starts expanded only when the location anchors this question.
    pub fn new<L: PageLocation>(question: &Question, location: &L, config: &FaqConfig) -> Self {
        let question_id = question.id();
        let anchored = anchored_question_id(&location.search(), config.anchor_param);
        let expanded = anchored.as_deref() == Some(question_id.as_str());
        Self {
            question_id,
            expanded,
            notification: CopyNotification::new(),
        }
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip expansion. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn is_notification_visible(&self) -> bool {
        self.notification.is_visible()
    }

    /// Record a successful copy. See [`CopyNotification::trigger`].
    pub fn notify_copied(&mut self, config: &FaqConfig) -> Option<HideTicket> {
        self.notification.trigger(config.copy_notification)
    }

    pub fn hide_notification(&mut self, ticket: &HideTicket) -> bool {
        self.notification.hide(ticket)
    }

    /// Id of the answer region, referenced by the toggle's `aria-controls`.
    pub fn answer_region_id(&self) -> String {
        format!("{}-answer", self.question_id)
    }
}

/// Owner of a [`QuestionItemState`] that async handlers can reach between
/// event-loop turns. Borrows never span an `.await`.
pub trait ItemStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut QuestionItemState) -> R) -> R;
}

impl ItemStore for Rc<RefCell<QuestionItemState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut QuestionItemState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
