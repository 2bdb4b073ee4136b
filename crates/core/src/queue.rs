//! The ordered queue of startup actions.

use std::collections::VecDeque;

use serde::Serialize;

use crate::action::Action;

/// Ordered startup actions, in the order their commandlines were given.
///
/// [`StartupActions::ensure_leading_new_tab`] enforces "the first action
/// opens a tab" once per queue. Later calls do nothing, so a consumer that
/// has already popped the leading `NewTab` cannot get a second one inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StartupActions {
    actions: VecDeque<Action>,
    #[serde(skip)]
    enforced: bool,
}

impl StartupActions {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action at the back.
    pub fn push(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    /// Remove and return the front action.
    pub fn pop_front(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    /// The front action, if any.
    pub fn front(&self) -> Option<&Action> {
        self.actions.front()
    }

    /// Number of queued actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over the queued actions, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// Whether [`StartupActions::ensure_leading_new_tab`] has already run.
    pub fn is_enforced(&self) -> bool {
        self.enforced
    }

    /// Make sure the first action is a `NewTab`, inserting a default one at
    /// the front when the queue is empty or starts with anything else.
    ///
    /// Only the first call on a queue does anything. Returns whether an
    /// action was inserted.
    pub fn ensure_leading_new_tab(&mut self) -> bool {
        if self.enforced {
            return false;
        }
        self.enforced = true;
        if self.actions.front().is_some_and(Action::is_new_tab) {
            return false;
        }
        tracing::debug!(queued = self.actions.len(), "inserting leading new-tab");
        self.actions.push_front(Action::default_new_tab());
        true
    }

    /// Hand over the queued actions.
    pub fn into_inner(self) -> VecDeque<Action> {
        self.actions
    }
}

impl From<VecDeque<Action>> for StartupActions {
    fn from(actions: VecDeque<Action>) -> Self {
        Self {
            actions,
            enforced: false,
        }
    }
}

impl IntoIterator for StartupActions {
    type Item = Action;
    type IntoIter = std::collections::vec_deque::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a StartupActions {
    type Item = &'a Action;
    type IntoIter = std::collections::vec_deque::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Return `actions` with a default `NewTab` in front unless it already starts
/// with one.
pub fn ensure_leading_new_tab(mut actions: VecDeque<Action>) -> VecDeque<Action> {
    if !actions.front().is_some_and(Action::is_new_tab) {
        actions.push_front(Action::default_new_tab());
    }
    actions
}
