//! Key subscriptions with an explicit lifetime.
//!
//! Views register the shortcuts they own while they are mounted and remove
//! them on teardown; nothing is global.

use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Close the detail view.
    CloseDetail,
    /// Focus the search box and clear the query.
    FocusSearch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
pub struct KeySubscriptions {
    next_id: u64,
    entries: Vec<(SubscriptionId, KeyCode, KeyAction)>,
}

impl KeySubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, code: KeyCode, action: KeyAction) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, code, action));
        id
    }

    /// Returns `false` if `id` was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Latest subscription for `code` wins.
    pub fn action_for(&self, code: KeyCode) -> Option<KeyAction> {
        self.entries
            .iter()
            .rev()
            .find(|(_, entry_code, _)| *entry_code == code)
            .map(|(_, _, action)| *action)
    }

    pub fn is_subscribed(&self, code: KeyCode, action: KeyAction) -> bool {
        self.entries
            .iter()
            .any(|(_, entry_code, entry_action)| *entry_code == code && *entry_action == action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
