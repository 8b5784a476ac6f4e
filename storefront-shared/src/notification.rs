//! Transient notifications shown in a corner of the page.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::config::timing::NOTIFICATION_MS;

/// Severity of a notification; doubles as its CSS modifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Error,
}

/// A message that removes itself after `lifetime_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    pub lifetime_ms: u32,
}

impl Notification {
    /// CSS classes, e.g. `notification notification-error`.
    #[must_use]
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.level.as_ref())
    }
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    /// Add a notification with the default lifetime and return its id.
    pub fn push(&mut self, message: impl Into<String>, level: NotificationLevel) -> u64 {
        self.push_with_lifetime(message, level, NOTIFICATION_MS)
    }

    /// Add a notification that lives for `lifetime_ms`.
    pub fn push_with_lifetime(
        &mut self,
        message: impl Into<String>,
        level: NotificationLevel,
        lifetime_ms: u32,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            level,
            lifetime_ms,
        });
        id
    }

    /// Remove a notification. Dismissing an id that is already gone is a no-op.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_push_assigns_increasing_ids_and_default_lifetime() {
        let mut queue = NotificationQueue::default();
        let first = queue.push("Guardado", NotificationLevel::Success);
        let second = queue.push("Hola", NotificationLevel::Info);

        assert!(second > first);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].lifetime_ms, 5_000);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = NotificationQueue::default();
        let id = queue.push("Error", NotificationLevel::Error);

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut queue = NotificationQueue::default();
        let id = queue.push("uno", NotificationLevel::Info);
        queue.dismiss(id);
        assert_ne!(queue.push("dos", NotificationLevel::Info), id);
    }

    #[test]
    fn test_level_class_and_parsing() {
        let mut queue = NotificationQueue::default();
        queue.push_with_lifetime("x", NotificationLevel::Error, 100);

        assert_eq!(queue.items()[0].class(), "notification notification-error");
        assert_eq!(
            NotificationLevel::from_str("success").unwrap(),
            NotificationLevel::Success
        );
        assert_eq!(NotificationLevel::default().to_string(), "info");
    }
}
