use bughive_errors::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    BugUpdate,
    BadgeEarned,
    RankChange,
    Comment,
    Verification,
    Achievement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
}

impl NotificationPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationPriority::Low => "low",
            NotificationPriority::Medium => "medium",
            NotificationPriority::High => "high",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMeta {
    pub bug_id: Option<String>,
    pub badge_name: Option<String>,
    pub points: Option<u32>,
    pub old_rank: Option<u32>,
    pub new_rank: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub is_read: bool,
    pub priority: NotificationPriority,
    pub action_url: Option<String>,
    pub meta: NotificationMeta,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationInbox {
    notifications: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn filtered(&self, filter: NotificationFilter) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|n| filter == NotificationFilter::All || !n.is_read)
            .cloned()
            .collect()
    }

    pub fn mark_read(&mut self, id: &str) -> Result<(), AppError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NotificationNotFound(id.to_string()))?;
        notification.is_read = true;
        Ok(())
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() == before {
            return Err(AppError::NotificationNotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Snapshot sent to the notification center.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxView {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl NotificationInbox {
    pub fn view(&self, filter: NotificationFilter) -> InboxView {
        InboxView {
            notifications: self.filtered(filter),
            unread_count: self.unread_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationKind::Comment,
            title: "New Comment".to_string(),
            message: "Someone replied".to_string(),
            timestamp: "1 day ago".to_string(),
            is_read,
            priority: NotificationPriority::Low,
            action_url: None,
            meta: NotificationMeta::default(),
        }
    }

    fn inbox() -> NotificationInbox {
        NotificationInbox::new(vec![note("1", false), note("2", false), note("3", true)])
    }

    #[test]
    fn test_unread_filter() {
        let inbox = inbox();
        assert_eq!(inbox.unread_count(), 2);
        assert_eq!(inbox.filtered(NotificationFilter::All).len(), 3);
        assert_eq!(inbox.filtered(NotificationFilter::Unread).len(), 2);
    }

    #[test]
    fn test_mark_read_and_mark_all() {
        let mut inbox = inbox();
        inbox.mark_read("1").unwrap();
        assert_eq!(inbox.unread_count(), 1);

        inbox.mark_all_read();
        assert_eq!(inbox.unread_count(), 0);
        assert!(inbox.filtered(NotificationFilter::Unread).is_empty());
    }

    #[test]
    fn test_delete() {
        let mut inbox = inbox();
        inbox.delete("2").unwrap();
        assert_eq!(inbox.view(NotificationFilter::All).notifications.len(), 2);
        assert_eq!(inbox.view(NotificationFilter::All).unread_count, 1);
    }

    #[test]
    fn test_unknown_id() {
        let mut inbox = inbox();
        assert_eq!(
            inbox.mark_read("nope"),
            Err(AppError::NotificationNotFound("nope".to_string()))
        );
        assert!(inbox.delete("nope").is_err());
    }
}
