use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Holds the single visible notification.
///
/// Showing a new one replaces the old. Dismissal is by id so a stale
/// auto-close timer cannot remove a newer notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    current: Option<(u64, Notification)>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        self.current = Some((self.next_id, notification));
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        if matches!(self.current, Some((current, _)) if current == id) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(_, n)| n)
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_replaces_old() {
        let mut center = NotificationCenter::new();
        let first = center.show(Notification::success("sent"));
        let second = center.show(Notification::error("failed"));
        assert!(!center.dismiss(first));
        assert_eq!(center.current().map(|n| n.kind), Some(NotificationKind::Error));
        assert!(center.dismiss(second));
        assert_eq!(center.current(), None);
    }

    #[test]
    fn test_kind_defaults_to_info() {
        let notification: Notification = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(notification.kind, NotificationKind::Info);
    }
}
