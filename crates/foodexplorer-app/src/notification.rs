//! Toast notifications
//!
//! View models queue notifications; the presentation layer drains and renders
//! them, closing each one after `auto_close_ms`.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub auto_close_ms: u64,
}

impl Notification {
    /// Saturates at the latest representable instant for huge delays
    pub fn expires_at(&self) -> DateTime<Utc> {
        i64::try_from(self.auto_close_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .and_then(|delay| self.created_at.checked_add_signed(delay))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

#[derive(Debug, Clone)]
pub struct Notifier {
    auto_close_ms: u64,
    pending: Vec<Notification>,
}

impl Notifier {
    pub fn new(auto_close_ms: u64) -> Self {
        Self {
            auto_close_ms,
            pending: Vec::new(),
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    fn push(&mut self, level: NotificationLevel, message: String) {
        self.pending.push(Notification {
            level,
            message,
            created_at: Utc::now(),
            auto_close_ms: self.auto_close_ms,
        });
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    pub fn last_message(&self) -> Option<&str> {
        self.pending.last().map(|n| n.message.as_str())
    }

    /// Hand every queued notification to the caller
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_carry_auto_close() {
        let mut notifier = Notifier::new(1500);
        notifier.info("Item adicionado ao pedido.");
        notifier.error("falhou");

        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].level, NotificationLevel::Info);
        assert_eq!(drained[1].auto_close_ms, 1500);
        assert!(notifier.pending().is_empty());
    }

    #[test]
    fn test_expiry() {
        let mut notifier = Notifier::new(1500);
        notifier.warning("aviso");
        let n = &notifier.pending()[0];
        assert!(!n.is_expired(n.created_at));
        assert!(n.is_expired(n.created_at + Duration::milliseconds(1500)));
    }

    #[test]
    fn test_huge_auto_close_never_expires() {
        let mut notifier = Notifier::new(u64::MAX);
        notifier.info("fica");
        let n = &notifier.pending()[0];
        assert_eq!(n.expires_at(), DateTime::<Utc>::MAX_UTC);
        assert!(!n.is_expired(n.created_at + Duration::days(365 * 1000)));
    }
}
