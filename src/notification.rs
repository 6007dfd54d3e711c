//! Transient notifications
//!
//! Holds at most one message. A notification is hidden after its display
//! window elapses or when it is dismissed, whichever happens first. The last
//! message stays inspectable through [`NotificationSlot::peek`].

use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Default display window
pub const DEFAULT_DISPLAY_WINDOW: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
    raised_at: Instant,
}

impl Notification {
    pub fn raised_at(&self) -> Instant {
        self.raised_at
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.name(), self.message)
    }
}

/// Single-slot notification holder with auto-expiry
#[derive(Debug)]
pub struct NotificationSlot {
    current: Option<Notification>,
    window: Duration,
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_WINDOW)
    }
}

impl NotificationSlot {
    pub fn new(window: Duration) -> Self {
        Self {
            current: None,
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Show a message, replacing any current one and restarting the window.
    pub fn raise(&mut self, message: impl Into<String>, severity: Severity) {
        self.current = Some(Notification {
            message: message.into(),
            severity,
            visible: true,
            raised_at: Instant::now(),
        });
    }

    pub fn dismiss(&mut self) {
        if let Some(notification) = self.current.as_mut() {
            notification.visible = false;
        }
    }

    /// The visible notification, if its window has not elapsed yet.
    pub fn current(&mut self) -> Option<&Notification> {
        self.expire(Instant::now());
        self.current.as_ref().filter(|n| n.visible)
    }

    /// Last raised notification, hidden or not, without expiring it.
    pub fn peek(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Hide the notification if its window has elapsed at `now`.
    pub fn expire(&mut self, now: Instant) -> bool {
        let window = self.window;
        match self.current.as_mut() {
            Some(n) if n.visible && now.saturating_duration_since(n.raised_at) >= window => {
                n.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Time left before the visible notification is hidden.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .filter(|n| n.visible)
            .map(|n| self.window.saturating_sub(now.saturating_duration_since(n.raised_at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_auto_clears_after_window() {
        let mut slot = NotificationSlot::default();
        slot.raise("Collection not deployed yet", Severity::Error);

        tokio::time::advance(Duration::from_millis(3_999)).await;
        let current = slot.current().expect("still visible");
        assert_eq!(current.message, "Collection not deployed yet");
        assert_eq!(current.severity, Severity::Error);
        assert!(current.visible);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(slot.current().is_none());
        assert_eq!(slot.remaining(Instant::now()), None);

        let last = slot.peek().expect("kept after expiry");
        assert_eq!(last.message, "Collection not deployed yet");
        assert!(!last.visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_before_window() {
        let mut slot = NotificationSlot::default();
        slot.raise("hello", Severity::Info);
        slot.dismiss();
        assert!(slot.current().is_none());
        assert_eq!(slot.peek().map(|n| n.visible), Some(false));

        // Raising again makes it visible
        slot.raise("again", Severity::Info);
        assert_eq!(slot.current().map(|n| n.visible), Some(true));
    }

    #[tokio::test(start_paused = true)]
    async fn test_raise_restarts_window() {
        let mut slot = NotificationSlot::new(Duration::from_secs(4));
        slot.raise("first", Severity::Error);
        tokio::time::advance(Duration::from_secs(3)).await;
        slot.raise("second", Severity::Success);
        tokio::time::advance(Duration::from_secs(3)).await;

        assert_eq!(slot.remaining(Instant::now()), Some(Duration::from_secs(1)));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("second"));
    }
}
