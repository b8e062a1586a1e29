//! User-facing notifications
//!
//! Every operation outcome is reported as a short categorized message that
//! disappears on its own after a few seconds and a brief fade.

use std::time::{Duration, Instant};

/// Display duration before a notification starts fading
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Fade-out duration
pub const DEFAULT_FADE: Duration = Duration::from_millis(500);

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Label used when a notification is printed as plain text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// A transient message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Duration,
    pub fade: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
            fade: DEFAULT_FADE,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Override display and fade timings
    pub fn with_timing(mut self, duration: Duration, fade: Duration) -> Self {
        self.duration = duration;
        self.fade = fade;
        self
    }

    /// Past its display time but not yet gone
    pub fn is_fading(&self) -> bool {
        self.is_fading_at(self.created_at.elapsed())
    }

    /// Fully dismissed
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(self.created_at.elapsed())
    }

    fn is_fading_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration && !self.is_expired_at(elapsed)
    }

    fn is_expired_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration + self.fade
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop notifications that have finished fading
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification to display now (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}
