use std::time::{Duration, Instant};

/// How long a notification stays fully visible.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);
/// How long the exit fade lasts before the notification is removed.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Kind of notification to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient status message: visible for 3s, then fading for 300ms,
/// then gone.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    #[allow(dead_code)]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    /// True once the display window has elapsed and the exit fade has begun.
    pub fn is_fading(&self) -> bool {
        self.created_at.elapsed() > DISPLAY_DURATION
    }

    /// True once display plus fade have both elapsed; the notification must
    /// no longer be rendered.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > DISPLAY_DURATION + FADE_DURATION
    }

    #[allow(dead_code)]
    pub fn remaining_time(&self) -> Duration {
        (DISPLAY_DURATION + FADE_DURATION).saturating_sub(self.created_at.elapsed())
    }
}
