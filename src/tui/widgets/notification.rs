//! Status bar notifications
//!
//! Short messages reporting the outcome of the last interaction: a saved
//! transaction, an empty result, or a store failure.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Error => "x",
        }
    }

    /// How long the message stays visible
    fn lifetime(&self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_secs(4),
            Self::Error => Duration::from_secs(10),
        }
    }
}

/// A message shown in the status bar until it expires
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Check if the notification has outlived its kind's lifetime
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.kind.lifetime()
    }

    /// Styled span for the status bar
    pub fn to_span(&self) -> Span<'_> {
        Span::styled(
            format!(" {} {} ", self.kind.icon(), self.message),
            Style::default()
                .fg(self.kind.color())
                .add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::error("Store request failed");
        assert_eq!(n.kind, NotificationKind::Error);
        assert!(!n.is_expired());
        assert_eq!(n.to_span().content, " x Store request failed ");
    }

    #[test]
    fn test_notification_colors() {
        assert_eq!(NotificationKind::Info.color(), Color::Blue);
        assert_eq!(NotificationKind::Success.color(), Color::Green);
        assert_eq!(NotificationKind::Error.color(), Color::Red);
    }
}
