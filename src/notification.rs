// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct together with the
//! `Severity` and `Anchor` enums used throughout the toast system.

use crate::design_tokens::palette;
use crate::manager::Message;
use iced::{Color, Element};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Lifetime applied when a notification does not set one explicitly.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(5);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level, drives the accent color of the title bar and
/// lifetime track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (steel blue).
    #[default]
    Info,
    /// Warning that doesn't block operation (amber).
    Warning,
    /// Error requiring attention (dark red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Screen-relative corner a toast stacks from.
///
/// Toasts anchored to a top corner stack downward; toasts anchored to a
/// bottom corner stack upward. Center anchors are centered horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// All six anchors, in layout-pass order.
    pub const ALL: [Anchor; 6] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Whether this anchor sits on the top edge (stacks grow downward).
    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight)
    }
}

/// Deferred producer of an extra content block shown under the message.
pub type ContentFactory = Rc<dyn Fn() -> Element<'static, Message>>;

/// A notification to be displayed as a toast.
#[derive(Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: String,
    message: String,
    anchor: Anchor,
    /// `None` means the toast never times out.
    lifetime: Option<Duration>,
    content: Option<ContentFactory>,
}

impl Notification {
    /// Creates a new notification with the given severity, title, and message.
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: title.into(),
            message: message.into(),
            anchor: Anchor::default(),
            lifetime: Some(DEFAULT_LIFETIME),
            content: None,
        }
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }

    /// Creates a warning notification.
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, message)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    /// Sets the corner this toast anchors to.
    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the auto-dismiss lifetime.
    #[must_use]
    pub fn lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Makes the toast persist until manually dismissed.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.lifetime = None;
        self
    }

    /// Attaches a custom content block, rendered under the message.
    ///
    /// The factory is invoked at render time, once per frame the toast is
    /// visible.
    #[must_use]
    pub fn with_content(mut self, factory: ContentFactory) -> Self {
        self.content = Some(factory);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the anchor corner.
    #[must_use]
    pub fn anchor_corner(&self) -> Anchor {
        self.anchor
    }

    /// Returns the auto-dismiss lifetime, `None` for sticky toasts.
    #[must_use]
    pub fn lifetime_duration(&self) -> Option<Duration> {
        self.lifetime
    }

    /// Returns the custom content factory, if any.
    #[must_use]
    pub fn content(&self) -> Option<&ContentFactory> {
        self.content.as_ref()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("anchor", &self.anchor)
            .field("lifetime", &self.lifetime)
            .field("content", &self.content.as_ref().map(|_| "<factory>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::info("a", "b");
        let n2 = Notification::info("a", "b");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::info("", "").severity(), Severity::Info);
        assert_eq!(Notification::warning("", "").severity(), Severity::Warning);
        assert_eq!(Notification::error("", "").severity(), Severity::Error);
    }

    #[test]
    fn default_lifetime_is_applied() {
        let n = Notification::info("t", "m");
        assert_eq!(n.lifetime_duration(), Some(DEFAULT_LIFETIME));
    }

    #[test]
    fn sticky_clears_the_lifetime() {
        let n = Notification::info("t", "m").sticky();
        assert_eq!(n.lifetime_duration(), None);
    }

    #[test]
    fn builder_sets_anchor_and_lifetime() {
        let n = Notification::warning("t", "m")
            .anchor(Anchor::BottomCenter)
            .lifetime(Duration::from_secs(9));

        assert_eq!(n.anchor_corner(), Anchor::BottomCenter);
        assert_eq!(n.lifetime_duration(), Some(Duration::from_secs(9)));
    }

    #[test]
    fn top_anchors_report_is_top() {
        assert!(Anchor::TopLeft.is_top());
        assert!(Anchor::TopCenter.is_top());
        assert!(Anchor::TopRight.is_top());
        assert!(!Anchor::BottomLeft.is_top());
        assert!(!Anchor::BottomCenter.is_top());
        assert!(!Anchor::BottomRight.is_top());
    }

    #[test]
    fn all_lists_each_anchor_once() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::ALL.iter().filter(|a| **a == anchor).count(), 1);
        }
    }
}
