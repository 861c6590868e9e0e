// SPDX-License-Identifier: MPL-2.0
//! A single toast window: its notification, lifetime clock, and animated
//! on-screen rectangle.

use crate::notification::{Anchor, Notification, NotificationId};
use crate::position::{anchor_rect, Insets};
use iced::{Rectangle, Size};
use std::time::Instant;

/// Glide rate toward the target position, in units of `dt`.
const POSITION_SPEED: f32 = 10.0;

/// Below this vertical distance the toast snaps straight to its target,
/// avoiding jitter from tiny residual deltas.
const POSITION_THRESHOLD: f32 = 0.1;

/// One live toast.
///
/// Construction places the window at its anchor; every subsequent layout
/// pass moves it toward wherever its stack slot currently is.
#[derive(Debug, Clone)]
pub struct ToastWindow {
    notification: Notification,
    created_at: Instant,
    size: Size,
    current: Rectangle,
    /// Remaining lifetime as a 0..=1 fraction, shown by the lifetime track.
    remaining: f32,
}

impl ToastWindow {
    /// Opens a toast window of `size` for `notification`, placed at its
    /// anchor within `host_bounds`.
    ///
    /// When the host bounds are unknown the window starts at the origin and
    /// the first layout pass with live bounds moves it into place.
    #[must_use]
    pub fn open(
        notification: Notification,
        size: Size,
        host_bounds: Option<Rectangle>,
        insets: &Insets,
        now: Instant,
    ) -> Self {
        let anchor = notification.anchor_corner();
        let current = match host_bounds {
            Some(bounds) => anchor_rect(anchor, bounds, size, insets),
            None => Rectangle::new(iced::Point::ORIGIN, size),
        };

        Self {
            notification,
            created_at: now,
            size,
            current,
            remaining: 1.0,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.notification.id()
    }

    /// Returns the anchor corner this window belongs to.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.notification.anchor_corner()
    }

    /// Returns the notification being displayed.
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Returns the window's requested size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the window's current (possibly mid-glide) rectangle.
    #[must_use]
    pub fn current_rect(&self) -> Rectangle {
        self.current
    }

    /// Returns the window's current rendered height, used to stack siblings.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.current.height
    }

    /// Moves the window toward its stack slot.
    ///
    /// The slot is `anchor_rect` shifted vertically by `stack_offset` (the
    /// accumulated heights of the siblings nearer the anchor). The
    /// horizontal coordinate snaps immediately; the vertical coordinate
    /// glides, snapping once within [`POSITION_THRESHOLD`].
    pub fn advance_position(&mut self, anchor_rect: Rectangle, stack_offset: f32, dt: f32) {
        let target_y = anchor_rect.y + stack_offset;
        self.current.x = anchor_rect.x;

        let delta = target_y - self.current.y;
        if delta.abs() < POSITION_THRESHOLD {
            self.current.y = target_y;
        } else {
            let t = (POSITION_SPEED * dt).min(1.0);
            self.current.y += delta * t;
        }
    }

    /// Whether the toast's lifetime has elapsed at `now`.
    ///
    /// Sticky toasts never expire.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.notification.lifetime_duration() {
            Some(lifetime) => now.duration_since(self.created_at) > lifetime,
            None => false,
        }
    }

    /// Refreshes the remaining-lifetime fraction shown by the lifetime track.
    pub fn update_lifetime(&mut self, now: Instant) {
        if let Some(lifetime) = self.notification.lifetime_duration() {
            let elapsed = now.duration_since(self.created_at).as_secs_f32();
            self.remaining = (1.0 - elapsed / lifetime.as_secs_f32()).clamp(0.0, 1.0);
        }
    }

    /// Remaining lifetime as a 0..=1 fraction. Always 1.0 for sticky toasts.
    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Notification;
    use iced::Point;
    use std::time::Duration;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1600.0, 900.0))
    }

    fn open_at(notification: Notification, now: Instant) -> ToastWindow {
        ToastWindow::open(
            notification,
            Size::new(250.0, 100.0),
            Some(bounds()),
            &Insets::default(),
            now,
        )
    }

    #[test]
    fn opens_at_its_anchor_rect() {
        let window = open_at(
            Notification::info("t", "m").anchor(Anchor::TopLeft),
            Instant::now(),
        );
        let expected = anchor_rect(
            Anchor::TopLeft,
            bounds(),
            Size::new(250.0, 100.0),
            &Insets::default(),
        );
        assert_eq!(window.current_rect(), expected);
    }

    #[test]
    fn expires_just_after_its_lifetime_and_not_before() {
        let created = Instant::now();
        let window = open_at(
            Notification::info("t", "m").lifetime(Duration::from_secs(3)),
            created,
        );

        let just_before = created + Duration::from_millis(2_999);
        let just_after = created + Duration::from_millis(3_001);
        assert!(!window.is_expired(just_before));
        assert!(window.is_expired(just_after));
    }

    #[test]
    fn sticky_toast_never_expires() {
        let created = Instant::now();
        let window = open_at(Notification::error("t", "m").sticky(), created);

        let far_future = created + Duration::from_secs(60 * 60 * 24);
        assert!(!window.is_expired(far_future));
        assert_eq!(window.remaining_fraction(), 1.0);
    }

    #[test]
    fn lifetime_fraction_counts_down_and_clamps() {
        let created = Instant::now();
        let mut window = open_at(
            Notification::info("t", "m").lifetime(Duration::from_secs(10)),
            created,
        );

        window.update_lifetime(created + Duration::from_secs(5));
        assert!((window.remaining_fraction() - 0.5).abs() < 0.01);

        window.update_lifetime(created + Duration::from_secs(30));
        assert_eq!(window.remaining_fraction(), 0.0);
    }

    #[test]
    fn advance_position_converges_within_a_bounded_number_of_steps() {
        let mut window = open_at(
            Notification::info("t", "m").anchor(Anchor::TopRight),
            Instant::now(),
        );
        let target = window.current_rect();

        // Start 300 units away from the slot.
        let offset = 300.0;
        let dt = 1.0 / 30.0;

        let mut steps = 0;
        loop {
            window.advance_position(target, offset, dt);
            steps += 1;
            if window.current_rect().y == target.y + offset {
                break;
            }
            assert!(steps < 60, "glide did not converge");
        }
        // ~0.33 decay per step from 300 units needs well under 40 steps.
        assert!(steps <= 40);
    }

    #[test]
    fn advance_position_snaps_horizontally() {
        let mut window = open_at(
            Notification::info("t", "m").anchor(Anchor::TopLeft),
            Instant::now(),
        );
        let mut slot = window.current_rect();
        slot.x += 500.0;

        window.advance_position(slot, 0.0, 1.0 / 30.0);
        assert_eq!(window.current_rect().x, slot.x);
    }

    #[test]
    fn missing_bounds_places_the_window_at_the_origin() {
        let window = ToastWindow::open(
            Notification::info("t", "m"),
            Size::new(250.0, 100.0),
            None,
            &Insets::default(),
            Instant::now(),
        );
        assert_eq!(window.current_rect().x, 0.0);
        assert_eq!(window.current_rect().y, 0.0);
    }
}
