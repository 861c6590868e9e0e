// SPDX-License-Identifier: MPL-2.0
//! Per-anchor toast registry.
//!
//! One ordered stack per anchor corner, keyed by [`Anchor`] so insertion,
//! removal, expiry, and layout are a single code path over all six corners.
//! Index 0 is the newest toast, nearest the anchor.

use crate::notification::{Anchor, NotificationId};
use crate::position::{anchor_rect, Insets};
use crate::window::ToastWindow;
use iced::Rectangle;
use std::collections::HashMap;
use std::time::Instant;

/// Tracks every active toast, grouped by anchor corner.
#[derive(Debug)]
pub struct Registry {
    stacks: HashMap<Anchor, Vec<ToastWindow>>,
    count: usize,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry with a stack for each anchor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stacks: Anchor::ALL.iter().map(|a| (*a, Vec::new())).collect(),
            count: 0,
        }
    }

    /// Inserts a window at the head of its anchor's stack (nearest the
    /// anchor).
    pub fn insert(&mut self, window: ToastWindow) {
        self.stack_mut(window.anchor()).insert(0, window);
        self.count += 1;
    }

    /// Removes a window by ID.
    ///
    /// Idempotent: removing an absent ID is a no-op returning `None`.
    pub fn remove(&mut self, id: NotificationId) -> Option<ToastWindow> {
        for anchor in Anchor::ALL {
            let stack = self.stack_mut(anchor);
            if let Some(index) = stack.iter().position(|w| w.id() == id) {
                let removed = stack.remove(index);
                self.count -= 1;
                return Some(removed);
            }
        }
        None
    }

    /// Sweeps out every toast whose lifetime has elapsed at `now`, refreshing
    /// the remaining-lifetime fraction of the survivors.
    ///
    /// Returns the closed windows. Each stack is walked in reverse so
    /// removal never invalidates the indices still to visit.
    pub fn expire(&mut self, now: Instant) -> Vec<ToastWindow> {
        let mut closed = Vec::new();
        for anchor in Anchor::ALL {
            let stack = self.stack_mut(anchor);
            for index in (0..stack.len()).rev() {
                stack[index].update_lifetime(now);
                if stack[index].is_expired(now) {
                    closed.push(stack.remove(index));
                }
            }
        }
        self.count -= closed.len();
        closed
    }

    /// Runs one layout step: every toast glides toward its stack slot.
    ///
    /// Offsets accumulate downward for top anchors and upward for bottom
    /// anchors, leaving `margin` between neighbors.
    pub fn layout(&mut self, host_bounds: Rectangle, insets: &Insets, margin: f32, dt: f32) {
        for anchor in Anchor::ALL {
            let mut offset = 0.0;
            for window in self.stack_mut(anchor) {
                let slot = anchor_rect(anchor, host_bounds, window.size(), insets);
                window.advance_position(slot, offset, dt);

                let step = window.height() + margin;
                offset += if anchor.is_top() { step } else { -step };
            }
        }
    }

    /// Force-closes every toast in every corner, returning them.
    pub fn drain(&mut self) -> Vec<ToastWindow> {
        let mut closed = Vec::new();
        for anchor in Anchor::ALL {
            let stack = self.stack_mut(anchor);
            for index in (0..stack.len()).rev() {
                closed.push(stack.remove(index));
            }
        }
        self.count = 0;
        closed
    }

    /// Returns the toasts anchored to `anchor`, newest first.
    #[must_use]
    pub fn stack(&self, anchor: Anchor) -> &[ToastWindow] {
        self.stacks
            .get(&anchor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates every active toast across all corners.
    pub fn iter(&self) -> impl Iterator<Item = &ToastWindow> {
        Anchor::ALL.iter().flat_map(|a| self.stack(*a).iter())
    }

    /// Number of active toasts across all corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no toasts are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn stack_mut(&mut self, anchor: Anchor) -> &mut Vec<ToastWindow> {
        self.stacks.entry(anchor).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Notification;
    use iced::{Point, Size};
    use std::time::Duration;

    const MARGIN: f32 = 5.0;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1600.0, 900.0))
    }

    fn open(notification: Notification, now: Instant) -> ToastWindow {
        ToastWindow::open(
            notification,
            Size::new(250.0, 100.0),
            Some(bounds()),
            &Insets::default(),
            now,
        )
    }

    #[test]
    fn count_matches_the_sum_of_all_stacks() {
        let now = Instant::now();
        let mut registry = Registry::new();
        registry.insert(open(Notification::info("a", "").anchor(Anchor::TopLeft), now));
        registry.insert(open(Notification::info("b", "").anchor(Anchor::TopLeft), now));
        registry.insert(open(
            Notification::info("c", "").anchor(Anchor::BottomRight),
            now,
        ));

        let sum: usize = Anchor::ALL.iter().map(|a| registry.stack(*a).len()).sum();
        assert_eq!(registry.len(), 3);
        assert_eq!(sum, 3);
    }

    #[test]
    fn newest_toast_sits_at_the_head_of_its_stack() {
        let now = Instant::now();
        let mut registry = Registry::new();
        let first = open(Notification::info("first", ""), now);
        let second = open(Notification::info("second", ""), now);
        let second_id = second.id();

        registry.insert(first);
        registry.insert(second);

        assert_eq!(registry.stack(Anchor::TopRight)[0].id(), second_id);
    }

    #[test]
    fn remove_is_idempotent() {
        let now = Instant::now();
        let mut registry = Registry::new();
        let window = open(Notification::info("t", ""), now);
        let id = window.id();
        registry.insert(window);

        assert!(registry.remove(id).is_some());
        assert!(registry.remove(id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn expire_closes_only_elapsed_toasts() {
        let created = Instant::now();
        let mut registry = Registry::new();
        registry.insert(open(
            Notification::info("short", "").lifetime(Duration::from_secs(3)),
            created,
        ));
        registry.insert(open(
            Notification::info("long", "").lifetime(Duration::from_secs(9)),
            created,
        ));
        registry.insert(open(Notification::error("sticky", "").sticky(), created));

        let closed = registry.expire(created + Duration::from_millis(3_100));
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].notification().title(), "short");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn layout_stacks_top_anchored_toasts_downward_without_overlap() {
        let now = Instant::now();
        let mut registry = Registry::new();
        for title in ["a", "b", "c"] {
            registry.insert(open(
                Notification::info(title, "").anchor(Anchor::TopRight),
                now,
            ));
        }

        // Run enough fixed steps for every toast to snap to its slot.
        for _ in 0..200 {
            registry.layout(bounds(), &Insets::default(), MARGIN, 1.0 / 30.0);
        }

        let stack = registry.stack(Anchor::TopRight);
        for pair in stack.windows(2) {
            let (nearer, farther) = (pair[0].current_rect(), pair[1].current_rect());
            assert!(
                farther.y >= nearer.y + nearer.height + MARGIN,
                "stacks must not overlap"
            );
        }
    }

    #[test]
    fn layout_stacks_bottom_anchored_toasts_upward() {
        let now = Instant::now();
        let mut registry = Registry::new();
        for title in ["a", "b"] {
            registry.insert(open(
                Notification::info(title, "").anchor(Anchor::BottomLeft),
                now,
            ));
        }

        for _ in 0..200 {
            registry.layout(bounds(), &Insets::default(), MARGIN, 1.0 / 30.0);
        }

        let stack = registry.stack(Anchor::BottomLeft);
        let nearer = stack[0].current_rect();
        let farther = stack[1].current_rect();
        assert!(
            farther.y + farther.height + MARGIN <= nearer.y,
            "bottom stacks grow upward"
        );
    }

    #[test]
    fn drain_empties_every_corner() {
        let now = Instant::now();
        let mut registry = Registry::new();
        registry.insert(open(Notification::info("a", "").anchor(Anchor::TopLeft), now));
        registry.insert(open(
            Notification::info("b", "").anchor(Anchor::BottomCenter),
            now,
        ));
        registry.insert(open(
            Notification::info("c", "").anchor(Anchor::TopRight),
            now,
        ));

        let closed = registry.drain();
        assert_eq!(closed.len(), 3);
        assert!(registry.is_empty());
        for anchor in Anchor::ALL {
            assert!(registry.stack(anchor).is_empty());
        }
    }
}
