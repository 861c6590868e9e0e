// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` is the public entry point: it opens toast windows,
//! tracks them in the per-corner registry, runs the fixed-step update loop
//! (expiry + layout), and force-closes everything on shutdown.

use crate::config::Config;
use crate::driver::{FixedStep, STEP, STEP_SECS};
use crate::host::{Chime, HostWindow, Silent};
use crate::notification::{Anchor, Notification, NotificationId};
use crate::registry::Registry;
use crate::toast::Toast;
use crate::window::ToastWindow;
use iced::{time, Element, Size, Subscription};
use std::time::Instant;
use tracing::{debug, warn};

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(NotificationId),
    /// Advance the update loop to the given instant.
    Tick(Instant),
}

/// Creates, tracks, and closes toast windows.
pub struct ToastManager {
    registry: Registry,
    pacer: FixedStep,
    config: Config,
    host: Box<dyn HostWindow>,
    chime: Box<dyn Chime>,
}

impl ToastManager {
    /// Creates a manager bound to `host`, with default tuning and no sound.
    #[must_use]
    pub fn new(host: Box<dyn HostWindow>) -> Self {
        Self {
            registry: Registry::new(),
            pacer: FixedStep::new(),
            config: Config::default(),
            host,
            chime: Box::new(Silent),
        }
    }

    /// Replaces the engine tuning.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Injects the arrival-sound capability.
    #[must_use]
    pub fn with_chime(mut self, chime: Box<dyn Chime>) -> Self {
        self.chime = chime;
        self
    }

    /// Shows a toast at the default window size.
    pub fn show(&mut self, notification: Notification) -> NotificationId {
        self.show_sized(notification, None)
    }

    /// Shows a toast, sized to `size` or the configured default.
    pub fn show_sized(
        &mut self,
        notification: Notification,
        size: Option<Size>,
    ) -> NotificationId {
        self.show_at(notification, size, Instant::now())
    }

    /// Shows a toast with an explicit creation instant.
    ///
    /// The lifetime clock starts at `now`; tests drive this directly with
    /// simulated time.
    pub fn show_at(
        &mut self,
        notification: Notification,
        size: Option<Size>,
        now: Instant,
    ) -> NotificationId {
        let size = size.unwrap_or_else(|| self.config.default_window_size());
        let bounds = self.host.bounds();
        if bounds.is_none() {
            warn!("host window bounds unavailable, placing toast at the origin");
        }

        let window = ToastWindow::open(notification, size, bounds, &self.config.insets, now);
        let id = window.id();

        if self.registry.is_empty() {
            // Waking from idle: don't replay the idle period as catch-up steps.
            self.pacer.reset();
        }
        self.registry.insert(window);

        self.chime.play();
        self.host.request_redraw();
        id
    }

    /// Closes a toast by ID. Dismissing an already-closed toast is a no-op.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let removed = self.registry.remove(id).is_some();
        if removed {
            self.host.request_redraw();
        }
        removed
    }

    /// Advances the update loop to `now`.
    ///
    /// Runs zero or more fixed steps: each step sweeps out expired toasts,
    /// then re-stacks every corner against freshly queried host bounds. A
    /// no-op while no toasts are active.
    pub fn tick(&mut self, now: Instant) {
        if self.registry.is_empty() {
            return;
        }

        for _ in 0..self.pacer.advance(now) {
            let closed = self.registry.expire(now);
            if !closed.is_empty() {
                debug!(count = closed.len(), "toasts expired");
            }

            match self.host.bounds() {
                Some(bounds) => {
                    self.registry
                        .layout(bounds, &self.config.insets, self.config.margin, STEP_SECS);
                }
                None => warn!("host window bounds unavailable, skipping toast layout"),
            }
        }

        self.host.request_redraw();
    }

    /// Force-closes every toast in every corner.
    ///
    /// The host-teardown path: no toast survives it. The manager stays
    /// usable; a later `show` starts the loop again.
    pub fn shutdown(&mut self) {
        let closed = self.registry.drain();
        if !closed.is_empty() {
            debug!(count = closed.len(), "force-closed all toasts");
            self.host.request_redraw();
        }
        self.pacer.reset();
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// The update-loop subscription: a fixed-rate tick while any toast is
    /// active, nothing otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.registry.is_empty() {
            Subscription::none()
        } else {
            time::every(STEP).map(Message::Tick)
        }
    }

    /// Renders the toast overlay.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(self)
    }

    /// Number of active toasts across all corners.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.registry.len()
    }

    /// Whether no toasts are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The toasts anchored to `anchor`, newest first.
    #[must_use]
    pub fn stack(&self, anchor: Anchor) -> &[ToastWindow] {
        self.registry.stack(anchor)
    }

    /// Iterates every active toast across all corners.
    pub fn toasts(&self) -> impl Iterator<Item = &ToastWindow> {
        self.registry.iter()
    }

    /// Current host window bounds, if available.
    #[must_use]
    pub fn host_bounds(&self) -> Option<iced::Rectangle> {
        self.host.bounds()
    }

    /// The engine tuning in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastManager")
            .field("registry", &self.registry)
            .field("pacer", &self.pacer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
