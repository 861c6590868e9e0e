// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides transient, corner-anchored toast notifications for
//! applications built with the Iced GUI framework.
//!
//! Toasts anchor to one of six corners of the host window, stack vertically
//! without overlapping, glide into place as neighbors come and go,
//! auto-dismiss after a lifetime (or persist until closed), and optionally
//! play an arrival sound through an injected [`host::Chime`].
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::{Anchor, Notification, ToastManager};
//!
//! // Bind the manager to the host window (here: a fixed viewport).
//! let mut toasts = ToastManager::new(Box::new(viewport));
//!
//! // Post a toast.
//! toasts.show(Notification::warning("Disk", "Scratch volume nearly full")
//!     .anchor(Anchor::BottomRight));
//!
//! // In the application: forward messages, subscribe, and render.
//! // toasts.update(message);
//! // toasts.subscription().map(AppMessage::Toast);
//! // stack![content, toasts.view().map(AppMessage::Toast)]
//! ```

pub mod config;
pub mod design_tokens;
pub mod driver;
pub mod error;
pub mod host;
pub mod manager;
pub mod notification;
pub mod position;
pub mod registry;
pub mod toast;
pub mod window;

pub use host::{Chime, HostWindow, Silent};
pub use manager::{Message, ToastManager};
pub use notification::{Anchor, Notification, NotificationId, Severity};
pub use toast::Toast;
pub use window::ToastWindow;
