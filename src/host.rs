// SPDX-License-Identifier: MPL-2.0
//! Host-side capabilities the toast engine calls into.
//!
//! The engine never talks to a window system or audio device directly; the
//! embedding application injects these traits.

use iced::Rectangle;

/// Window-bounds query and redraw signal for the hosting window.
///
/// `bounds` is re-queried on every layout step so the toast stack follows
/// host window moves and resizes; implementations must not cache stale
/// geometry.
pub trait HostWindow {
    /// Current bounds of the hosting window in screen coordinates, or
    /// `None` when the window handle is unavailable.
    fn bounds(&self) -> Option<Rectangle>;

    /// Asks the host to schedule a redraw after a layout step.
    fn request_redraw(&self) {}
}

/// A fixed viewport. Useful when the toast layer spans the whole window and
/// the embedder already tracks its size, and in tests.
impl HostWindow for Rectangle {
    fn bounds(&self) -> Option<Rectangle> {
        Some(*self)
    }
}

/// Fire-and-forget arrival sound.
///
/// Playback is best-effort: implementations swallow their own failures, and
/// the engine never blocks notification delivery on audio.
pub trait Chime {
    fn play(&self);
}

/// The default chime: silence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Chime for Silent {
    fn play(&self) {}
}
