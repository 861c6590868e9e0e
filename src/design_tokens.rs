// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the toast widget layer.
//!
//! Centralized constants so the card, title bar, and lifetime track share
//! one geometry and color vocabulary.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Severity accents
    pub const INFO_500: Color = Color::from_rgb(0.27, 0.38, 0.49);
    pub const WARNING_500: Color = Color::from_rgb(0.69, 0.5, 0.02);
    pub const ERROR_500: Color = Color::from_rgb(0.49, 0.0, 0.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Default toast window size when the caller does not request one.
    pub const TOAST_WIDTH: f32 = 250.0;
    pub const TOAST_HEIGHT: f32 = 100.0;

    /// Height of the severity-colored title bar.
    pub const TITLE_BAR_HEIGHT: f32 = 20.0;

    /// Height of the remaining-lifetime track under the title bar.
    pub const LIFETIME_TRACK: f32 = 6.0;

    /// Width of the close button in the title bar.
    pub const CLOSE_BUTTON: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast title text.
    pub const TITLE: f32 = 13.0;

    /// Toast message body.
    pub const BODY: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Separator under the title bar.
    pub const WIDTH_SM: f32 = 1.0;

    /// Card outline.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 9.2;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < 1.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::TOAST_WIDTH > sizing::TOAST_HEIGHT);
    assert!(sizing::TITLE_BAR_HEIGHT > sizing::LIFETIME_TRACK);

    assert!(typography::TITLE > typography::BODY);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
