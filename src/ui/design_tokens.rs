// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the café page.
//!
//! # Organization
//!
//! - **Palette**: Base colors (warm cocoa/cream brand scale)
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Layout**: Page section heights and component widths
//! - **Typography**: Font size scale
//! - **Border / Radius / Shadow**: Edge treatments
//!
//! Tokens are designed to be consistent; the compile-time validation block
//! at the bottom encodes the scale invariants.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (cocoa scale)
    pub const COCOA_100: Color = Color::from_rgb(0.96, 0.93, 0.89); // Cream
    pub const COCOA_200: Color = Color::from_rgb(0.90, 0.83, 0.74); // Latte foam
    pub const COCOA_400: Color = Color::from_rgb(0.66, 0.51, 0.37); // Milk chocolate
    pub const COCOA_500: Color = Color::from_rgb(0.48, 0.33, 0.22); // Primary cocoa
    pub const COCOA_600: Color = Color::from_rgb(0.38, 0.25, 0.16); // Dark roast
    pub const COCOA_800: Color = Color::from_rgb(0.22, 0.14, 0.09); // Espresso

    // Accent
    pub const ACCENT_500: Color = Color::from_rgb(0.85, 0.60, 0.22); // Caramel
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for semi-transparent panels (condensed navbar, toasts).
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Page Layout
// ============================================================================

pub mod layout {
    //! Fixed page geometry. Section offsets for anchor scrolling and the
    //! reveal computation are derived from these heights, so every section
    //! renders at exactly its token height.

    /// Height of the navigation bar.
    pub const NAV_HEIGHT: f32 = 64.0;

    /// Section heights, in page order.
    pub const HERO_HEIGHT: f32 = 560.0;
    pub const ABOUT_HEIGHT: f32 = 520.0;
    pub const MENU_HEIGHT: f32 = 680.0;
    pub const CONTACT_HEIGHT: f32 = 480.0;

    /// Total scrollable page height.
    pub const PAGE_HEIGHT: f32 = HERO_HEIGHT + ABOUT_HEIGHT + MENU_HEIGHT + CONTACT_HEIGHT;

    // Component widths
    pub const CONTENT_WIDTH: f32 = 720.0;
    pub const MENU_ITEM_WIDTH: f32 = 340.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand name in the navbar
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Menu item names
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Lead paragraphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Prices, fine print
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Active tab underline, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Layout validation
    assert!(layout::NAV_HEIGHT > 0.0);
    assert!(layout::HERO_HEIGHT > layout::NAV_HEIGHT);
    assert!(layout::PAGE_HEIGHT > layout::HERO_HEIGHT);
    assert!(layout::TOAST_WIDTH < layout::CONTENT_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::COCOA_500.r >= 0.0 && palette::COCOA_500.r <= 1.0);
};
