// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub accent: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (cream surfaces, espresso text).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::COCOA_100,
            surface_secondary: palette::COCOA_200,

            text_primary: palette::COCOA_800,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::COCOA_500,
            brand_secondary: palette::COCOA_600,
            accent: palette::ACCENT_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::COCOA_800
            },
            overlay_text: palette::COCOA_100,
        }
    }

    /// Dark theme (espresso surfaces, cream text).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::COCOA_800,
            surface_secondary: palette::COCOA_600,

            text_primary: palette::COCOA_100,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::COCOA_400,
            brand_secondary: palette::COCOA_200,
            accent: palette::ACCENT_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::COCOA_100,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark on detection error
        }
    }
}

/// Global theme configuration.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Cycles Light → Dark → System → Light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}
