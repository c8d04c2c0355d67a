// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use kakao_cafe::ui::design_tokens::{layout, opacity, palette, spacing, typography};
    use kakao_cafe::ui::theming::{AppTheme, ColorScheme, ThemeMode};

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::COCOA_500;
        let _ = palette::ACCENT_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Layout
        let _ = layout::NAV_HEIGHT;
        let _ = layout::TOAST_WIDTH;
    }

    #[test]
    fn section_heights_fill_the_page() {
        let sum = layout::HERO_HEIGHT
            + layout::ABOUT_HEIGHT
            + layout::MENU_HEIGHT
            + layout::CONTACT_HEIGHT;
        assert_eq!(sum, layout::PAGE_HEIGHT);
    }

    #[test]
    fn typography_scale_is_strictly_decreasing() {
        let scale = [
            typography::DISPLAY,
            typography::TITLE_LG,
            typography::TITLE_MD,
            typography::TITLE_SM,
            typography::BODY_LG,
            typography::BODY,
            typography::CAPTION,
        ];
        for pair in scale.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        assert_ne!(
            light.colors.surface_primary, dark.colors.surface_primary,
            "Light and dark surfaces must differ"
        );
        assert_ne!(light.colors.text_primary, dark.colors.text_primary);
    }

    #[test]
    fn both_schemes_keep_text_away_from_their_surface() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            let surface = scheme.surface_primary;
            let text = scheme.text_primary;
            let delta = (surface.r - text.r).abs()
                + (surface.g - text.g).abs()
                + (surface.b - text.b).abs();
            assert!(delta > 1.0, "Text must contrast with the surface");
        }
    }

    #[test]
    fn theme_mode_cycle_visits_every_mode() {
        let mut mode = ThemeMode::System;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.next();
            seen.push(mode);
        }
        assert!(seen.contains(&ThemeMode::Light));
        assert!(seen.contains(&ThemeMode::Dark));
        assert!(seen.contains(&ThemeMode::System));
    }
}
