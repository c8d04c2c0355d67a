// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Section;
use crate::ui::menu_board;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    MenuBoard(menu_board::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved; drives navbar condensation and reveals.
    PageScrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Jump to a section (keyboard shortcut or navbar link).
    ScrollToSection(Section),
    /// Cycle the theme mode.
    SwitchTheme,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme mode override (`light`, `dark`, or `system`).
    pub theme: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `KAKAO_CAFE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
