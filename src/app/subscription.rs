// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are the only subscription: digits jump between
//! sections, `t` cycles the theme, and Escape closes the navbar menu.
//! All timing (toasts, staggered reveals) runs on per-call tasks, so no
//! periodic tick subscription is needed.

use super::{Message, Section};
use crate::ui::navbar;
use iced::keyboard::{key::Named, Event, Key};
use iced::Subscription;

/// Creates the keyboard shortcut subscription.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::keyboard::listen().filter_map(|event| match event {
        Event::KeyPressed { key, .. } => match key.as_ref() {
            Key::Character("1") => Some(Message::ScrollToSection(Section::Home)),
            Key::Character("2") => Some(Message::ScrollToSection(Section::About)),
            Key::Character("3") => Some(Message::ScrollToSection(Section::Menu)),
            Key::Character("4") => Some(Message::ScrollToSection(Section::Contact)),
            Key::Character("t") => Some(Message::SwitchTheme),
            Key::Named(Named::Escape) => Some(Message::Navbar(navbar::Message::CloseMenu)),
            _ => None,
        },
        _ => None,
    })
}
