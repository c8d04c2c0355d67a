// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with anchor links and a collapsible menu.
//!
//! The bar condenses once the page is scrolled past a small threshold
//! (stronger background, shadow) and expands again at the top. The link
//! menu can be collapsed behind a toggle; choosing a link closes the menu
//! and asks the app to scroll to the target section.

use crate::app::Section;
use crate::config::defaults::NAV_CONDENSE_THRESHOLD;
use crate::ui::design_tokens::{layout, opacity, palette, radius, shadow, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Text},
    Border, Color, Element, Length, Theme,
};

/// Navbar state owned by the app.
#[derive(Debug, Default)]
pub struct State {
    /// Whether the page is scrolled past the condensation threshold.
    condensed: bool,
    /// Whether the collapsible link menu is open.
    menu_open: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the condensed flag from the current scroll offset.
    pub fn on_scroll(&mut self, offset: f32) {
        self.condensed = offset > NAV_CONDENSE_THRESHOLD;
    }

    #[must_use]
    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    LinkClicked(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The menu was opened or closed.
    MenuToggled(bool),
    /// A link requested a scroll to this section.
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::MenuToggled(state.menu_open)
        }
        Message::CloseMenu => {
            state.menu_open = false;
            Event::None
        }
        Message::LinkClicked(section) => {
            state.menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Render the navigation bar.
pub fn view(state: &State) -> Element<'_, Message> {
    let condensed = state.condensed;

    let brand = Text::new("KAKAO CAFÉ")
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::COCOA_100),
        });

    let toggle_button = button(Text::new(if state.menu_open { "✕" } else { "☰" }))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(link_style);

    let bar = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::space::horizontal())
        .push(toggle_button);

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(bar)
            .width(Length::Fill)
            .height(Length::Fixed(layout::NAV_HEIGHT))
            .style(move |_theme: &Theme| bar_style(condensed)),
    );

    if state.menu_open {
        content = content.push(build_link_menu());
    }

    content.into()
}

/// Build the dropdown with one link per section.
fn build_link_menu<'a>() -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);
    for section in Section::ALL {
        let link = button(Text::new(section.label()).size(typography::BODY))
            .on_press(Message::LinkClicked(section))
            .padding([spacing::XS, spacing::MD])
            .width(Length::Fill)
            .style(link_style);
        menu_column = menu_column.push(link);
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: opacity::SURFACE,
                    ..palette::COCOA_800
                }
                .into(),
            ),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: palette::COCOA_600,
            },
            ..Default::default()
        })
        .into()
}

/// Style function for the bar container.
fn bar_style(condensed: bool) -> container::Style {
    if condensed {
        container::Style {
            background: Some(
                Color {
                    a: opacity::SURFACE,
                    ..palette::COCOA_800
                }
                .into(),
            ),
            shadow: shadow::SM,
            ..Default::default()
        }
    } else {
        container::Style {
            background: Some(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::COCOA_800
                }
                .into(),
            ),
            ..Default::default()
        }
    }
}

/// Style function for links and the menu toggle.
fn link_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::COCOA_100,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette::COCOA_600.into()),
            text_color: palette::COCOA_100,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_past_threshold_condenses_the_bar() {
        let mut state = State::new();
        assert!(!state.is_condensed());

        state.on_scroll(NAV_CONDENSE_THRESHOLD + 1.0);
        assert!(state.is_condensed());

        state.on_scroll(NAV_CONDENSE_THRESHOLD);
        assert!(!state.is_condensed());
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut state = State::new();
        let event = update(Message::ToggleMenu, &mut state);
        assert!(state.is_menu_open());
        assert!(matches!(event, Event::MenuToggled(true)));

        let event = update(Message::ToggleMenu, &mut state);
        assert!(!state.is_menu_open());
        assert!(matches!(event, Event::MenuToggled(false)));
    }

    #[test]
    fn link_click_closes_menu_and_emits_scroll_event() {
        let mut state = State::new();
        update(Message::ToggleMenu, &mut state);

        let event = update(Message::LinkClicked(Section::Menu), &mut state);
        assert!(!state.is_menu_open());
        assert!(matches!(event, Event::ScrollTo(Section::Menu)));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut state = State::new();
        let event = update(Message::CloseMenu, &mut state);
        assert!(!state.is_menu_open());
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn navbar_view_renders_in_both_states() {
        let mut state = State::new();
        let _ = view(&state);

        update(Message::ToggleMenu, &mut state);
        state.on_scroll(200.0);
        let _ = view(&state);
    }
}
