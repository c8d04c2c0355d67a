// SPDX-License-Identifier: MPL-2.0
//! Category-filtered menu board with staggered item reveal.
//!
//! Selecting a tab activates that category, drops the items of the others,
//! and reveals the active items one by one: item *i* becomes visible after
//! `i × 50 ms`, via the same deferred-message primitive the notification
//! sequencer uses. The initial reveal of the default category uses a slower
//! `i × 100 ms` stagger. Reveal messages that arrive after the category has
//! changed again are ignored.

use crate::config::defaults::{MENU_INITIAL_STAGGER_STEP_MS, MENU_STAGGER_STEP_MS};
use crate::menu::{Catalog, Category, MenuItem};
use crate::ui::defer;
use crate::ui::design_tokens::{border, layout, opacity, palette, radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Color, Element, Length, Theme,
};
use std::collections::HashSet;
use std::time::Duration;

/// Menu board state owned by the app.
#[derive(Debug, Default)]
pub struct State {
    catalog: Catalog,
    active_category: Category,
    /// Catalog indices of items that have finished their reveal delay.
    visible: HashSet<usize>,
}

/// Messages emitted by the menu board.
#[derive(Debug, Clone)]
pub enum Message {
    /// A category tab was pressed.
    SelectCategory(Category),
    /// An item's reveal delay has elapsed.
    RevealItem(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A category was selected (fires the toast).
    CategorySelected(Category),
}

impl State {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_category: Category::default(),
            visible: HashSet::new(),
        }
    }

    #[must_use]
    pub fn active_category(&self) -> Category {
        self.active_category
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Schedules the initial reveal of the default category.
    pub fn initial_reveal(&self) -> iced::Task<Message> {
        self.stagger_active(MENU_INITIAL_STAGGER_STEP_MS)
    }

    /// Indices of catalog items in the active category, in catalog order.
    fn active_indices(&self) -> Vec<usize> {
        self.catalog
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category == self.active_category)
            .map(|(index, _)| index)
            .collect()
    }

    fn stagger_active(&self, step_ms: u64) -> iced::Task<Message> {
        let tasks = self
            .active_indices()
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                defer::after(
                    Duration::from_millis(position as u64 * step_ms),
                    Message::RevealItem(index),
                )
            });
        iced::Task::batch(tasks)
    }
}

/// Process a menu board message and return the corresponding event plus
/// any scheduled reveal tasks.
pub fn update(message: Message, state: &mut State) -> (Event, iced::Task<Message>) {
    match message {
        Message::SelectCategory(category) => {
            state.active_category = category;
            state.visible.clear();
            let task = state.stagger_active(MENU_STAGGER_STEP_MS);
            (Event::CategorySelected(category), task)
        }
        Message::RevealItem(index) => {
            // Stale reveals from a previous selection are dropped
            let belongs_to_active = state
                .catalog
                .items
                .get(index)
                .is_some_and(|item| item.category == state.active_category);
            if belongs_to_active {
                state.visible.insert(index);
            }
            (Event::None, iced::Task::none())
        }
    }
}

/// Render the menu board: tabs plus the active category's items.
pub fn view(state: &State) -> Element<'_, Message> {
    let mut tabs = Row::new().spacing(spacing::SM);
    for category in Category::ALL {
        tabs = tabs.push(tab_button(category, category == state.active_category));
    }

    let mut items = Column::new().spacing(spacing::SM).width(Length::Fixed(layout::MENU_ITEM_WIDTH));
    for (index, item) in state.catalog.items.iter().enumerate() {
        if item.category != state.active_category {
            continue;
        }
        items = items.push(item_card(item, state.is_visible(index)));
    }

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(tabs)
        .push(items)
        .into()
}

fn tab_button<'a>(category: Category, active: bool) -> Element<'a, Message> {
    button(Text::new(category.label()).size(typography::BODY_LG))
        .on_press(Message::SelectCategory(category))
        .padding([spacing::XS, spacing::MD])
        .style(move |_theme: &Theme, status| tab_style(active, status))
        .into()
}

fn item_card(item: &MenuItem, visible: bool) -> Element<'_, Message> {
    let alpha = if visible {
        opacity::OPAQUE
    } else {
        opacity::TRANSPARENT
    };

    let name = Text::new(item.name.as_str())
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| iced::widget::text::Style {
            color: Some(Color {
                a: alpha,
                ..palette::COCOA_800
            }),
        });
    let description = Text::new(item.description.as_str())
        .size(typography::BODY)
        .style(move |_theme: &Theme| iced::widget::text::Style {
            color: Some(Color {
                a: alpha,
                ..palette::GRAY_700
            }),
        });
    let price = Text::new(item.price.as_str())
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| iced::widget::text::Style {
            color: Some(Color {
                a: alpha,
                ..palette::COCOA_500
            }),
        });

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Container::new(name).width(Length::Fill))
        .push(price);

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(header)
            .push(description),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(move |_theme: &Theme| container::Style {
        background: Some(
            Color {
                a: if visible {
                    opacity::SURFACE
                } else {
                    opacity::TRANSPARENT
                },
                ..palette::COCOA_100
            }
            .into(),
        ),
        border: Border {
            radius: radius::MD.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: alpha,
                ..palette::COCOA_200
            },
        },
        ..Default::default()
    })
    .into()
}

fn tab_style(active: bool, status: button::Status) -> button::Style {
    let underline = if active {
        palette::ACCENT_500
    } else {
        Color::TRANSPARENT
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(palette::COCOA_200.into()),
        _ => None,
    };

    button::Style {
        background,
        text_color: if active {
            palette::COCOA_800
        } else {
            palette::GRAY_700
        },
        border: Border {
            color: underline,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::parse(
            r#"
            [[items]]
            name = "espresso"
            description = ""
            price = "1"
            category = "coffee"

            [[items]]
            name = "latte"
            description = ""
            price = "2"
            category = "coffee"

            [[items]]
            name = "scone"
            description = ""
            price = "3"
            category = "dessert"
            "#,
        )
        .expect("inline catalog should parse")
    }

    #[test]
    fn default_category_is_coffee_with_nothing_visible() {
        let state = State::new(catalog());
        assert_eq!(state.active_category(), Category::Coffee);
        assert_eq!(state.visible_count(), 0);
    }

    #[tokio::test]
    async fn select_category_clears_visibility_and_fires_event() {
        let mut state = State::new(catalog());
        state.visible.insert(0);

        let (event, _task) = update(Message::SelectCategory(Category::Dessert), &mut state);

        assert!(matches!(event, Event::CategorySelected(Category::Dessert)));
        assert_eq!(state.active_category(), Category::Dessert);
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn reveal_marks_active_items_visible() {
        let mut state = State::new(catalog());

        let (event, _task) = update(Message::RevealItem(0), &mut state);
        assert!(matches!(event, Event::None));
        assert!(state.is_visible(0));
        assert_eq!(state.visible_count(), 1);
    }

    #[tokio::test]
    async fn stale_reveals_for_other_categories_are_dropped() {
        let mut state = State::new(catalog());
        update(Message::SelectCategory(Category::Dessert), &mut state);

        // Item 0 is coffee; its reveal was scheduled before the change
        update(Message::RevealItem(0), &mut state);
        assert!(!state.is_visible(0));

        // Item 2 is dessert and reveals normally
        update(Message::RevealItem(2), &mut state);
        assert!(state.is_visible(2));
    }

    #[test]
    fn out_of_range_reveals_are_ignored() {
        let mut state = State::new(catalog());
        update(Message::RevealItem(99), &mut state);
        assert_eq!(state.visible_count(), 0);
    }

    #[tokio::test]
    async fn reselecting_the_active_category_replays_the_stagger() {
        let mut state = State::new(catalog());
        update(Message::RevealItem(0), &mut state);
        update(Message::RevealItem(1), &mut state);
        assert_eq!(state.visible_count(), 2);

        let (event, _task) = update(Message::SelectCategory(Category::Coffee), &mut state);
        assert!(matches!(event, Event::CategorySelected(Category::Coffee)));
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn view_renders_with_and_without_visible_items() {
        let mut state = State::new(catalog());
        let _ = view(&state);

        update(Message::RevealItem(0), &mut state);
        let _ = view(&state);
    }
}
