// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single vertical scrollable (hero, about, menu, contact);
//! the navbar and the toast overlay float above it on a stack. Scroll
//! movement is reported back through `on_scroll` so the navbar and reveal
//! state stay in sync with what is visible.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::ui::notifications::Toast;
use crate::ui::{menu_board, navbar, page};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{Column, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Renders the full page with its floating overlays.
pub fn view(app: &App) -> Element<'_, Message> {
    let board = menu_board::view(&app.menu_board).map(Message::MenuBoard);

    let page_column = Column::new()
        .width(Length::Fill)
        .push(page::hero())
        .push(page::about(&app.reveal))
        .push(page::menu_section(&app.reveal, board))
        .push(page::contact(&app.reveal));

    let scrollable = Scrollable::new(page_column)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::default()))
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let navbar_overlay = navbar::view(&app.navbar).map(Message::Navbar);
    let toast_overlay = Toast::view_overlay(&app.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable)
        .push(navbar_overlay)
        .push(toast_overlay)
        .into()
}
