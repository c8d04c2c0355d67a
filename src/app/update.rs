// SPDX-License-Identifier: MPL-2.0
//! Message dispatch for the application.
//!
//! Component messages are routed to their owners; the events they return
//! drive cross-component effects (toasts on category changes, anchor
//! scrolling from navbar links) and diagnostics logging.

use super::{App, Message, Section, PAGE_SCROLLABLE_ID};
use crate::config;
use crate::diagnostics::{ErrorEvent, ErrorType, UserAction};
use crate::ui::{menu_board, navbar};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    let task = dispatch(app, message);
    app.diagnostics.process_pending();
    task
}

fn dispatch(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => {
            let event = navbar::update(msg, &mut app.navbar);
            match event {
                navbar::Event::None => Task::none(),
                navbar::Event::MenuToggled(open) => {
                    app.diagnostics
                        .handle()
                        .log_action(UserAction::ToggleNavMenu { open });
                    Task::none()
                }
                navbar::Event::ScrollTo(section) => scroll_to(app, section),
            }
        }
        Message::MenuBoard(msg) => {
            let (event, board_task) = menu_board::update(msg, &mut app.menu_board);
            let board_task = board_task.map(Message::MenuBoard);
            match event {
                menu_board::Event::None => board_task,
                menu_board::Event::CategorySelected(category) => {
                    app.diagnostics
                        .handle()
                        .log_action(UserAction::SelectCategory { category });
                    let toast_task = app
                        .notifications
                        .notify(format!("{} 메뉴를 보여드릴게요 ☕", category.label()))
                        .map(Message::Notification);
                    Task::batch([board_task, toast_task])
                }
            }
        }
        Message::Notification(msg) => app.notifications.update(msg).map(Message::Notification),
        Message::PageScrolled { bounds, offset } => {
            app.viewport_height = bounds.height;
            app.navbar.on_scroll(offset.y);
            app.reveal.on_scroll(offset.y, bounds.height);
            Task::none()
        }
        Message::ScrollToSection(section) => scroll_to(app, section),
        Message::SwitchTheme => {
            app.theme_mode = app.theme_mode.next();
            app.diagnostics.handle().log_action(UserAction::SwitchTheme);

            let mut saved = app.config.clone();
            saved.general.theme_mode = app.theme_mode;
            if let Err(err) = config::save(&saved) {
                app.diagnostics.handle().log_error(ErrorEvent::new(
                    ErrorType::Config,
                    format!("failed to save settings: {err}"),
                ));
            } else {
                app.config = saved;
            }
            Task::none()
        }
    }
}

/// Scrolls the page to a section anchor and records the navigation.
fn scroll_to(app: &mut App, section: Section) -> Task<Message> {
    app.diagnostics
        .handle()
        .log_action(UserAction::ScrollToSection { section });

    // The scrollable reports the new offset through on_scroll, which then
    // updates the navbar and reveal state.
    operation::scroll_to(
        Id::new(PAGE_SCROLLABLE_ID),
        AbsoluteOffset {
            x: 0.0,
            y: section.scroll_target(),
        },
    )
}
