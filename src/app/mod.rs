// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the navbar, menu board, reveal state,
//! and notification sequencer, and translates messages into side effects
//! like config persistence or anchor scrolling. This file keeps policy
//! decisions (window size, theme resolution, startup reveals) close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::Section;

use crate::config::{self, Config};
use crate::diagnostics::{
    DiagnosticsCollector, ErrorEvent, ErrorType, WarningEvent, WarningType,
};
use crate::menu::Catalog;
use crate::ui::menu_board;
use crate::ui::navbar;
use crate::ui::notifications::{Sequencer, Surface};
use crate::ui::reveal::RevealState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Identifier of the single page scrollable, used by anchor navigation.
pub const PAGE_SCROLLABLE_ID: &str = "cafe-page";

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state that bridges the page components,
/// persisted preferences, and diagnostics.
pub struct App {
    config: Config,
    theme_mode: ThemeMode,
    navbar: navbar::State,
    menu_board: menu_board::State,
    reveal: RevealState,
    /// Toast notification sequencer for user feedback.
    notifications: Sequencer,
    /// Height of the visible page area, tracked from scroll reports.
    viewport_height: f32,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("active_toasts", &self.notifications.active_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: Config::default(),
            theme_mode: ThemeMode::System,
            navbar: navbar::State::new(),
            menu_board: menu_board::State::new(Catalog::default()),
            reveal: RevealState::new(),
            notifications: Sequencer::new(Surface::default()),
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            diagnostics: DiagnosticsCollector::default(),
        }
    }
}

/// Builds the window settings, honoring a remembered size.
pub fn window_settings(remembered: &config::WindowConfig) -> window::Settings {
    let width = remembered
        .width
        .unwrap_or(WINDOW_DEFAULT_WIDTH)
        .max(MIN_WINDOW_WIDTH);
    let height = remembered
        .height
        .unwrap_or(WINDOW_DEFAULT_HEIGHT)
        .max(MIN_WINDOW_HEIGHT);

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    if let Some(dir) = &flags.config_dir {
        std::env::set_var("KAKAO_CAFE_CONFIG_DIR", dir);
    }
    // Window settings are needed before boot runs; any load warning is
    // reported again by App::new through diagnostics
    let (startup_config, _) = config::load();
    let settings = window_settings(&startup_config.window);

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and schedules the initial menu reveal.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Some(dir) = &flags.config_dir {
            std::env::set_var("KAKAO_CAFE_CONFIG_DIR", dir);
        }

        let mut app = App::default();
        let handle = app.diagnostics.handle();

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            handle.log_warning(WarningEvent::new(WarningType::Config, warning));
        }
        app.theme_mode = flags
            .theme
            .as_deref()
            .and_then(parse_theme_mode)
            .unwrap_or(config.general.theme_mode);
        app.config = config;

        match Catalog::load() {
            Ok(catalog) => {
                app.menu_board = menu_board::State::new(catalog);
            }
            Err(err) => {
                // The board renders empty; the page itself stays usable
                handle.log_error(ErrorEvent::new(ErrorType::Catalog, err.to_string()));
            }
        }

        // Targets already inside the startup viewport reveal immediately
        app.reveal.on_scroll(0.0, app.viewport_height);

        let reveal_task = app.menu_board.initial_reveal().map(Message::MenuBoard);
        app.diagnostics.process_pending();
        (app, reveal_task)
    }

    fn title(&self) -> String {
        String::from("KAKAO CAFÉ")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::keyboard_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

fn parse_theme_mode(value: &str) -> Option<ThemeMode> {
    match value {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        "system" => Some(ThemeMode::System),
        _ => None,
    }
}
