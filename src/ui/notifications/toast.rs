// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts appear as small cards stacked at the bottom of the page, in
//! insertion order. A dismissing toast keeps its slot for the exit-animation
//! interval and renders faded until the sequencer detaches it. There is no
//! dismiss button: every notification runs to completion on its own timers.

use super::notification::{Notification, Phase};
use super::sequencer::{Message, Sequencer};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, text, Column, Container};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification, width: f32) -> Element<'_, Message> {
        let fading = notification.phase() == Phase::Dismissing;

        let message_widget = text(notification.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: if fading {
                        opacity::OVERLAY_MEDIUM
                    } else {
                        opacity::OPAQUE
                    },
                    ..palette::COCOA_100
                }),
            });

        Container::new(message_widget)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .style(move |_theme: &Theme| toast_container_style(fading))
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// Positions toasts at the bottom center of the surface, stacked in
    /// insertion order (oldest on top).
    pub fn view_overlay(sequencer: &Sequencer) -> Element<'_, Message> {
        let Some(surface) = sequencer.surface() else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let toasts: Vec<Element<'_, Message>> = sequencer
            .active()
            .map(|notification| Self::view(notification, surface.toast_width))
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::LG)
                .into()
        }
    }
}

/// Style function for the toast card.
fn toast_container_style(fading: bool) -> container::Style {
    let surface_alpha = if fading {
        opacity::OVERLAY_MEDIUM
    } else {
        opacity::SURFACE
    };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: surface_alpha,
            ..palette::COCOA_800
        })),
        border: iced::Border {
            color: palette::ACCENT_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::COCOA_100),
        ..Default::default()
    }
}
