// SPDX-License-Identifier: MPL-2.0
//! Static page sections: hero, about, and contact.
//!
//! Each section renders into its fixed layout slot so the anchor-scroll
//! offsets and the reveal computation stay in agreement with what is on
//! screen. Reveal targets render fully transparent until the reveal state
//! marks them visible.

use crate::app::Section;
use crate::ui::design_tokens::{layout, opacity, palette, radius, spacing, typography};
use crate::ui::reveal::{RevealState, RevealTarget};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Row, Text},
    Border, Color, Element, Length, Theme,
};

/// The hero section: brand headline over a cocoa backdrop.
pub fn hero<'a, M: 'a>() -> Element<'a, M> {
    let headline = Text::new("KAKAO CAFÉ")
        .size(typography::DISPLAY)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::COCOA_100),
        });
    let tagline = Text::new("진한 카카오 한 잔의 여유")
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::COCOA_200),
        });

    section_slot(
        Section::Home,
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(headline)
            .push(tagline)
            .into(),
        palette::COCOA_800,
    )
}

/// The about section with three reveal targets.
pub fn about<'a, M: 'a>(reveal: &RevealState) -> Element<'a, M> {
    let header = revealed_text(
        "카카오 카페 이야기",
        typography::TITLE_LG,
        palette::COCOA_800,
        reveal.is_revealed(RevealTarget::AboutHeader),
    );
    let body = revealed_text(
        "엄선한 카카오와 원두로 매일 아침 정성껏 준비합니다.\n동네의 작은 쉼표가 되고 싶은 공간입니다.",
        typography::BODY_LG,
        palette::GRAY_700,
        reveal.is_revealed(RevealTarget::AboutText),
    );

    let features_visible = reveal.is_revealed(RevealTarget::AboutFeatures);
    let features = Row::new()
        .spacing(spacing::LG)
        .push(feature_card("직접 로스팅", features_visible))
        .push(feature_card("수제 디저트", features_visible))
        .push(feature_card("사계절 테라스", features_visible));

    section_slot(
        Section::About,
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(header)
            .push(body)
            .push(features)
            .into(),
        palette::COCOA_100,
    )
}

/// The contact section: address lines and a map placeholder.
pub fn contact<'a, M: 'a>(reveal: &RevealState) -> Element<'a, M> {
    let header = revealed_text(
        "오시는 길",
        typography::TITLE_LG,
        palette::COCOA_100,
        reveal.is_revealed(RevealTarget::ContactHeader),
    );

    let info_visible = reveal.is_revealed(RevealTarget::ContactInfo);
    let info = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(revealed_text(
            "서울시 마포구 카카오길 12",
            typography::BODY_LG,
            palette::COCOA_200,
            info_visible,
        ))
        .push(revealed_text(
            "매일 10:00 – 22:00",
            typography::BODY,
            palette::GRAY_200,
            info_visible,
        ));

    let map_visible = reveal.is_revealed(RevealTarget::ContactMap);
    let map = Container::new(
        Text::new("지도")
            .size(typography::BODY)
            .style(move |_theme: &Theme| iced::widget::text::Style {
                color: Some(alpha_color(palette::COCOA_200, map_visible)),
            }),
    )
    .width(Length::Fixed(layout::MENU_ITEM_WIDTH))
    .height(Length::Fixed(160.0))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(alpha_color(palette::COCOA_600, map_visible).into()),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    section_slot(
        Section::Contact,
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(header)
            .push(info)
            .push(map)
            .into(),
        palette::COCOA_800,
    )
}

/// The menu section: revealed header above the menu board.
pub fn menu_section<'a, M: 'a>(reveal: &RevealState, board: Element<'a, M>) -> Element<'a, M> {
    let header = revealed_text(
        "메뉴",
        typography::TITLE_LG,
        palette::COCOA_800,
        reveal.is_revealed(RevealTarget::MenuHeader),
    );

    section_slot(
        Section::Menu,
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(header)
            .push(board)
            .into(),
        palette::COCOA_200,
    )
}

/// Wraps section content in its fixed-height slot.
pub fn section_slot<'a, M: 'a>(section: Section, content: Element<'a, M>, background: Color) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(section.height()))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn revealed_text<'a, M: 'a>(
    content: &'a str,
    size: f32,
    color: Color,
    visible: bool,
) -> Element<'a, M> {
    Text::new(content)
        .size(size)
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| iced::widget::text::Style {
            color: Some(alpha_color(color, visible)),
        })
        .into()
}

fn feature_card<'a, M: 'a>(label: &'a str, visible: bool) -> Element<'a, M> {
    Container::new(
        Text::new(label)
            .size(typography::BODY)
            .style(move |_theme: &Theme| iced::widget::text::Style {
                color: Some(alpha_color(palette::COCOA_800, visible)),
            }),
    )
    .padding(spacing::MD)
    .style(move |_theme: &Theme| container::Style {
        background: Some(alpha_color(palette::COCOA_200, visible).into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

fn alpha_color(color: Color, visible: bool) -> Color {
    Color {
        a: if visible {
            opacity::OPAQUE
        } else {
            opacity::TRANSPARENT
        },
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_render_before_and_after_reveal() {
        let mut reveal = RevealState::new();
        let _: Element<'_, ()> = hero();
        let _: Element<'_, ()> = about(&reveal);
        let _: Element<'_, ()> = contact(&reveal);

        reveal.on_scroll(layout::PAGE_HEIGHT, 600.0);
        let _: Element<'_, ()> = about(&reveal);
        let _: Element<'_, ()> = contact(&reveal);
    }

    #[test]
    fn alpha_color_toggles_only_the_alpha_channel() {
        let hidden = alpha_color(palette::COCOA_500, false);
        let shown = alpha_color(palette::COCOA_500, true);

        assert_eq!(hidden.a, opacity::TRANSPARENT);
        assert_eq!(shown.a, opacity::OPAQUE);
        assert_eq!(hidden.r, shown.r);
        assert_eq!(hidden.g, shown.g);
        assert_eq!(hidden.b, shown.b);
    }
}
