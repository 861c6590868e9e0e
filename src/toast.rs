// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Each toast is a small bordered card: a severity-colored title bar with a
//! close button, a draining lifetime track, the message body, and an
//! optional custom content block. The overlay places every card at its
//! window's animated rectangle.

use crate::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::manager::{Message, ToastManager};
use crate::notification::Anchor;
use crate::window::ToastWindow;
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, font, Background, Color, Element, Font, Length, Padding, Rectangle, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view(window: &ToastWindow) -> Element<'_, Message> {
        let notification = window.notification();
        let accent = notification.severity().color();
        let size = window.size();

        let title = Text::new(notification.title())
            .size(typography::TITLE)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            });

        let close_button = button(Text::new("X").size(typography::BODY))
            .on_press(Message::Dismiss(window.id()))
            .padding(spacing::XXS)
            .style(move |theme, status| close_button_style(theme, status, accent));

        let title_bar = Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(
                    Container::new(title)
                        .width(Length::Fill)
                        .padding(Padding::ZERO.left(spacing::XS)),
                )
                .push(close_button),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TITLE_BAR_HEIGHT))
        .style(move |_theme: &Theme| title_bar_style(accent));

        let message = Container::new(
            Text::new(notification.message())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        )
        .padding(spacing::XXS);

        let mut content = Column::new().push(title_bar);
        if notification.lifetime_duration().is_some() {
            content = content.push(Self::lifetime_track(window, accent));
        }
        content = content.push(message);
        if let Some(factory) = notification.content() {
            content = content.push(factory());
        }

        Container::new(content)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .style(card_style)
            .into()
    }

    /// Renders the toast overlay: every active toast, placed at its animated
    /// rectangle within the host bounds.
    ///
    /// When the host bounds are unavailable the overlay degrades to plain
    /// per-corner columns.
    pub fn view_overlay(manager: &ToastManager) -> Element<'_, Message> {
        if manager.is_empty() {
            // An empty container that takes no space.
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        match manager.host_bounds() {
            Some(bounds) => Self::positioned_overlay(manager, bounds),
            None => Self::corner_columns(manager),
        }
    }

    /// The remaining-lifetime track under the title bar.
    fn lifetime_track(window: &ToastWindow, accent: Color) -> Element<'_, Message> {
        let fill_width = (window.size().width * window.remaining_fraction()).max(0.0);

        let fill = Container::new(text(""))
            .width(Length::Fixed(fill_width))
            .height(Length::Fixed(sizing::LIFETIME_TRACK))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent)),
                ..Default::default()
            });

        Container::new(fill)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::LIFETIME_TRACK))
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(palette::GRAY_700)),
                ..Default::default()
            })
            .into()
    }

    fn positioned_overlay(manager: &ToastManager, bounds: Rectangle) -> Element<'_, Message> {
        let layers: Vec<Element<'_, Message>> = manager
            .toasts()
            .map(|window| {
                let rect = window.current_rect();
                let offset = Padding {
                    top: (rect.y - bounds.y).max(0.0),
                    left: (rect.x - bounds.x).max(0.0),
                    right: 0.0,
                    bottom: 0.0,
                };

                Container::new(Self::view(window))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(offset)
                    .into()
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn corner_columns(manager: &ToastManager) -> Element<'_, Message> {
        let layers: Vec<Element<'_, Message>> = Anchor::ALL
            .iter()
            .filter(|anchor| !manager.stack(**anchor).is_empty())
            .map(|anchor| {
                let cards: Vec<Element<'_, Message>> =
                    manager.stack(*anchor).iter().map(Self::view).collect();

                let (align_x, align_y) = corner_alignment(*anchor);
                Container::new(Column::with_children(cards).spacing(spacing::XS))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(align_x)
                    .align_y(align_y)
                    .padding(spacing::MD)
                    .into()
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn corner_alignment(anchor: Anchor) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match anchor {
        Anchor::TopLeft | Anchor::BottomLeft => alignment::Horizontal::Left,
        Anchor::TopCenter | Anchor::BottomCenter => alignment::Horizontal::Center,
        Anchor::TopRight | Anchor::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if anchor.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Style function for the card container.
fn card_style(theme: &Theme) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: iced::Border {
            color: palette::BLACK,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the severity-colored title bar.
fn title_bar_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(accent)),
        text_color: Some(palette::WHITE),
        border: iced::Border {
            color: palette::BLACK,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Style function for the close button; hovering fills it with the accent.
fn close_button_style(_theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette::WHITE,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(accent)),
            text_color: palette::WHITE,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: palette::WHITE,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
