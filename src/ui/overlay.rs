// SPDX-License-Identifier: MPL-2.0
//! Overlay widget rendering the current alert.
//!
//! Button-less alerts render as a toast card near the top of the window;
//! alerts with buttons render as a modal confirmation dialog over a dimmed
//! backdrop. The widget only reads controller state; every interaction is
//! reported back as a [`Message`].

use crate::alert::{AlertType, ButtonKind, Controller};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Interactions produced by the overlay.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A dialog button at the given position was pressed.
    ButtonPressed(usize),
    /// The toast was tapped; hide it early.
    Dismiss,
    /// The dialog backdrop was tapped. Swallowed: confirmation dialogs
    /// stay up until a button press or an explicit hide.
    BackdropPressed,
}

/// Returns the accent color for an alert type.
#[must_use]
pub fn type_color(alert_type: AlertType) -> Color {
    match alert_type {
        AlertType::Success => palette::SUCCESS_500,
        AlertType::Error => palette::ERROR_500,
        AlertType::Info => palette::INFO_500,
        AlertType::Warning => palette::WARNING_500,
    }
}

/// Returns the fill color for a dialog button kind.
#[must_use]
pub fn kind_color(kind: ButtonKind) -> Color {
    match kind {
        ButtonKind::Default => palette::PRIMARY_500,
        ButtonKind::Cancel => palette::GRAY_400,
        ButtonKind::Destructive => palette::ERROR_500,
    }
}

/// Overlay widget configuration.
pub struct Overlay;

impl Overlay {
    /// Renders the overlay for the controller's current state.
    ///
    /// Returns an empty, zero-sized element while nothing is visible so the
    /// view can unconditionally stack it over the base content.
    pub fn view(alerts: &Controller) -> Element<'_, Message> {
        if !alerts.is_visible() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        if alerts.buttons().is_empty() {
            Self::view_toast(alerts)
        } else {
            Self::view_dialog(alerts)
        }
    }

    /// Renders an auto-hiding toast card near the top of the window.
    fn view_toast(alerts: &Controller) -> Element<'_, Message> {
        let accent = type_color(alerts.alert_type());
        let progress = alerts.progress();

        let message_widget = Text::new(alerts.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::WHITE, progress)),
            });

        let card = Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_card_style(accent, progress));

        // Tap anywhere on the toast to dismiss it early.
        let card = mouse_area(card).on_press(Message::Dismiss);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top)
            .padding(iced::Padding {
                top: sizing::TOAST_TOP_INSET,
                ..iced::Padding::new(spacing::MD)
            })
            .into()
    }

    /// Renders a modal confirmation dialog over a dimmed backdrop.
    fn view_dialog(alerts: &Controller) -> Element<'_, Message> {
        let accent = type_color(alerts.alert_type());
        let progress = alerts.progress();

        let message_widget = Text::new(alerts.message())
            .size(typography::TITLE_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let mut button_row = Row::new().spacing(spacing::XS);
        for (index, alert_button) in alerts.buttons().iter().enumerate() {
            let fill = kind_color(alert_button.kind());
            let label = Text::new(alert_button.label()).size(typography::BODY);
            button_row = button_row.push(
                button(
                    Container::new(label)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                )
                .width(Length::Fill)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .on_press(Message::ButtonPressed(index))
                .style(move |_theme: &Theme, status| dialog_button_style(fill, status)),
            );
        }

        let card = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .push(message_widget)
                .push(button_row),
        )
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(move |theme: &Theme| dialog_card_style(theme, accent));

        // Dim the whole window behind the dialog. The mouse area captures
        // clicks so the base content cannot be interacted with.
        let backdrop = Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| backdrop_style(progress));

        mouse_area(backdrop)
            .on_press(Message::BackdropPressed)
            .into()
    }
}

/// Multiplies a color's alpha by the animation progress for fade in/out.
fn faded(color: Color, progress: f32) -> Color {
    Color {
        a: color.a * progress.clamp(0.0, 1.0),
        ..color
    }
}

/// Style for the toast card: type-colored background fading with progress.
fn toast_card_style(accent: Color, progress: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(accent, progress))),
        border: iced::Border {
            color: faded(accent, progress),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(faded(palette::WHITE, progress)),
        ..Default::default()
    }
}

/// Style for the dialog card with a type-colored accent border.
fn dialog_card_style(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style for the dimmed backdrop behind the dialog.
fn backdrop_style(progress: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * progress.clamp(0.0, 1.0),
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Style for a dialog button, filled with its kind color.
fn dialog_button_style(fill: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active | button::Status::Disabled => fill,
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_STRONG + opacity::OVERLAY_SUBTLE,
            ..fill
        },
        button::Status::Pressed => Color {
            a: opacity::OVERLAY_STRONG,
            ..fill
        },
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
