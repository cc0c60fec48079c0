// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo panel exercises every alert operation; the overlay is stacked
//! on top of it so toasts and dialogs paint over the base content.

use super::{App, Message};
use crate::alert::AlertType;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::overlay::Overlay;
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Renders the demo panel with the alert overlay stacked on top.
pub fn view(app: &App) -> Element<'_, Message> {
    let base = Container::new(demo_panel())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(base)
        .push(Overlay::view(app.alerts()).map(Message::Overlay))
        .into()
}

fn demo_panel<'a>() -> Element<'a, Message> {
    let title = Text::new("Alert overlay demo").size(typography::TITLE_SM);

    let column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .push(title)
        .push(trigger("Success toast", Message::ShowToast(AlertType::Success)))
        .push(trigger("Error toast", Message::ShowToast(AlertType::Error)))
        .push(trigger("Info toast", Message::ShowToast(AlertType::Info)))
        .push(trigger("Warning toast", Message::ShowToast(AlertType::Warning)))
        .push(trigger("Confirm dialog", Message::ShowConfirm))
        .push(trigger("Delete confirmation", Message::ShowDeleteConfirmation))
        .push(trigger("Toast from background thread", Message::ShowFromBackground));

    column.into()
}

fn trigger(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .on_press(message)
        .into()
}
