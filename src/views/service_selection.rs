use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text};
use iced::{Background, Color, Element, Length, Shadow, Theme};

use crate::message::Message;
use crate::model::Service;

/// Entry screen: one card per service, clicking emits the selection.
pub fn service_selection() -> Element<'static, Message> {
    row![
        service_card(Service::Skin),
        service_card(Service::Pregnancy),
    ]
    .spacing(24)
    .width(Length::Fill)
    .into()
}

fn service_card(service: Service) -> Element<'static, Message> {
    let content = column![
        text(service.title()).size(20),
        text(service.description())
            .size(14)
            .wrapping(Wrapping::Word),
        text("Click to learn more").size(12),
    ]
    .spacing(8);

    button(container(content).padding(16).width(Length::Fill))
        .padding(0)
        .width(Length::FillPortion(1))
        .on_press(Message::ServiceSelected(service))
        .style(card_style)
        .into()
}

fn card_style(theme: &Theme, status: iced::widget::button::Status) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let background_color = match status {
        iced::widget::button::Status::Hovered => palette.primary.weak.color,
        iced::widget::button::Status::Pressed => palette.primary.weak.color.scale_alpha(0.9),
        _ => palette.background.weak.color,
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color: palette.background.base.text,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::new(12.0),
        },
        shadow: Shadow::default(),
    }
}
