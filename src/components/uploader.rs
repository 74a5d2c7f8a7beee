use iced::border::{Border, Radius};
use iced::widget::{button, column, container, row, text, Image};
use iced::{Alignment, Background, Element, Length, Shadow, Theme};

use crate::message::Message;
use crate::model::PendingImage;

const DROP_ZONE_HEIGHT: f32 = 256.0;

/// Image intake area: empty drop zone, or preview with a remove action.
pub fn uploader(pending: Option<&PendingImage>) -> Element<'_, Message> {
    match pending {
        Some(pending) => {
            let preview = Image::new(pending.preview.clone())
                .width(Length::Fill)
                .height(Length::Fixed(DROP_ZONE_HEIGHT));

            column![
                container(preview)
                    .padding(8)
                    .width(Length::Fill)
                    .style(zone_style),
                row![
                    text(&pending.file_name).size(14).width(Length::Fill),
                    button(text("Remove").size(14)).on_press(Message::RemoveImage),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            ]
            .spacing(8)
            .into()
        }
        None => {
            let prompt = column![
                text("Drag and drop your image here").size(14),
                text("or click to browse").size(12),
            ]
            .spacing(4)
            .align_x(Alignment::Center);

            button(
                container(prompt)
                    .width(Length::Fill)
                    .height(Length::Fixed(DROP_ZONE_HEIGHT))
                    .align_x(Alignment::Center)
                    .align_y(Alignment::Center),
            )
            .padding(0)
            .width(Length::Fill)
            .on_press(Message::PickImage)
            .style(drop_zone_button_style)
            .into()
        }
    }
}

fn zone_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: 2.0,
            radius: Radius::new(12.0),
        },
        ..Default::default()
    }
}

fn drop_zone_button_style(
    theme: &Theme,
    status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        iced::widget::button::Status::Hovered | iced::widget::button::Status::Pressed => {
            palette.primary.strong.color
        }
        _ => palette.background.strong.color,
    };

    iced::widget::button::Style {
        background: Some(Background::Color(
            palette.background.weak.color.scale_alpha(0.4),
        )),
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: Radius::new(12.0),
        },
        shadow: Shadow::default(),
    }
}
