use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, text};
use iced::{Background, Element, Length, Theme};

use crate::message::Message;

/// Card with a heading and arbitrary body content, used for every report block.
pub fn report_section<'a>(heading: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(heading).size(18), body].spacing(8))
        .padding(12)
        .width(Length::Fill)
        .style(section_style)
        .into()
}

pub fn report_list<'a>(heading: &'a str, items: &'a [String]) -> Element<'a, Message> {
    report_section(heading, bullet_list(items))
}

pub fn bullet_list(items: &[String]) -> Element<'_, Message> {
    let mut list = column![];
    for item in items {
        list = list.push(text(format!("• {item}")).size(14).wrapping(Wrapping::Word));
    }
    list.spacing(4).into()
}

fn section_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(
            palette.background.weak.color.scale_alpha(0.6),
        )),
        border: Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: Radius::new(10.0),
        },
        ..Default::default()
    }
}
