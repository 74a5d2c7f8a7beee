use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Length, Theme};

use crate::components::{bullet_list, report_list, report_section};
use crate::message::Message;
use crate::model::{AnalysisReport, Phase, PregnancyReport, VitalsField, VitalsForm};
use crate::utils::format_confidence;

pub fn pregnancy_assessment<'a>(form: &'a VitalsForm, phase: &'a Phase) -> Element<'a, Message> {
    let mut grid = column![].spacing(12);
    for pair in VitalsField::ALL.chunks(2) {
        let mut line = row![].spacing(16);
        for &field in pair {
            line = line.push(field_input(form, field));
        }
        grid = grid.push(line);
    }

    let report = match phase {
        Phase::Complete(AnalysisReport::Pregnancy(report)) => Some(report),
        _ => None,
    };

    let mut content = column![grid, submit_button(phase)].spacing(16);

    if phase.is_analyzing() {
        content = content.push(text("Analyzing pregnancy risk factors…").size(14));
    }

    if let Some(report) = report {
        content = content.push(report_view(report));
    }

    content.into()
}

fn field_input(form: &VitalsForm, field: VitalsField) -> Element<'_, Message> {
    let mut block = column![
        text(field.label()).size(14),
        text_input(field.placeholder(), form.value(field))
            .on_input(move |value| Message::VitalsChanged(field, value)),
    ]
    .spacing(4)
    .width(Length::FillPortion(1));

    if let Some(error) = form.error(field) {
        block = block.push(text(error).size(12).style(danger_text));
    }

    block.into()
}

fn submit_button(phase: &Phase) -> Element<'_, Message> {
    let label = if phase.is_analyzing() {
        "Analyzing…"
    } else {
        "Analyze Risk Factors"
    };

    let mut submit = button(text(label)).width(Length::Fill);
    if !phase.is_analyzing() {
        submit = submit.on_press(Message::Submit);
    }
    submit.into()
}

fn report_view(report: &PregnancyReport) -> Element<'_, Message> {
    let overview = column![
        text(format!("Risk Level: {}", report.risk_level)).size(14),
        text(format!(
            "Confidence: {}",
            format_confidence(report.confidence)
        ))
        .size(14),
    ]
    .spacing(4);

    let vitals = column![
        row![
            text(format!(
                "Blood Pressure: {}",
                report.vital_signs.blood_pressure
            ))
            .size(14)
            .width(Length::FillPortion(1)),
            text(format!("Blood Sugar: {}", report.vital_signs.blood_sugar))
                .size(14)
                .width(Length::FillPortion(1)),
        ]
        .spacing(8),
        row![
            text(format!("Temperature: {}°C", report.vital_signs.temperature))
                .size(14)
                .width(Length::FillPortion(1)),
            text(format!("Heart Rate: {} bpm", report.vital_signs.heart_rate))
                .size(14)
                .width(Length::FillPortion(1)),
        ]
        .spacing(8),
    ]
    .spacing(4);

    let diet = column![
        column![
            text("General Recommendations").size(15),
            bullet_list(&report.diet_plan.recommendations),
        ]
        .spacing(6),
        row![
            column![
                text("Recommended Foods").size(15),
                bullet_list(&report.diet_plan.foods.recommended),
            ]
            .spacing(6)
            .width(Length::FillPortion(1)),
            column![
                text("Foods to Avoid").size(15),
                bullet_list(&report.diet_plan.foods.avoid),
            ]
            .spacing(6)
            .width(Length::FillPortion(1)),
        ]
        .spacing(16),
    ]
    .spacing(12);

    column![
        text("Risk Assessment Results").size(24),
        report_section("Risk Overview", overview.into()),
        report_section("Vital Signs Analysis", vitals.into()),
        report_list("Immediate Actions Required", &report.immediate_actions),
        report_section("Diet Plan", diet.into()),
        report_list("Lifestyle Recommendations", &report.lifestyle),
        report_list("Next Steps", &report.next_steps),
    ]
    .spacing(12)
    .into()
}

fn danger_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}
