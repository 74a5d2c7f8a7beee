use iced::widget::{button, column, text};
use iced::{Element, Length};

use crate::components::{report_list, report_section, uploader};
use crate::message::Message;
use crate::model::{AnalysisReport, PendingImage, Phase, SkinReport};
use crate::utils::format_confidence;

pub fn skin_screening<'a>(
    pending: Option<&'a PendingImage>,
    phase: &'a Phase,
) -> Element<'a, Message> {
    let report = match phase {
        Phase::Complete(AnalysisReport::Skin(report)) => Some(report),
        _ => None,
    };

    let mut content = column![
        text("Upload a clear image of the affected skin area for AI analysis").size(16),
        uploader(pending),
    ]
    .spacing(16);

    if pending.is_some() && report.is_none() {
        content = content.push(analyze_button(phase));
    }

    if phase.is_analyzing() {
        content = content.push(text("Please wait while we analyze your image…").size(14));
    }

    if let Some(report) = report {
        content = content.push(report_view(report));
    }

    content.into()
}

fn analyze_button(phase: &Phase) -> Element<'_, Message> {
    let label = if phase.is_analyzing() {
        "Analyzing…"
    } else {
        "Analyze Image"
    };

    let mut submit = button(text(label)).width(Length::Fill);
    if !phase.is_analyzing() {
        submit = submit.on_press(Message::Submit);
    }
    submit.into()
}

fn report_view(report: &SkinReport) -> Element<'_, Message> {
    let diagnosis = column![
        text(format!("Condition: {}", report.condition)).size(14),
        text(format!("Type: {}", report.condition_type)).size(14),
        text(format!("Severity: {}", report.severity)).size(14),
        text(format!(
            "Confidence: {}",
            format_confidence(report.confidence)
        ))
        .size(14),
    ]
    .spacing(4);

    column![
        text("Analysis Results").size(24),
        report_section("Diagnosis", diagnosis.into()),
        report_list("Clinical Details", &report.details),
        report_list("Recommendations", &report.recommendations),
        report_list("Preventive Measures", &report.preventive_measures),
    ]
    .spacing(12)
    .into()
}
