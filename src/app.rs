use std::sync::Arc;

use iced::widget::text::Wrapping;
use iced::widget::{button, column, scrollable, text};
use iced::{application, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;

use crate::message::Message;
use crate::model::{loader, AnalysisReport, PendingImage, Phase, Service, VitalsForm};
use crate::provider::{AnalysisProvider, CannedAnalysis};
use crate::views::{pregnancy_assessment, service_selection, skin_screening};

const APP_TITLE: &str = "AI Health Diagnostic Platform";
const APP_TAGLINE: &str = "Advanced AI-powered diagnostics for skin conditions and pregnancy \
risk assessment. Get instant, accurate insights to help guide your healthcare decisions.";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .run()
}

pub struct App {
    provider: Arc<dyn AnalysisProvider>,
    service: Option<Service>,
    phase: Phase,
    pending_image: Option<PendingImage>,
    vitals: VitalsForm,
    notice: Option<String>,
    /// Monotonic request id; resolutions carrying an older one are stale.
    ticket: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::with_provider(Arc::new(CannedAnalysis::new()))
    }
}

impl App {
    pub fn with_provider(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            provider,
            service: None,
            phase: Phase::Idle,
            pending_image: None,
            vitals: VitalsForm::default(),
            notice: None,
            ticket: 0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ServiceSelected(service) => {
                self.service = Some(service);
                self.reset_intake();
                Task::none()
            }
            Message::BackToServices => {
                self.service = None;
                self.reset_intake();
                Task::none()
            }
            Message::PickImage => Task::perform(
                async {
                    match AsyncFileDialog::new()
                        .add_filter("Images", &loader::IMAGE_EXTENSIONS)
                        .pick_file()
                        .await
                    {
                        Some(handle) => Some(loader::load_image(handle.path().to_path_buf())),
                        None => None,
                    }
                },
                Message::ImageLoaded,
            ),
            Message::ImageLoaded(None) => Task::none(),
            Message::ImageLoaded(Some(Ok(pending))) => {
                self.pending_image = Some(pending);
                self.notice = None;
                Task::none()
            }
            Message::ImageLoaded(Some(Err(err))) => {
                self.notice = Some(err);
                Task::none()
            }
            Message::ImageDropped(path) => {
                if self.service != Some(Service::Skin) {
                    return Task::none();
                }
                // Non-image drops are dropped on the floor, matching the
                // dialog's extension filter. Nothing is surfaced.
                if !loader::is_image_file(&path) {
                    log::debug!("Ignoring non-image drop: {}", path.display());
                    return Task::none();
                }
                Task::perform(
                    async move { Some(loader::load_image(path)) },
                    Message::ImageLoaded,
                )
            }
            Message::RemoveImage => {
                self.pending_image = None;
                Task::none()
            }
            Message::VitalsChanged(field, value) => {
                self.vitals.set(field, value);
                Task::none()
            }
            Message::Submit => self.submit(),
            Message::AnalysisFinished { ticket, result } => {
                if ticket != self.ticket || !self.phase.is_analyzing() {
                    log::warn!("Discarding stale analysis resolution (request {ticket})");
                    return Task::none();
                }
                match result {
                    Ok(report) => {
                        self.phase = Phase::Complete(report);
                        self.pending_image = None;
                        self.notice = None;
                    }
                    Err(err) => {
                        log::error!("Analysis failed: {err}");
                        self.phase = Phase::Failed;
                        self.notice = Some(failure_notice(self.service));
                    }
                }
                Task::none()
            }
        }
    }

    fn submit(&mut self) -> Task<Message> {
        // The disabled submit button is advisory; this is the actual gate.
        if self.phase.is_analyzing() {
            return Task::none();
        }

        match self.service {
            Some(Service::Skin) => {
                let Some(pending) = &self.pending_image else {
                    return Task::none();
                };
                let sample = pending.to_sample();
                let provider = Arc::clone(&self.provider);
                let ticket = self.begin_analysis();
                log::info!("Submitting skin image for analysis (request {ticket})");
                Task::perform(
                    async move {
                        provider
                            .analyze_skin(sample)
                            .await
                            .map(AnalysisReport::Skin)
                            .map_err(|err| err.to_string())
                    },
                    move |result| Message::AnalysisFinished { ticket, result },
                )
            }
            Some(Service::Pregnancy) => {
                let Some(record) = self.vitals.validate() else {
                    return Task::none();
                };
                let provider = Arc::clone(&self.provider);
                let ticket = self.begin_analysis();
                log::info!("Submitting vital signs for risk assessment (request {ticket})");
                Task::perform(
                    async move {
                        provider
                            .assess_pregnancy(record)
                            .await
                            .map(AnalysisReport::Pregnancy)
                            .map_err(|err| err.to_string())
                    },
                    move |result| Message::AnalysisFinished { ticket, result },
                )
            }
            None => Task::none(),
        }
    }

    fn begin_analysis(&mut self) -> u64 {
        self.ticket += 1;
        self.phase = Phase::Analyzing;
        self.notice = None;
        self.ticket
    }

    fn reset_intake(&mut self) {
        // Bumping the ticket invalidates any in-flight request, so a late
        // resolution cannot resurrect a cleared view.
        self.ticket += 1;
        self.phase = Phase::Idle;
        self.pending_image = None;
        self.vitals = VitalsForm::default();
        self.notice = None;
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text(APP_TITLE).size(32),
            text(APP_TAGLINE).size(16).wrapping(Wrapping::Word),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        let body: Element<'_, Message> = match self.service {
            None => service_selection(),
            Some(service) => {
                let panel = match service {
                    Service::Skin => skin_screening(self.pending_image.as_ref(), &self.phase),
                    Service::Pregnancy => pregnancy_assessment(&self.vitals, &self.phase),
                };

                column![
                    button(text("← Back to services").size(14)).on_press(Message::BackToServices),
                    text(service.title()).size(24),
                    panel,
                ]
                .spacing(16)
                .into()
            }
        };

        let mut content = column![header, body].spacing(24).padding(20);

        if let Some(notice) = &self.notice {
            content = content.push(text(notice).size(16).wrapping(Wrapping::Word));
        }

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::ImageDropped(path)),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn failure_notice(service: Option<Service>) -> String {
    match service {
        Some(Service::Pregnancy) => "Failed to analyze risk factors. Please try again.".to_string(),
        _ => "Failed to analyze image. Please try again.".to_string(),
    }
}
