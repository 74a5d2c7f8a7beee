use std::path::PathBuf;

use crate::model::{AnalysisReport, PendingImage, Service, VitalsField};

#[derive(Debug, Clone)]
pub enum Message {
    ServiceSelected(Service),
    BackToServices,
    PickImage,
    /// `None` when the file dialog was dismissed.
    ImageLoaded(Option<Result<PendingImage, String>>),
    ImageDropped(PathBuf),
    RemoveImage,
    VitalsChanged(VitalsField, String),
    Submit,
    AnalysisFinished {
        ticket: u64,
        result: Result<AnalysisReport, String>,
    },
}
