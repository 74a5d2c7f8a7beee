use iced::widget::image::Handle;

/// Image staged for submission: raw bytes plus a decoded preview.
#[derive(Debug, Clone)]
pub struct PendingImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub preview: Handle,
}

impl PendingImage {
    pub fn to_sample(&self) -> SkinSample {
        SkinSample {
            file_name: self.file_name.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

/// What a provider receives for the skin path: the untouched file bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinSample {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
