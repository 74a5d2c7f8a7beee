use serde::{Deserialize, Serialize};

/// Which of the two screening workflows is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Service {
    Skin,
    Pregnancy,
}

impl Service {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Skin => "Skin Disease Screening",
            Self::Pregnancy => "Pregnancy Risk Assessment",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Skin => "Upload an image for AI-powered analysis of skin conditions",
            Self::Pregnancy => "Get personalized risk assessment and recommendations",
        }
    }
}
