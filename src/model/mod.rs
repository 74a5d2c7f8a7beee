pub mod loader;
pub mod pending_image;
pub mod report;
pub mod service;
pub mod vitals;

pub use pending_image::{PendingImage, SkinSample};
pub use report::{
    AnalysisReport, DietPlan, FoodGuidance, Phase, PregnancyReport, RiskLevel, SkinReport,
    VitalSignsSummary,
};
pub use service::Service;
pub use vitals::{VitalsField, VitalsForm, VitalsRecord};
