pub mod pregnancy_assessment;
pub mod service_selection;
pub mod skin_screening;

pub use pregnancy_assessment::pregnancy_assessment;
pub use service_selection::service_selection;
pub use skin_screening::skin_screening;
