pub mod formatting;

pub use formatting::{format_blood_pressure, format_confidence};
