use std::fmt;

use serde::{Deserialize, Serialize};

/// Async lifecycle stage of the current analysis request.
///
/// The report lives inside `Complete`, so a result can only exist while the
/// request that produced it is the current one.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Complete(AnalysisReport),
    Failed,
}

impl Phase {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, Self::Analyzing)
    }
}

/// Structured result shown to the user, tagged by the service that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalysisReport {
    Skin(SkinReport),
    Pregnancy(PregnancyReport),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinReport {
    pub condition: String,
    pub condition_type: String,
    pub severity: String,
    pub confidence: f64,
    pub details: Vec<String>,
    pub recommendations: Vec<String>,
    pub preventive_measures: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyReport {
    pub risk_level: RiskLevel,
    pub confidence: f64,
    pub vital_signs: VitalSignsSummary,
    pub immediate_actions: Vec<String>,
    pub diet_plan: DietPlan,
    pub lifestyle: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Echo of the submitted vitals. Values stay raw strings; blood pressure is
/// the joined `"systolic/diastolic"` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSignsSummary {
    pub blood_pressure: String,
    pub blood_sugar: String,
    pub temperature: String,
    pub heart_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub recommendations: Vec<String>,
    pub foods: FoodGuidance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodGuidance {
    pub recommended: Vec<String>,
    pub avoid: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_renders_capitalized() {
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate");
        assert_eq!(RiskLevel::High.to_string(), "High");
    }

    #[test]
    fn default_phase_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
        assert!(!Phase::default().is_analyzing());
    }
}
