//! Stand-in for a real inference backend: fixed reports after a fixed delay.

use std::time::Duration;

use async_trait::async_trait;

use super::{AnalysisError, AnalysisProvider};
use crate::model::{
    DietPlan, FoodGuidance, PregnancyReport, RiskLevel, SkinReport, SkinSample, VitalSignsSummary,
    VitalsRecord,
};
use crate::utils::format_blood_pressure;

const ANALYSIS_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct CannedAnalysis {
    latency: Duration,
}

impl CannedAnalysis {
    pub fn new() -> Self {
        Self {
            latency: ANALYSIS_LATENCY,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for CannedAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisProvider for CannedAnalysis {
    async fn analyze_skin(&self, sample: SkinSample) -> Result<SkinReport, AnalysisError> {
        log::info!(
            "Analyzing skin image {} ({} bytes)",
            sample.file_name,
            sample.bytes.len()
        );
        tokio::time::sleep(self.latency).await;
        Ok(skin_report())
    }

    async fn assess_pregnancy(
        &self,
        record: VitalsRecord,
    ) -> Result<PregnancyReport, AnalysisError> {
        log::info!("Assessing pregnancy risk factors");
        tokio::time::sleep(self.latency).await;
        Ok(pregnancy_report(&record))
    }
}

pub(crate) fn skin_report() -> SkinReport {
    SkinReport {
        condition: "Malignant Melanoma".to_string(),
        condition_type: "Skin Cancer".to_string(),
        severity: "High".to_string(),
        confidence: 0.92,
        details: vec![
            "Irregular border pattern detected".to_string(),
            "Asymmetrical shape identified".to_string(),
            "Multiple color variations present".to_string(),
        ],
        recommendations: vec![
            "Urgent consultation with a dermatologist required".to_string(),
            "Schedule an appointment within 48 hours".to_string(),
            "Avoid sun exposure to the affected area".to_string(),
            "Document any changes in size or color".to_string(),
            "Apply prescribed topical medication if available".to_string(),
        ],
        preventive_measures: vec![
            "Use broad-spectrum sunscreen (SPF 50+)".to_string(),
            "Wear protective clothing".to_string(),
            "Perform monthly self-examinations".to_string(),
            "Schedule regular skin screenings".to_string(),
        ],
    }
}

pub(crate) fn pregnancy_report(record: &VitalsRecord) -> PregnancyReport {
    PregnancyReport {
        risk_level: RiskLevel::Moderate,
        confidence: 0.85,
        vital_signs: VitalSignsSummary {
            blood_pressure: format_blood_pressure(&record.systolic_bp, &record.diastolic_bp),
            blood_sugar: record.blood_sugar.clone(),
            temperature: record.body_temp.clone(),
            heart_rate: record.heart_rate.clone(),
        },
        immediate_actions: vec![
            "Schedule appointment with OB/GYN within 1 week".to_string(),
            "Monitor blood pressure twice daily".to_string(),
            "Keep blood sugar levels in check".to_string(),
        ],
        diet_plan: DietPlan {
            recommendations: vec![
                "Increase folic acid intake to 400mcg daily".to_string(),
                "Consume 75-100g of protein daily".to_string(),
                "Stay hydrated with 8-10 glasses of water".to_string(),
                "Avoid processed foods and excess sugar".to_string(),
            ],
            foods: FoodGuidance {
                recommended: vec![
                    "Leafy greens".to_string(),
                    "Lean proteins".to_string(),
                    "Whole grains".to_string(),
                    "Low-fat dairy products".to_string(),
                ],
                avoid: vec![
                    "Raw fish".to_string(),
                    "Unpasteurized dairy".to_string(),
                    "Excess caffeine".to_string(),
                    "Processed meats".to_string(),
                ],
            },
        },
        lifestyle: vec![
            "Gentle exercise for 30 minutes daily".to_string(),
            "Get 8 hours of sleep".to_string(),
            "Practice stress-reduction techniques".to_string(),
            "Avoid smoking and alcohol".to_string(),
        ],
        next_steps: vec![
            "Book prenatal checkup".to_string(),
            "Start taking prenatal vitamins".to_string(),
            "Join prenatal exercise class".to_string(),
            "Consider genetic screening".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VitalsRecord {
        VitalsRecord {
            age: "29".to_string(),
            systolic_bp: "120".to_string(),
            diastolic_bp: "80".to_string(),
            blood_sugar: "95".to_string(),
            body_temp: "36.8".to_string(),
            heart_rate: "72".to_string(),
        }
    }

    #[tokio::test]
    async fn skin_analysis_returns_the_fixed_report() {
        let provider = CannedAnalysis::with_latency(Duration::ZERO);
        let sample = SkinSample {
            file_name: "lesion.png".to_string(),
            bytes: vec![1, 2, 3],
        };

        let report = provider.analyze_skin(sample).await.unwrap();
        assert_eq!(report, skin_report());
        assert_eq!(report.condition, "Malignant Melanoma");
        assert_eq!(report.condition_type, "Skin Cancer");
        assert_eq!(report.severity, "High");
        assert_eq!(report.confidence, 0.92);
        assert_eq!(report.details.len(), 3);
        assert_eq!(report.recommendations.len(), 5);
        assert_eq!(report.preventive_measures.len(), 4);
    }

    #[tokio::test]
    async fn pregnancy_assessment_echoes_vitals_unparsed() {
        let provider = CannedAnalysis::with_latency(Duration::ZERO);

        let report = provider.assess_pregnancy(record()).await.unwrap();
        assert_eq!(report.risk_level, RiskLevel::Moderate);
        assert_eq!(report.confidence, 0.85);
        assert_eq!(report.vital_signs.blood_pressure, "120/80");
        assert_eq!(report.vital_signs.blood_sugar, "95");
        assert_eq!(report.vital_signs.temperature, "36.8");
        assert_eq!(report.vital_signs.heart_rate, "72");
        assert_eq!(report.diet_plan.foods.recommended.len(), 4);
        assert_eq!(report.diet_plan.foods.avoid.len(), 4);
    }

    #[tokio::test]
    async fn non_numeric_strings_pass_straight_through() {
        let provider = CannedAnalysis::with_latency(Duration::ZERO);
        let mut record = record();
        record.systolic_bp = "one twenty".to_string();

        let report = provider.assess_pregnancy(record).await.unwrap();
        assert_eq!(report.vital_signs.blood_pressure, "one twenty/80");
    }
}
