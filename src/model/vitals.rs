use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VitalsField {
    Age,
    SystolicBp,
    DiastolicBp,
    BloodSugar,
    BodyTemp,
    HeartRate,
}

impl VitalsField {
    pub const ALL: [VitalsField; 6] = [
        VitalsField::Age,
        VitalsField::SystolicBp,
        VitalsField::DiastolicBp,
        VitalsField::BloodSugar,
        VitalsField::BodyTemp,
        VitalsField::HeartRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::SystolicBp => "Systolic BP",
            Self::DiastolicBp => "Diastolic BP",
            Self::BloodSugar => "Blood Sugar",
            Self::BodyTemp => "Body Temperature",
            Self::HeartRate => "Heart Rate",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Age => "Enter age",
            Self::SystolicBp => "Enter systolic BP",
            Self::DiastolicBp => "Enter diastolic BP",
            Self::BloodSugar => "Enter blood sugar",
            Self::BodyTemp => "Enter body temperature",
            Self::HeartRate => "Enter heart rate",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            Self::Age => "Age is required",
            Self::SystolicBp => "Systolic BP is required",
            Self::DiastolicBp => "Diastolic BP is required",
            Self::BloodSugar => "Blood sugar level is required",
            Self::BodyTemp => "Body temperature is required",
            Self::HeartRate => "Heart rate is required",
        }
    }
}

/// Draft state of the pregnancy vitals form.
///
/// Validation is required-field only. No numeric parsing happens here; the
/// record handed downstream carries the raw strings.
#[derive(Debug, Clone, Default)]
pub struct VitalsForm {
    age: String,
    systolic_bp: String,
    diastolic_bp: String,
    blood_sugar: String,
    body_temp: String,
    heart_rate: String,
    errors: BTreeMap<VitalsField, &'static str>,
}

impl VitalsForm {
    pub fn value(&self, field: VitalsField) -> &str {
        match field {
            VitalsField::Age => &self.age,
            VitalsField::SystolicBp => &self.systolic_bp,
            VitalsField::DiastolicBp => &self.diastolic_bp,
            VitalsField::BloodSugar => &self.blood_sugar,
            VitalsField::BodyTemp => &self.body_temp,
            VitalsField::HeartRate => &self.heart_rate,
        }
    }

    /// Editing a field clears its inline error, matching revalidate-on-change.
    pub fn set(&mut self, field: VitalsField, value: String) {
        let slot = match field {
            VitalsField::Age => &mut self.age,
            VitalsField::SystolicBp => &mut self.systolic_bp,
            VitalsField::DiastolicBp => &mut self.diastolic_bp,
            VitalsField::BloodSugar => &mut self.blood_sugar,
            VitalsField::BodyTemp => &mut self.body_temp,
            VitalsField::HeartRate => &mut self.heart_rate,
        };
        *slot = value;
        self.errors.remove(&field);
    }

    pub fn error(&self, field: VitalsField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Check every field, recording inline errors for the empty ones.
    /// Returns the raw-string record only when all six are present.
    pub fn validate(&mut self) -> Option<VitalsRecord> {
        self.errors.clear();
        for field in VitalsField::ALL {
            if self.value(field).trim().is_empty() {
                self.errors.insert(field, field.required_message());
            }
        }

        if !self.errors.is_empty() {
            return None;
        }

        Some(VitalsRecord {
            age: self.age.clone(),
            systolic_bp: self.systolic_bp.clone(),
            diastolic_bp: self.diastolic_bp.clone(),
            blood_sugar: self.blood_sugar.clone(),
            body_temp: self.body_temp.clone(),
            heart_rate: self.heart_rate.clone(),
        })
    }
}

/// Validated handoff to the analysis provider. Values are intentionally left
/// as the strings the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalsRecord {
    pub age: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub blood_sugar: String,
    pub body_temp: String,
    pub heart_rate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> VitalsForm {
        let mut form = VitalsForm::default();
        form.set(VitalsField::Age, "29".to_string());
        form.set(VitalsField::SystolicBp, "120".to_string());
        form.set(VitalsField::DiastolicBp, "80".to_string());
        form.set(VitalsField::BloodSugar, "95".to_string());
        form.set(VitalsField::BodyTemp, "36.8".to_string());
        form.set(VitalsField::HeartRate, "72".to_string());
        form
    }

    #[test]
    fn complete_form_validates_to_record() {
        let mut form = filled_form();
        let record = form.validate().expect("all fields present");
        assert_eq!(record.systolic_bp, "120");
        assert_eq!(record.diastolic_bp, "80");
        assert_eq!(record.body_temp, "36.8");
    }

    #[test]
    fn each_missing_field_blocks_validation() {
        for field in VitalsField::ALL {
            let mut form = filled_form();
            form.set(field, String::new());
            assert!(form.validate().is_none(), "{field:?} empty should fail");
            assert_eq!(form.error(field), Some(field.required_message()));
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled_form();
        form.set(VitalsField::HeartRate, "   ".to_string());
        assert!(form.validate().is_none());
        assert_eq!(form.error(VitalsField::HeartRate), Some("Heart rate is required"));
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = filled_form();
        form.set(VitalsField::Age, String::new());
        assert!(form.validate().is_none());
        assert!(form.error(VitalsField::Age).is_some());

        form.set(VitalsField::Age, "31".to_string());
        assert!(form.error(VitalsField::Age).is_none());
        assert!(form.validate().is_some());
    }

    #[test]
    fn values_are_not_parsed_or_normalized() {
        let mut form = filled_form();
        form.set(VitalsField::BloodSugar, "ninety".to_string());
        let record = form.validate().expect("non-numeric text is still accepted");
        assert_eq!(record.blood_sugar, "ninety");
    }
}
