/// Render a 0..1 confidence score the way the reports display it.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub fn format_blood_pressure(systolic: &str, diastolic: &str) -> String {
    format!("{systolic}/{diastolic}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_renders_one_decimal_percent() {
        assert_eq!(format_confidence(0.92), "92.0%");
        assert_eq!(format_confidence(0.85), "85.0%");
        assert_eq!(format_confidence(0.857), "85.7%");
    }

    #[test]
    fn blood_pressure_joins_raw_strings() {
        assert_eq!(format_blood_pressure("120", "80"), "120/80");
        assert_eq!(format_blood_pressure("", "80"), "/80");
    }
}
