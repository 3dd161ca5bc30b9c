//! Body-mass index and its classification.

use serde::Serialize;

/// BMI from weight in kilograms and height in centimeters, rounded to one
/// decimal. Returns 0 when either measurement is missing.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg == 0.0 || !weight_kg.is_finite() || !height_cm.is_finite() || height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    round_to_tenth(weight_kg / (height_m * height_m))
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Unknown,
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unknown => "Unknown",
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        f.write_str(s)
    }
}

/// How alarming a reading is, for UI coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Destructive,
}

/// Classification of a BMI value with advice for the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiStatus {
    pub category: BmiCategory,
    pub tone: Tone,
    pub description: &'static str,
}

impl BmiStatus {
    pub fn from_bmi(bmi: f64) -> Self {
        let (category, tone, description) = if bmi == 0.0 {
            (
                BmiCategory::Unknown,
                Tone::Warning,
                "Complete your profile to calculate BMI",
            )
        } else if bmi < 18.5 {
            (
                BmiCategory::Underweight,
                Tone::Warning,
                "Consider consulting a nutritionist",
            )
        } else if bmi < 25.0 {
            (
                BmiCategory::Normal,
                Tone::Success,
                "You're in a healthy weight range",
            )
        } else if bmi < 30.0 {
            (
                BmiCategory::Overweight,
                Tone::Warning,
                "Consider a balanced diet and exercise",
            )
        } else {
            (
                BmiCategory::Obese,
                Tone::Destructive,
                "Consult a healthcare professional",
            )
        };
        Self {
            category,
            tone,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_formula_rounds_to_one_decimal() {
        assert_eq!(calculate_bmi(65.0, 170.0), 22.5);
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(100.0, 160.0), 39.1);
    }

    #[test]
    fn missing_measurements_give_zero() {
        assert_eq!(calculate_bmi(0.0, 170.0), 0.0);
        assert_eq!(calculate_bmi(65.0, 0.0), 0.0);
        assert_eq!(calculate_bmi(65.0, -10.0), 0.0);
        assert_eq!(calculate_bmi(f64::NAN, 170.0), 0.0);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(BmiStatus::from_bmi(0.0).category, BmiCategory::Unknown);
        assert_eq!(BmiStatus::from_bmi(18.4).category, BmiCategory::Underweight);
        assert_eq!(BmiStatus::from_bmi(18.5).category, BmiCategory::Normal);
        assert_eq!(BmiStatus::from_bmi(24.9).category, BmiCategory::Normal);
        assert_eq!(BmiStatus::from_bmi(25.0).category, BmiCategory::Overweight);
        assert_eq!(BmiStatus::from_bmi(29.9).category, BmiCategory::Overweight);
        assert_eq!(BmiStatus::from_bmi(30.0).category, BmiCategory::Obese);
    }

    #[test]
    fn status_tones() {
        assert_eq!(BmiStatus::from_bmi(0.0).tone, Tone::Warning);
        assert_eq!(BmiStatus::from_bmi(22.0).tone, Tone::Success);
        assert_eq!(BmiStatus::from_bmi(35.0).tone, Tone::Destructive);
        assert_eq!(
            BmiStatus::from_bmi(0.0).description,
            "Complete your profile to calculate BMI"
        );
    }
}
