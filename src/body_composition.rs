//! Body composition estimation
//!
//! Provides circumference-based body-fat estimation (US Navy method), BMI,
//! and the classification bands derived from them.
//!
//! # Background
//!
//! The US Navy method estimates body-fat percentage from tape measurements
//! alone, using log-transformed circumference terms fitted against
//! hydrostatic weighing data. It needs no calipers and is accurate to within
//! a few percentage points for most adults:
//!
//! - Men: waist and neck circumference plus height
//! - Women: waist, hip, and neck circumference plus height
//!
//! The log arguments (`waist - neck`, `waist + hip - neck`) must be positive;
//! both are validated before evaluation so an impossible measurement set
//! surfaces as a typed error rather than a NaN.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalculationError;
use crate::models::{PersonProfile, Sex};

/// BMI classification bands
///
/// Half-open intervals: [0, 18.5) underweight, [18.5, 25) normal,
/// [25, 30) overweight, [30, inf) obese. Every BMI value falls in exactly
/// one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value into its band
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// The [min, max) BMI range covered by this band
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Normal => write!(f, "Normal"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

/// Body-fat percentage bands by sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    /// Classify a body-fat percentage for the given sex
    pub fn classify(body_fat_percent: f64, sex: Sex) -> Self {
        match sex {
            Sex::Male => {
                if body_fat_percent < 6.0 {
                    BodyFatCategory::Essential
                } else if body_fat_percent < 14.0 {
                    BodyFatCategory::Athletic
                } else if body_fat_percent < 18.0 {
                    BodyFatCategory::Fitness
                } else if body_fat_percent < 25.0 {
                    BodyFatCategory::Average
                } else {
                    BodyFatCategory::Obese
                }
            }
            Sex::Female => {
                if body_fat_percent < 14.0 {
                    BodyFatCategory::Essential
                } else if body_fat_percent < 21.0 {
                    BodyFatCategory::Athletic
                } else if body_fat_percent < 25.0 {
                    BodyFatCategory::Fitness
                } else if body_fat_percent < 32.0 {
                    BodyFatCategory::Average
                } else {
                    BodyFatCategory::Obese
                }
            }
        }
    }
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyFatCategory::Essential => write!(f, "Essential"),
            BodyFatCategory::Athletic => write!(f, "Athletic"),
            BodyFatCategory::Fitness => write!(f, "Fitness"),
            BodyFatCategory::Average => write!(f, "Average"),
            BodyFatCategory::Obese => write!(f, "Obese"),
        }
    }
}

/// Body composition calculation utilities
pub struct CompositionAnalyzer;

impl CompositionAnalyzer {
    /// Estimate body-fat percentage with the US Navy circumference method
    ///
    /// Male: `495 / (1.0324 - 0.19077*log10(waist - neck) + 0.15456*log10(height)) - 450`
    /// Female: `495 / (1.29579 - 0.35004*log10(waist + hip - neck) + 0.22100*log10(height)) - 450`
    ///
    /// Result is rounded to 2 decimal places. Fails when the logarithm
    /// argument is not positive (waist must exceed neck for men; waist + hip
    /// must exceed neck for women).
    pub fn body_fat_percent(profile: &PersonProfile) -> Result<f64, CalculationError> {
        let bfp = match profile.sex {
            Sex::Male => {
                let girth = profile.waist_cm - profile.neck_cm;
                if girth <= 0.0 {
                    return Err(CalculationError::domain(
                        "body fat",
                        "waist circumference must exceed neck circumference",
                    ));
                }
                495.0
                    / (1.0324 - 0.19077 * girth.log10() + 0.15456 * profile.height_cm.log10())
                    - 450.0
            }
            Sex::Female => {
                let hip = profile.hip_cm.ok_or(CalculationError::MissingMeasurement {
                    field: "hip circumference".to_string(),
                })?;
                let girth = profile.waist_cm + hip - profile.neck_cm;
                if girth <= 0.0 {
                    return Err(CalculationError::domain(
                        "body fat",
                        "waist plus hip circumference must exceed neck circumference",
                    ));
                }
                495.0
                    / (1.29579 - 0.35004 * girth.log10() + 0.22100 * profile.height_cm.log10())
                    - 450.0
            }
        };

        tracing::debug!(sex = %profile.sex, body_fat_percent = bfp, "estimated body fat");
        Ok((bfp * 100.0).round() / 100.0)
    }

    /// Calculate BMI: `weight / height_m^2`, rounded to 1 decimal place
    pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, CalculationError> {
        if height_cm <= 0.0 {
            return Err(CalculationError::domain("BMI", "height must be positive"));
        }
        if weight_kg <= 0.0 {
            return Err(CalculationError::domain("BMI", "weight must be positive"));
        }

        let height_m = height_cm / 100.0;
        let bmi = weight_kg / (height_m * height_m);
        Ok((bmi * 10.0).round() / 10.0)
    }

    /// Weight range in kg producing a normal BMI (18.5-25) at this height
    pub fn healthy_weight_range_kg(height_cm: f64) -> Result<(f64, f64), CalculationError> {
        if height_cm <= 0.0 {
            return Err(CalculationError::domain(
                "healthy weight range",
                "height must be positive",
            ));
        }

        let height_m_sq = (height_cm / 100.0).powi(2);
        let (lo, hi) = BmiCategory::Normal.range();
        Ok((lo * height_m_sq, hi * height_m_sq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonProfile;
    use proptest::prelude::*;

    fn male_profile(waist: f64, neck: f64) -> PersonProfile {
        PersonProfile::new(Sex::Male, 25, 175.0, 70.0, neck, waist, None).unwrap()
    }

    #[test]
    fn test_body_fat_male() {
        // waist 80, neck 38, height 175:
        // 495 / (1.0324 - 0.19077*log10(42) + 0.15456*log10(175)) - 450 = 12.87
        let profile = male_profile(80.0, 38.0);
        let bfp = CompositionAnalyzer::body_fat_percent(&profile).unwrap();
        assert!((bfp - 12.87).abs() < 0.01);
    }

    #[test]
    fn test_body_fat_female() {
        // waist 80, hip 95, neck 38, height 175:
        // 495 / (1.29579 - 0.35004*log10(137) + 0.22100*log10(175)) - 450 = 24.34
        let profile =
            PersonProfile::new(Sex::Female, 25, 175.0, 70.0, 38.0, 80.0, Some(95.0)).unwrap();
        let bfp = CompositionAnalyzer::body_fat_percent(&profile).unwrap();
        assert!((bfp - 24.34).abs() < 0.01);
    }

    #[test]
    fn test_body_fat_domain_error() {
        // Waist not exceeding neck makes the log argument non-positive
        let profile = male_profile(40.0, 42.0);
        let err = CompositionAnalyzer::body_fat_percent(&profile).unwrap_err();
        assert!(matches!(err, CalculationError::Domain { .. }));

        let profile = male_profile(40.0, 40.0);
        assert!(CompositionAnalyzer::body_fat_percent(&profile).is_err());
    }

    #[test]
    fn test_bmi() {
        // 70 kg at 175 cm: 70 / 1.75^2 = 22.857 -> 22.9
        assert_eq!(CompositionAnalyzer::bmi(70.0, 175.0).unwrap(), 22.9);

        assert!(CompositionAnalyzer::bmi(70.0, 0.0).is_err());
        assert!(CompositionAnalyzer::bmi(70.0, -175.0).is_err());
        assert!(CompositionAnalyzer::bmi(0.0, 175.0).is_err());
    }

    #[test]
    fn test_bmi_bands_are_half_open() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        // Values just below a band edge belong to the lower band
        assert_eq!(BmiCategory::classify(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_body_fat_classification() {
        assert_eq!(
            BodyFatCategory::classify(10.0, Sex::Male),
            BodyFatCategory::Athletic
        );
        assert_eq!(
            BodyFatCategory::classify(20.0, Sex::Male),
            BodyFatCategory::Average
        );
        assert_eq!(
            BodyFatCategory::classify(20.0, Sex::Female),
            BodyFatCategory::Athletic
        );
        assert_eq!(
            BodyFatCategory::classify(28.0, Sex::Female),
            BodyFatCategory::Average
        );
    }

    #[test]
    fn test_healthy_weight_range() {
        // 175 cm: 18.5*1.75^2 = 56.66, 25*1.75^2 = 76.56
        let (min, max) = CompositionAnalyzer::healthy_weight_range_kg(175.0).unwrap();
        assert!((min - 56.7).abs() < 0.1);
        assert!((max - 76.6).abs() < 0.1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Navy estimates stay in a biologically plausible range over
        /// realistic male measurement combinations
        #[test]
        fn prop_body_fat_plausible_range(
            neck in 30.0f64..45.0,
            girth in 35.0f64..70.0,
            height in 160.0f64..190.0,
        ) {
            let profile =
                PersonProfile::new(Sex::Male, 30, height, 80.0, neck, neck + girth, None).unwrap();
            let bfp = CompositionAnalyzer::body_fat_percent(&profile).unwrap();
            prop_assert!(bfp > 2.0 && bfp < 60.0, "implausible body fat {}", bfp);
        }

        /// A larger waist at the same neck and height means more body fat
        #[test]
        fn prop_body_fat_increases_with_waist(
            neck in 30.0f64..45.0,
            height in 160.0f64..190.0,
            waist_lo in 80.0f64..100.0,
            delta in 5.0f64..40.0,
        ) {
            let lo = PersonProfile::new(Sex::Male, 30, height, 80.0, neck, waist_lo, None).unwrap();
            let hi = PersonProfile::new(Sex::Male, 30, height, 80.0, neck, waist_lo + delta, None)
                .unwrap();
            let bfp_lo = CompositionAnalyzer::body_fat_percent(&lo).unwrap();
            let bfp_hi = CompositionAnalyzer::body_fat_percent(&hi).unwrap();
            prop_assert!(bfp_hi > bfp_lo);
        }

        /// Heavier at the same height always raises BMI
        #[test]
        fn prop_bmi_increases_with_weight(
            w1 in 40.0f64..90.0,
            delta in 5.0f64..60.0,
            height in 150.0f64..200.0,
        ) {
            let b1 = CompositionAnalyzer::bmi(w1, height).unwrap();
            let b2 = CompositionAnalyzer::bmi(w1 + delta, height).unwrap();
            prop_assert!(b2 > b1);
        }

        /// The midpoint of the healthy range classifies as Normal
        #[test]
        fn prop_healthy_range_midpoint_is_normal(height in 150.0f64..200.0) {
            let (min, max) = CompositionAnalyzer::healthy_weight_range_kg(height).unwrap();
            let bmi = CompositionAnalyzer::bmi((min + max) / 2.0, height).unwrap();
            prop_assert_eq!(BmiCategory::classify(bmi), BmiCategory::Normal);
        }
    }
}
