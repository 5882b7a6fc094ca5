use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculationError;

/// Biological sex, used by the body-fat and BMR formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(CalculationError::InvalidEnum {
                field: "sex".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Daily activity level for TDEE calculation
///
/// A closed five-level scale; each level maps to a fixed multiplier applied
/// to BMR. Unrecognized keys at a string boundary are rejected, never
/// defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise (office work)
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or twice-daily training
    Extreme,
}

impl ActivityLevel {
    /// Activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::Extreme => "Physical job or twice-daily training",
        }
    }

    /// All levels in ascending multiplier order
    pub fn all() -> [ActivityLevel; 5] {
        [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::Extreme,
        ]
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "light"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Active => write!(f, "active"),
            ActivityLevel::Extreme => write!(f, "extreme"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "extreme" => Ok(ActivityLevel::Extreme),
            _ => Err(CalculationError::InvalidEnum {
                field: "activity level".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Training goal, mapped to a calorie-adjustment multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Fat loss: 20% calorie deficit
    Cut,
    /// Hold current weight
    Maintain,
    /// Muscle gain: 10% calorie surplus
    Bulk,
}

impl Goal {
    /// Calorie adjustment multiplier applied to TDEE
    pub fn adjustment(&self) -> f64 {
        match self {
            Goal::Cut => 0.80,
            Goal::Maintain => 1.0,
            Goal::Bulk => 1.10,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Cut => write!(f, "cut"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Bulk => write!(f, "bulk"),
        }
    }
}

impl FromStr for Goal {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cut" => Ok(Goal::Cut),
            "maintain" => Ok(Goal::Maintain),
            "bulk" => Ok(Goal::Bulk),
            _ => Err(CalculationError::InvalidEnum {
                field: "goal".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Accepted measurement ranges for profile validation
pub mod bounds {
    pub const AGE_YEARS: (f64, f64) = (10.0, 100.0);
    pub const HEIGHT_CM: (f64, f64) = (100.0, 250.0);
    pub const WEIGHT_KG: (f64, f64) = (30.0, 200.0);
    pub const NECK_CM: (f64, f64) = (20.0, 60.0);
    pub const WAIST_CM: (f64, f64) = (40.0, 150.0);
    pub const HIP_CM: (f64, f64) = (50.0, 150.0);
}

/// Anthropometric input record, immutable per calculation
///
/// Constructed through [`PersonProfile::new`], which enforces the measurement
/// ranges in [`bounds`] and requires a hip circumference on female profiles
/// (the female body-fat formula needs it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Biological sex
    pub sex: Sex,

    /// Age in years
    pub age_years: u8,

    /// Height in centimeters
    pub height_cm: f64,

    /// Weight in kilograms
    pub weight_kg: f64,

    /// Neck circumference in centimeters
    pub neck_cm: f64,

    /// Waist circumference in centimeters, measured at the navel
    pub waist_cm: f64,

    /// Hip circumference in centimeters, measured at the widest point.
    /// Required for female profiles.
    pub hip_cm: Option<f64>,
}

impl PersonProfile {
    /// Build a validated profile
    pub fn new(
        sex: Sex,
        age_years: u8,
        height_cm: f64,
        weight_kg: f64,
        neck_cm: f64,
        waist_cm: f64,
        hip_cm: Option<f64>,
    ) -> Result<Self, CalculationError> {
        check_range("age", age_years as f64, bounds::AGE_YEARS)?;
        check_range("height", height_cm, bounds::HEIGHT_CM)?;
        check_range("weight", weight_kg, bounds::WEIGHT_KG)?;
        check_range("neck circumference", neck_cm, bounds::NECK_CM)?;
        check_range("waist circumference", waist_cm, bounds::WAIST_CM)?;

        match (sex, hip_cm) {
            (Sex::Female, None) => {
                return Err(CalculationError::MissingMeasurement {
                    field: "hip circumference".to_string(),
                })
            }
            (_, Some(hip)) => check_range("hip circumference", hip, bounds::HIP_CM)?,
            (Sex::Male, None) => {}
        }

        Ok(PersonProfile {
            sex,
            age_years,
            height_cm,
            weight_kg,
            neck_cm,
            waist_cm,
            hip_cm,
        })
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), CalculationError> {
    if value < min || value > max {
        return Err(CalculationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Daily macro-nutrient allocation derived from TDEE, goal, and body weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Daily calorie target in kcal
    pub target_calories: u32,

    /// Protein in grams (4 kcal/g)
    pub protein_g: u32,

    /// Fat in grams (9 kcal/g)
    pub fat_g: u32,

    /// Carbohydrate in grams (4 kcal/g)
    pub carbs_g: u32,
}

impl NutritionPlan {
    /// Sum of the calories contributed by each macro
    pub fn macro_calories(&self) -> u32 {
        self.protein_g * 4 + self.fat_g * 9 + self.carbs_g * 4
    }
}

/// Unit preferences for display; calculations always run in metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

impl Default for Units {
    fn default() -> Self {
        Units::Metric
    }
}

const KG_PER_LB: f64 = 0.453_592_37;
const CM_PER_IN: f64 = 2.54;

impl Units {
    /// Format a weight stored in kilograms for display
    pub fn format_weight(&self, kg: f64) -> String {
        match self {
            Units::Metric => format!("{:.1} kg", kg),
            Units::Imperial => format!("{:.1} lb", kg / KG_PER_LB),
        }
    }

    /// Format a length stored in centimeters for display
    pub fn format_length(&self, cm: f64) -> String {
        match self {
            Units::Metric => format!("{:.1} cm", cm),
            Units::Imperial => format!("{:.1} in", cm / CM_PER_IN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_profile() -> PersonProfile {
        PersonProfile::new(Sex::Male, 25, 175.0, 70.0, 38.0, 80.0, None).unwrap()
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Light.multiplier(), 1.375);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::Active.multiplier(), 1.725);
        assert_eq!(ActivityLevel::Extreme.multiplier(), 1.9);
    }

    #[test]
    fn test_goal_adjustments() {
        assert_eq!(Goal::Cut.adjustment(), 0.80);
        assert_eq!(Goal::Maintain.adjustment(), 1.0);
        assert_eq!(Goal::Bulk.adjustment(), 1.10);
    }

    #[test]
    fn test_activity_level_parsing_rejects_unknown_keys() {
        assert_eq!(
            "moderate".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Moderate
        );
        assert_eq!(
            "EXTREME".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Extreme
        );

        // No silent fallback to the lowest multiplier
        let err = "marathon".parse::<ActivityLevel>().unwrap_err();
        assert!(matches!(err, CalculationError::InvalidEnum { .. }));
    }

    #[test]
    fn test_goal_parsing() {
        assert_eq!("cut".parse::<Goal>().unwrap(), Goal::Cut);
        assert_eq!("Bulk".parse::<Goal>().unwrap(), Goal::Bulk);
        assert!("shred".parse::<Goal>().is_err());
    }

    #[test]
    fn test_profile_validation() {
        assert!(male_profile().hip_cm.is_none());

        // Age outside 10-100
        let err = PersonProfile::new(Sex::Male, 7, 175.0, 70.0, 38.0, 80.0, None).unwrap_err();
        assert!(matches!(err, CalculationError::OutOfRange { .. }));

        // Weight outside 30-200
        assert!(PersonProfile::new(Sex::Male, 25, 175.0, 250.0, 38.0, 80.0, None).is_err());
    }

    #[test]
    fn test_female_profile_requires_hip() {
        let err =
            PersonProfile::new(Sex::Female, 25, 165.0, 60.0, 33.0, 70.0, None).unwrap_err();
        assert!(matches!(err, CalculationError::MissingMeasurement { .. }));

        let profile =
            PersonProfile::new(Sex::Female, 25, 165.0, 60.0, 33.0, 70.0, Some(95.0)).unwrap();
        assert_eq!(profile.hip_cm, Some(95.0));
    }

    #[test]
    fn test_nutrition_plan_macro_calories() {
        let plan = NutritionPlan {
            target_calories: 2070,
            protein_g: 140,
            fat_g: 56,
            carbs_g: 252,
        };
        // 140*4 + 56*9 + 252*4 = 560 + 504 + 1008
        assert_eq!(plan.macro_calories(), 2072);
    }

    #[test]
    fn test_profile_serialization() {
        let profile = male_profile();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"sex\":\"male\""));

        let deserialized: PersonProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, profile);
    }

    #[test]
    fn test_units_formatting() {
        assert_eq!(Units::Metric.format_weight(70.0), "70.0 kg");
        assert_eq!(Units::Imperial.format_weight(70.0), "154.3 lb");
        assert_eq!(Units::Metric.format_length(175.0), "175.0 cm");
        assert_eq!(Units::Imperial.format_length(175.0), "68.9 in");
    }
}
