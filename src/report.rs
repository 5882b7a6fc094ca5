//! Full fitness report assembly
//!
//! A [`FitnessReport`] gathers every derived metric for one profile,
//! activity level, and goal into a single serializable record. The report is
//! pure data; terminal rendering lives in the binary and file rendering in
//! [`crate::export`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::body_composition::{BmiCategory, BodyFatCategory, CompositionAnalyzer};
use crate::energy::EnergyCalculator;
use crate::error::Result;
use crate::models::{ActivityLevel, Goal, NutritionPlan, PersonProfile};
use crate::nutrition::NutritionPlanner;

/// Derived metrics for one profile at one activity level and goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Name of the saved profile, if one was used
    pub profile_name: Option<String>,

    /// The input profile the metrics are derived from
    pub profile: PersonProfile,

    /// Activity level used for TDEE
    pub activity: ActivityLevel,

    /// Goal used for the calorie target
    pub goal: Goal,

    /// Body-fat percentage (US Navy circumference method)
    pub body_fat_percent: f64,

    /// Body-fat band for this sex
    pub body_fat_category: BodyFatCategory,

    /// Body mass index
    pub bmi: f64,

    /// BMI band
    pub bmi_category: BmiCategory,

    /// Weight range producing a normal BMI at this height, in kg
    pub healthy_weight_range_kg: (f64, f64),

    /// Basal metabolic rate in kcal/day
    pub bmr: f64,

    /// Total daily energy expenditure in kcal/day
    pub tdee: u32,

    /// Daily macro-nutrient allocation
    pub plan: NutritionPlan,

    /// Target calories minus TDEE (negative on a cut, positive on a bulk)
    pub calorie_adjustment: i64,
}

impl FitnessReport {
    /// Compute every metric for the given inputs
    pub fn generate(
        profile: &PersonProfile,
        activity: ActivityLevel,
        goal: Goal,
    ) -> Result<Self> {
        let body_fat_percent = CompositionAnalyzer::body_fat_percent(profile)?;
        let bmi = CompositionAnalyzer::bmi(profile.weight_kg, profile.height_cm)?;
        let healthy_weight_range_kg =
            CompositionAnalyzer::healthy_weight_range_kg(profile.height_cm)?;
        let bmr = EnergyCalculator::bmr(profile);
        let tdee = EnergyCalculator::tdee(profile, activity);
        let plan = NutritionPlanner::plan(tdee, goal, profile.weight_kg)?;

        tracing::info!(
            body_fat_percent,
            bmi,
            tdee,
            target_calories = plan.target_calories,
            "generated fitness report"
        );

        Ok(FitnessReport {
            generated_at: Utc::now(),
            profile_name: None,
            profile: profile.clone(),
            activity,
            goal,
            body_fat_percent,
            body_fat_category: BodyFatCategory::classify(body_fat_percent, profile.sex),
            bmi,
            bmi_category: BmiCategory::classify(bmi),
            healthy_weight_range_kg,
            bmr,
            tdee,
            plan,
            calorie_adjustment: plan.target_calories as i64 - tdee as i64,
        })
    }

    /// Attach the name of the saved profile the report was built from
    pub fn with_profile_name(mut self, name: impl Into<String>) -> Self {
        self.profile_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn sample_profile() -> PersonProfile {
        PersonProfile::new(Sex::Male, 25, 175.0, 70.0, 38.0, 80.0, None).unwrap()
    }

    #[test]
    fn test_generate_report_known_values() {
        let report = FitnessReport::generate(
            &sample_profile(),
            ActivityLevel::Sedentary,
            Goal::Maintain,
        )
        .unwrap();

        assert_eq!(report.bmr, 1724.75);
        assert_eq!(report.tdee, 2070);
        assert_eq!(report.bmi, 22.9);
        assert_eq!(report.bmi_category, BmiCategory::Normal);
        assert!((report.body_fat_percent - 12.87).abs() < 0.01);
        assert_eq!(report.body_fat_category, BodyFatCategory::Athletic);
        assert_eq!(report.plan.protein_g, 140);
        assert_eq!(report.plan.fat_g, 56);
        assert_eq!(report.plan.carbs_g, 252);
        // maintain: target equals TDEE
        assert_eq!(report.calorie_adjustment, 0);
    }

    #[test]
    fn test_cut_has_negative_adjustment() {
        let report =
            FitnessReport::generate(&sample_profile(), ActivityLevel::Sedentary, Goal::Cut)
                .unwrap();
        // 1656 - 2070
        assert_eq!(report.calorie_adjustment, -414);
    }

    #[test]
    fn test_report_surfaces_domain_errors() {
        // Waist below neck: the body-fat precondition fails before anything
        // else is computed
        let profile = PersonProfile::new(Sex::Male, 25, 175.0, 70.0, 45.0, 44.0, None).unwrap();
        let result =
            FitnessReport::generate(&profile, ActivityLevel::Sedentary, Goal::Maintain);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_serialization() {
        let report = FitnessReport::generate(
            &sample_profile(),
            ActivityLevel::Moderate,
            Goal::Bulk,
        )
        .unwrap()
        .with_profile_name("me");

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"profile_name\":\"me\""));
        assert!(json.contains("\"activity\":\"moderate\""));

        let deserialized: FitnessReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, report);
    }
}
