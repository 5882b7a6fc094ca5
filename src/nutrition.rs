//! Macro-nutrient allocation
//!
//! Splits a goal-adjusted calorie target into protein, fat, and carbohydrate
//! grams. Protein and fat are fixed per-kilogram ratios (2.0 g/kg and
//! 0.8 g/kg) independent of goal; carbohydrate fills the remaining calories
//! at 4 kcal/g.
//!
//! When the protein and fat allocation alone already exceeds the target
//! (very low TDEE against a high body weight), carbohydrate floors at 50 g
//! and the target is revised upward to the macro sum, so the reported total
//! always matches the macros it is built from.

use crate::error::CalculationError;
use crate::models::{Goal, NutritionPlan};

/// Protein allocation in grams per kilogram of body weight
const PROTEIN_G_PER_KG: f64 = 2.0;
/// Fat allocation in grams per kilogram of body weight
const FAT_G_PER_KG: f64 = 0.8;
/// Minimum daily carbohydrate in grams
const CARB_FLOOR_G: u32 = 50;

/// Calories per gram: protein 4, fat 9, carbohydrate 4
const KCAL_PER_G_PROTEIN: u32 = 4;
const KCAL_PER_G_FAT: u32 = 9;
const KCAL_PER_G_CARBS: u32 = 4;

/// Macro-nutrient planning utilities
pub struct NutritionPlanner;

impl NutritionPlanner {
    /// Build a daily nutrition plan from TDEE, goal, and body weight
    pub fn plan(tdee: u32, goal: Goal, weight_kg: f64) -> Result<NutritionPlan, CalculationError> {
        if weight_kg <= 0.0 {
            return Err(CalculationError::domain(
                "nutrition plan",
                "weight must be positive",
            ));
        }

        let mut target_calories = (tdee as f64 * goal.adjustment()).round() as u32;
        let protein_g = (weight_kg * PROTEIN_G_PER_KG).round() as u32;
        let fat_g = (weight_kg * FAT_G_PER_KG).round() as u32;

        let consumed = protein_g * KCAL_PER_G_PROTEIN + fat_g * KCAL_PER_G_FAT;
        let remaining = target_calories as i64 - consumed as i64;

        let carbs_g = if remaining < 0 {
            // Protein and fat alone overshoot the target; hold the carb
            // floor and revise the target so it equals the macro sum.
            target_calories = consumed + CARB_FLOOR_G * KCAL_PER_G_CARBS;
            tracing::warn!(
                tdee,
                goal = %goal,
                revised_target = target_calories,
                "calorie target below protein and fat baseline; applying carb floor"
            );
            CARB_FLOOR_G
        } else {
            (remaining as f64 / KCAL_PER_G_CARBS as f64).round() as u32
        };

        Ok(NutritionPlan {
            target_calories,
            protein_g,
            fat_g,
            carbs_g,
        })
    }
}
