//! Energy expenditure estimation
//!
//! Basal metabolic rate via the Mifflin-St Jeor equation and total daily
//! energy expenditure via the standard five-level activity multipliers.
//! Both are defined for every validated [`PersonProfile`]; the activity
//! scale is a closed enum, so an unknown level is unrepresentable here and
//! rejected at the string boundary by [`ActivityLevel::from_str`].
//!
//! [`ActivityLevel::from_str`]: std::str::FromStr

use crate::models::{ActivityLevel, PersonProfile, Sex};

/// Energy expenditure calculation utilities
pub struct EnergyCalculator;

impl EnergyCalculator {
    /// Basal metabolic rate in kcal/day (Mifflin-St Jeor)
    ///
    /// `10*weight + 6.25*height - 5*age`, plus 5 for men or minus 161 for
    /// women. Always defined for positive inputs; not rounded.
    pub fn bmr(profile: &PersonProfile) -> f64 {
        let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm
            - 5.0 * profile.age_years as f64;
        match profile.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        }
    }

    /// Total daily energy expenditure: `round(BMR * multiplier)` in kcal/day
    pub fn tdee(profile: &PersonProfile, activity: ActivityLevel) -> u32 {
        let tdee = (Self::bmr(profile) * activity.multiplier()).round();
        tracing::debug!(activity = %activity, tdee, "estimated daily expenditure");
        tdee as u32
    }
}
