use fitrs::body_composition::{BmiCategory, BodyFatCategory};
use fitrs::config::AppConfig;
use fitrs::export::{self, ExportFormat};
use fitrs::models::{ActivityLevel, Goal, PersonProfile, Sex};
use fitrs::report::FitnessReport;
use fitrs::sleep::SleepCalculator;
use fitrs::strength::StrengthCalculator;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal_macros::dec;

/// Integration tests that test the complete system workflows

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn create_test_profile() -> PersonProfile {
        PersonProfile::new(Sex::Male, 25, 175.0, 70.0, 38.0, 80.0, None).unwrap()
    }

    fn create_female_profile() -> PersonProfile {
        PersonProfile::new(Sex::Female, 30, 165.0, 60.0, 33.0, 70.0, Some(95.0)).unwrap()
    }

    /// Test the complete profile -> report workflow against known values
    #[test]
    fn test_complete_report_workflow() {
        let profile = create_test_profile();
        let report =
            FitnessReport::generate(&profile, ActivityLevel::Sedentary, Goal::Maintain).unwrap();

        // Mifflin-St Jeor: 10*70 + 6.25*175 - 5*25 + 5 = 1724.75
        assert_eq!(report.bmr, 1724.75);
        // 1724.75 * 1.2 rounds to 2070
        assert_eq!(report.tdee, 2070);
        assert_eq!(report.bmi, 22.9);
        assert_eq!(report.bmi_category, BmiCategory::Normal);

        // Maintain: the target equals TDEE and carbs fill the remainder
        assert_eq!(report.plan.target_calories, 2070);
        assert_eq!(report.plan.protein_g, 140);
        assert_eq!(report.plan.fat_g, 56);
        assert_eq!(report.plan.carbs_g, 252);
    }

    /// A female profile flows through the hip-dependent formula branch
    #[test]
    fn test_female_report_workflow() {
        let profile = create_female_profile();
        let report =
            FitnessReport::generate(&profile, ActivityLevel::Moderate, Goal::Cut).unwrap();

        assert!(report.body_fat_percent > 2.0 && report.body_fat_percent < 60.0);
        // Cut target sits 20% below TDEE
        assert!(report.calorie_adjustment < 0);
        assert_eq!(
            report.plan.target_calories,
            (report.tdee as f64 * 0.8).round() as u32
        );
    }

    /// Reports survive the full export round trip in every format
    #[test]
    fn test_report_export_workflow() {
        let profile = create_test_profile();
        let report = FitnessReport::generate(&profile, ActivityLevel::Active, Goal::Bulk)
            .unwrap()
            .with_profile_name("integration");

        let dir = tempfile::tempdir().unwrap();
        for format in [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Text] {
            let path = dir
                .path()
                .join(format!("report.{}", format.extension()));
            export::export_report(&report, format, &path).unwrap();
            assert!(path.exists());
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }

        // JSON is the lossless one
        let json_path = dir.path().join("report.json");
        let content = std::fs::read_to_string(&json_path).unwrap();
        let parsed: FitnessReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
    }

    /// Saved profiles round trip through config and feed report generation
    #[test]
    fn test_config_profile_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.add_profile("alice", create_female_profile());
        config.add_profile("bob", create_test_profile());
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        let (name, profile) = loaded.get_default_profile().unwrap();
        assert_eq!(name, "alice");

        let report =
            FitnessReport::generate(profile, ActivityLevel::Light, Goal::Maintain).unwrap();
        assert_eq!(report.profile, create_female_profile());
        assert!(report.tdee > 0);
    }

    /// Strength and sleep paths work end to end
    #[test]
    fn test_strength_and_sleep_workflow() {
        let one_rm = StrengthCalculator::one_rep_max(dec!(100), 10).unwrap();
        assert_eq!(one_rm, dec!(133.3));

        let set = StrengthCalculator::working_set(one_rm);
        assert_eq!(set.weight, dec!(106.6));

        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let schedule =
            SleepCalculator::bedtimes(NaiveTime::from_hms_opt(7, 0, 0).unwrap(), now);
        assert_eq!(schedule.options.len(), 3);
        for option in &schedule.options {
            assert!(option.bedtime < schedule.wake_at);
        }
    }

    /// Domain violations surface as errors through the whole stack
    #[test]
    fn test_error_propagation_workflow() {
        // Waist below neck
        let profile = PersonProfile::new(Sex::Male, 25, 175.0, 70.0, 45.0, 44.0, None).unwrap();
        assert!(
            FitnessReport::generate(&profile, ActivityLevel::Sedentary, Goal::Maintain).is_err()
        );

        // Unknown enum keys fail loudly instead of defaulting
        assert!("couch_potato".parse::<ActivityLevel>().is_err());
        assert!("tone_up".parse::<Goal>().is_err());

        // Body-fat categories still classify across sexes
        assert_eq!(
            BodyFatCategory::classify(15.0, Sex::Male),
            BodyFatCategory::Fitness
        );
    }
}
