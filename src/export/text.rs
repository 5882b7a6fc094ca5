use super::ExportError;
use crate::report::FitnessReport;
use std::io::Write;
use std::path::Path;

/// Export a fitness report as a human-readable text summary
pub fn export_report<P: AsRef<Path>>(
    report: &FitnessReport,
    output_path: P,
) -> Result<(), ExportError> {
    let mut file = std::fs::File::create(output_path)?;
    write!(file, "{}", render(report))?;
    Ok(())
}

/// Render the report to a plain-text block
pub fn render(report: &FitnessReport) -> String {
    let mut out = String::new();

    out.push_str("FITNESS REPORT\n");
    out.push_str("==============\n\n");

    if let Some(name) = &report.profile_name {
        out.push_str(&format!("Profile:  {}\n", name));
    }
    out.push_str(&format!(
        "Input:    {}, {} years, {:.1} cm, {:.1} kg\n",
        report.profile.sex, report.profile.age_years, report.profile.height_cm,
        report.profile.weight_kg
    ));
    out.push_str(&format!(
        "Plan for: {} activity, {} goal\n\n",
        report.activity, report.goal
    ));

    out.push_str("Body Composition\n");
    out.push_str("----------------\n");
    out.push_str(&format!(
        "Body fat:       {:.2}% ({})\n",
        report.body_fat_percent, report.body_fat_category
    ));
    out.push_str(&format!(
        "BMI:            {:.1} ({})\n",
        report.bmi, report.bmi_category
    ));
    out.push_str(&format!(
        "Healthy weight: {:.1} - {:.1} kg\n\n",
        report.healthy_weight_range_kg.0, report.healthy_weight_range_kg.1
    ));

    out.push_str("Energy & Nutrition\n");
    out.push_str("------------------\n");
    out.push_str(&format!("BMR:            {:.2} kcal/day\n", report.bmr));
    out.push_str(&format!("TDEE:           {} kcal/day\n", report.tdee));
    out.push_str(&format!(
        "Target intake:  {} kcal/day ({:+} kcal vs TDEE)\n",
        report.plan.target_calories, report.calorie_adjustment
    ));
    out.push_str(&format!(
        "Macros:         {} g protein / {} g fat / {} g carbs\n",
        report.plan.protein_g, report.plan.fat_g, report.plan.carbs_g
    ));

    out.push_str(&format!(
        "\nGenerated at {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    out
}
