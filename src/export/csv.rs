use super::ExportError;
use crate::report::FitnessReport;
use std::path::Path;

/// Export a fitness report as a two-column metric/value CSV
pub fn export_report<P: AsRef<Path>>(
    report: &FitnessReport,
    output_path: P,
) -> Result<(), ExportError> {
    let mut rows: Vec<(&str, String)> = Vec::new();

    rows.push(("generated_at", report.generated_at.to_rfc3339()));
    if let Some(name) = &report.profile_name {
        rows.push(("profile", name.clone()));
    }
    rows.push(("sex", report.profile.sex.to_string()));
    rows.push(("age_years", report.profile.age_years.to_string()));
    rows.push(("height_cm", report.profile.height_cm.to_string()));
    rows.push(("weight_kg", report.profile.weight_kg.to_string()));
    rows.push(("activity", report.activity.to_string()));
    rows.push(("goal", report.goal.to_string()));
    rows.push(("body_fat_percent", report.body_fat_percent.to_string()));
    rows.push(("body_fat_category", report.body_fat_category.to_string()));
    rows.push(("bmi", report.bmi.to_string()));
    rows.push(("bmi_category", report.bmi_category.to_string()));
    rows.push((
        "healthy_weight_min_kg",
        format!("{:.1}", report.healthy_weight_range_kg.0),
    ));
    rows.push((
        "healthy_weight_max_kg",
        format!("{:.1}", report.healthy_weight_range_kg.1),
    ));
    rows.push(("bmr_kcal", report.bmr.to_string()));
    rows.push(("tdee_kcal", report.tdee.to_string()));
    rows.push(("target_calories", report.plan.target_calories.to_string()));
    rows.push(("protein_g", report.plan.protein_g.to_string()));
    rows.push(("fat_g", report.plan.fat_g.to_string()));
    rows.push(("carbs_g", report.plan.carbs_g.to_string()));

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(["metric", "value"])?;
    for (metric, value) in rows {
        writer.write_record([metric, value.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}
