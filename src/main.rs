use clap::{Args, Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use fitrs::config::AppConfig;
use fitrs::error::{CalculationError, ErrorSeverity, FitError};
use fitrs::export::{self, ExportFormat};
use fitrs::logging::{init_logging, LogConfig, LogLevel};
use fitrs::models::{ActivityLevel, Goal, PersonProfile, Sex};
use fitrs::report::FitnessReport;
use fitrs::sleep::SleepCalculator;
use fitrs::strength::StrengthCalculator;

/// FitRS - Fitness & Nutrition Calculator CLI
///
/// A Rust-based tool for deriving health and fitness metrics from body
/// measurements: body-fat percentage, BMI, BMR, TDEE, macro-nutrient
/// targets, 1RM estimates, and sleep-cycle bedtimes.
#[derive(Parser)]
#[command(name = "fitrs")]
#[command(author = "FitRS Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Fitness & Nutrition Calculator CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Body measurements taken from the command line
#[derive(Args)]
struct MeasurementArgs {
    /// Biological sex (male/female)
    #[arg(long)]
    sex: Option<Sex>,

    /// Age in years
    #[arg(long)]
    age: Option<u8>,

    /// Height in cm
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kg
    #[arg(long)]
    weight: Option<f64>,

    /// Neck circumference in cm
    #[arg(long)]
    neck: Option<f64>,

    /// Waist circumference in cm, measured at the navel
    #[arg(long)]
    waist: Option<f64>,

    /// Hip circumference in cm (required for female profiles)
    #[arg(long)]
    hip: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the full metric report for a profile
    Analyze {
        /// Saved profile name (defaults to the active profile when no
        /// measurements are given)
        #[arg(short, long)]
        profile: Option<String>,

        #[command(flatten)]
        measurements: MeasurementArgs,

        /// Activity level (sedentary, light, moderate, active, extreme)
        #[arg(short, long)]
        activity: Option<String>,

        /// Goal (cut, maintain, bulk)
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Estimate one-rep max from a submaximal set
    Strength {
        /// Weight lifted in kg
        #[arg(short, long)]
        weight: Decimal,

        /// Repetitions completed
        #[arg(short, long)]
        reps: u32,
    },

    /// Back-calculate bedtimes for a target wake time
    Sleep {
        /// Wake time in HH:MM
        #[arg(short, long)]
        wake: String,
    },

    /// Export the metric report to a file
    Export {
        /// Output file path (defaults into the configured report directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (json, csv, text)
        #[arg(short = 'f', long, default_value = "json")]
        format: String,

        /// Saved profile name
        #[arg(short, long)]
        profile: Option<String>,

        #[command(flatten)]
        measurements: MeasurementArgs,

        /// Activity level (sedentary, light, moderate, active, extreme)
        #[arg(short, long)]
        activity: Option<String>,

        /// Goal (cut, maintain, bulk)
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Manage saved profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Save a profile under a name
    Add {
        /// Profile name
        name: String,

        #[command(flatten)]
        measurements: MeasurementArgs,
    },

    /// List saved profiles
    List,

    /// Remove a saved profile
    Remove {
        /// Profile name
        name: String,
    },

    /// Set the active profile
    Default {
        /// Profile name
        name: String,
    },
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct SleepRow {
    #[tabled(rename = "Cycles")]
    cycles: u8,
    #[tabled(rename = "Sleep")]
    duration: String,
    #[tabled(rename = "Bedtime")]
    bedtime: String,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Sex")]
    sex: String,
    #[tabled(rename = "Age")]
    age: u8,
    #[tabled(rename = "Height")]
    height: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Active")]
    active: String,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: LogLevel::from_verbosity(cli.verbose),
        ..LogConfig::default()
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{}", format!("Failed to initialize logging: {}", e).red());
    }

    if let Err(e) = run(cli) {
        // Calculation problems are user-fixable; everything else is on us
        match e.severity() {
            ErrorSeverity::Warning => eprintln!("{}", e.user_message().yellow()),
            _ => eprintln!("{}", e.user_message().red()),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> fitrs::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);
    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)
            .map_err(|e| FitError::Configuration(e.to_string()))?,
        None => AppConfig::load_or_default(),
    };

    match cli.command {
        Commands::Analyze {
            profile,
            measurements,
            activity,
            goal,
        } => {
            let (name, profile) = resolve_profile(&config, profile, &measurements)?;
            let activity = resolve_activity(&config, activity)?;
            let goal = resolve_goal(&config, goal)?;

            let mut report = FitnessReport::generate(&profile, activity, goal)?;
            if let Some(name) = name {
                report = report.with_profile_name(name);
            }

            println!("{}", "Your Body Metrics".green().bold());
            print_report(&report, config.settings.default_units);
        }

        Commands::Strength { weight, reps } => {
            let one_rm = StrengthCalculator::one_rep_max(weight, reps)?;
            let set = StrengthCalculator::working_set(one_rm);

            println!("{}", "Strength Estimate".blue().bold());
            println!("  Estimated 1RM: {} kg", one_rm.to_string().bold());
            println!(
                "  Working sets:  {} kg x {}-{} reps (80% intensity)",
                set.weight, set.rep_low, set.rep_high
            );
        }

        Commands::Sleep { wake } => {
            let wake_time = chrono::NaiveTime::parse_from_str(&wake, "%H:%M").map_err(|_| {
                CalculationError::domain(
                    "sleep schedule",
                    format!("invalid wake time '{}', expected HH:MM", wake),
                )
            })?;
            let now = chrono::Local::now().naive_local();
            let schedule = SleepCalculator::bedtimes(wake_time, now);

            println!("{}", "Recommended Bedtimes".cyan().bold());
            println!(
                "  To wake at {} feeling rested, go to bed at:",
                schedule.wake_at.format("%H:%M on %b %-d")
            );

            let rows: Vec<SleepRow> = schedule
                .options
                .iter()
                .map(|o| SleepRow {
                    cycles: o.cycles,
                    duration: format!("{:.1} h", o.duration_hours),
                    bedtime: o.bedtime.format("%H:%M").to_string(),
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
        }

        Commands::Export {
            output,
            format,
            profile,
            measurements,
            activity,
            goal,
        } => {
            let format = ExportFormat::from_str(&format)?;
            let (name, profile) = resolve_profile(&config, profile, &measurements)?;
            let activity = resolve_activity(&config, activity)?;
            let goal = resolve_goal(&config, goal)?;

            let mut report = FitnessReport::generate(&profile, activity, goal)?;
            if let Some(name) = name {
                report = report.with_profile_name(name);
            }

            let output_path = match output {
                Some(path) => path,
                None => {
                    std::fs::create_dir_all(&config.settings.report_dir)?;
                    config.settings.report_dir.join(format!(
                        "report_{}.{}",
                        chrono::Local::now().format("%Y%m%d_%H%M%S"),
                        format.extension()
                    ))
                }
            };

            export::export_report(&report, format, &output_path)?;
            println!(
                "{}",
                format!("✓ Report written to {}", output_path.display()).green()
            );
        }

        Commands::Profile { action } => {
            let mut config = config;
            handle_profile(&mut config, action, &config_path)?;
        }
    }

    Ok(())
}

fn handle_profile(
    config: &mut AppConfig,
    action: ProfileAction,
    config_path: &std::path::Path,
) -> fitrs::Result<()> {
    match action {
        ProfileAction::Add { name, measurements } => {
            let profile = build_profile(&measurements)?;
            config.add_profile(name.clone(), profile);
            config
                .save_to_file(config_path)
                .map_err(|e| FitError::Configuration(e.to_string()))?;
            println!("{}", format!("✓ Saved profile '{}'", name).green());
        }

        ProfileAction::List => {
            if config.profiles.is_empty() {
                println!("No saved profiles. Add one with 'fitrs profile add'.");
                return Ok(());
            }

            let mut rows: Vec<ProfileRow> = config
                .profiles
                .iter()
                .map(|(name, p)| ProfileRow {
                    name: name.clone(),
                    sex: p.sex.to_string(),
                    age: p.age_years,
                    height: config.settings.default_units.format_length(p.height_cm),
                    weight: config.settings.default_units.format_weight(p.weight_kg),
                    active: if config.default_profile.as_deref() == Some(name) {
                        "*".to_string()
                    } else {
                        String::new()
                    },
                })
                .collect();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            println!("{}", Table::new(rows).with(Style::rounded()));
        }

        ProfileAction::Remove { name } => {
            config
                .remove_profile(&name)
                .map_err(|e| FitError::Configuration(e.to_string()))?;
            config
                .save_to_file(config_path)
                .map_err(|e| FitError::Configuration(e.to_string()))?;
            println!("{}", format!("✓ Removed profile '{}'", name).green());
        }

        ProfileAction::Default { name } => {
            config
                .set_default_profile(&name)
                .map_err(|e| FitError::Configuration(e.to_string()))?;
            config
                .save_to_file(config_path)
                .map_err(|e| FitError::Configuration(e.to_string()))?;
            println!("{}", format!("✓ Active profile is now '{}'", name).green());
        }
    }

    Ok(())
}

impl MeasurementArgs {
    fn any_given(&self) -> bool {
        self.sex.is_some()
            || self.age.is_some()
            || self.height.is_some()
            || self.weight.is_some()
            || self.neck.is_some()
            || self.waist.is_some()
            || self.hip.is_some()
    }
}

/// Build a profile from measurement flags; all of sex/age/height/weight/
/// neck/waist must be present
fn build_profile(m: &MeasurementArgs) -> fitrs::Result<PersonProfile> {
    match (m.sex, m.age, m.height, m.weight, m.neck, m.waist) {
        (Some(sex), Some(age), Some(height), Some(weight), Some(neck), Some(waist)) => {
            Ok(PersonProfile::new(sex, age, height, weight, neck, waist, m.hip)?)
        }
        _ => Err(FitError::Configuration(
            "incomplete measurements: provide --sex, --age, --height, --weight, --neck, and --waist"
                .to_string(),
        )),
    }
}

/// Pick the profile to analyze: an explicit name, inline measurements, or
/// the active saved profile, in that order
fn resolve_profile(
    config: &AppConfig,
    name: Option<String>,
    measurements: &MeasurementArgs,
) -> fitrs::Result<(Option<String>, PersonProfile)> {
    if let Some(name) = name {
        let profile = config.get_profile(&name).cloned().ok_or_else(|| {
            FitError::Configuration(format!("profile not found: {}", name))
        })?;
        return Ok((Some(name), profile));
    }

    if measurements.any_given() {
        return Ok((None, build_profile(measurements)?));
    }

    match config.get_default_profile() {
        Some((name, profile)) => Ok((Some(name.to_string()), profile.clone())),
        None => Err(FitError::Configuration(
            "no measurements given and no saved profile; pass --sex/--age/... or run 'fitrs profile add'"
                .to_string(),
        )),
    }
}

fn resolve_activity(config: &AppConfig, flag: Option<String>) -> fitrs::Result<ActivityLevel> {
    match flag {
        Some(s) => Ok(s.parse::<ActivityLevel>()?),
        None => config.settings.default_activity.ok_or_else(|| {
            FitError::Configuration(
                "no activity level given; pass --activity or set a default in the config"
                    .to_string(),
            )
        }),
    }
}

fn resolve_goal(config: &AppConfig, flag: Option<String>) -> fitrs::Result<Goal> {
    match flag {
        Some(s) => Ok(s.parse::<Goal>()?),
        None => config.settings.default_goal.ok_or_else(|| {
            FitError::Configuration(
                "no goal given; pass --goal or set a default in the config".to_string(),
            )
        }),
    }
}

fn print_report(report: &FitnessReport, units: fitrs::models::Units) {
    let rows = vec![
        MetricRow {
            metric: "Body fat".to_string(),
            value: format!(
                "{:.2}% ({})",
                report.body_fat_percent, report.body_fat_category
            ),
        },
        MetricRow {
            metric: "BMI".to_string(),
            value: format!("{:.1} ({})", report.bmi, report.bmi_category),
        },
        MetricRow {
            metric: "Healthy weight".to_string(),
            value: format!(
                "{} - {}",
                units.format_weight(report.healthy_weight_range_kg.0),
                units.format_weight(report.healthy_weight_range_kg.1)
            ),
        },
        MetricRow {
            metric: "BMR".to_string(),
            value: format!("{:.0} kcal/day", report.bmr),
        },
        MetricRow {
            metric: "TDEE".to_string(),
            value: format!("{} kcal/day", report.tdee),
        },
        MetricRow {
            metric: format!("Target ({})", report.goal),
            value: format!(
                "{} kcal/day ({:+} kcal)",
                report.plan.target_calories, report.calorie_adjustment
            ),
        },
    ];
    println!("{}", Table::new(rows).with(Style::rounded()));

    println!("{}", "Daily Macros".green().bold());
    let macro_rows = vec![
        MetricRow {
            metric: "Protein".to_string(),
            value: format!("{} g ({} kcal)", report.plan.protein_g, report.plan.protein_g * 4),
        },
        MetricRow {
            metric: "Fat".to_string(),
            value: format!("{} g ({} kcal)", report.plan.fat_g, report.plan.fat_g * 9),
        },
        MetricRow {
            metric: "Carbs".to_string(),
            value: format!("{} g ({} kcal)", report.plan.carbs_g, report.plan.carbs_g * 4),
        },
    ];
    println!("{}", Table::new(macro_rows).with(Style::rounded()));
}
