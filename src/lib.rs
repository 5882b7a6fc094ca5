// Library interface for FitRS modules
// This allows integration tests to access the core functionality

pub mod body_composition;
pub mod config;
pub mod energy;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod report;
pub mod sleep;
pub mod strength;

// Re-export commonly used types for convenience
pub use body_composition::{BmiCategory, BodyFatCategory, CompositionAnalyzer};
pub use energy::EnergyCalculator;
pub use error::{FitError, Result};
pub use export::ExportFormat;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::*;
pub use nutrition::NutritionPlanner;
pub use report::FitnessReport;
pub use sleep::{SleepCalculator, SleepSchedule};
pub use strength::{StrengthCalculator, WorkingSet};
