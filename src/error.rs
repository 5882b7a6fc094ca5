//! Unified error hierarchy for FitRS
//!
//! Provides a structured error type system with typed calculation failures,
//! context preservation, and integration with the tracing system.

use thiserror::Error;

/// Top-level error type for all FitRS operations
#[derive(Debug, Error)]
pub enum FitError {
    /// Metric calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(#[from] crate::export::ExportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Calculation errors
///
/// Every formula in the engine validates its mathematical preconditions up
/// front and returns one of these variants instead of propagating a numeric
/// fault. Failures are never coerced to a default value.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// An input violates the mathematical precondition of a formula
    #[error("Domain error in {calculation}: {reason}")]
    Domain { calculation: String, reason: String },

    /// A categorical key outside its closed enum was supplied at a string boundary
    #[error("Invalid {field}: '{value}'")]
    InvalidEnum { field: String, value: String },

    /// A numeric input falls outside its accepted measurement range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A measurement required for this profile is absent
    #[error("Missing measurement: {field}")]
    MissingMeasurement { field: String },
}

impl CalculationError {
    /// Shorthand for a domain-precondition failure
    pub fn domain(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalculationError::Domain {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for FitRS operations
pub type Result<T> = std::result::Result<T, FitError>;

impl FitError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitError::Calculation(_) => ErrorSeverity::Warning,
            FitError::Configuration(_) => ErrorSeverity::Error,
            FitError::Export(_) => ErrorSeverity::Error,
            FitError::Io(_) => ErrorSeverity::Error,
            FitError::Internal(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitError::Calculation(CalculationError::Domain { calculation, reason }) => {
                format!(
                    "Could not calculate {}: {}. Please check your measurements.",
                    calculation, reason
                )
            }
            FitError::Calculation(CalculationError::InvalidEnum { field, value }) => {
                format!("'{}' is not a recognized {}.", value, field)
            }
            FitError::Configuration(reason) => {
                format!(
                    "Configuration problem: {}. Run 'fitrs profile list' to inspect saved profiles.",
                    reason
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
    /// Informational message
    Info,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Info => tracing::Level::INFO,
        }
    }
}
