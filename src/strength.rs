//! Strength estimation
//!
//! One-repetition-maximum estimation from a submaximal set using the Epley
//! formula, plus the derived working-set suggestion (80% of 1RM for 8-10
//! repetitions).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CalculationError;

/// Suggested training set derived from an estimated 1RM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingSet {
    /// Suggested bar weight in kilograms
    pub weight: Decimal,

    /// Fraction of 1RM the suggestion is based on
    pub intensity: Decimal,

    /// Repetition range (inclusive)
    pub rep_low: u8,
    pub rep_high: u8,
}

/// Strength calculation utilities
pub struct StrengthCalculator;

impl StrengthCalculator {
    /// Estimate one-repetition maximum with the Epley formula
    ///
    /// `weight * (1 + reps/30)`, rounded to 1 decimal place. A single-rep
    /// set is already a max attempt and passes through unchanged.
    pub fn one_rep_max(lift_weight: Decimal, reps: u32) -> Result<Decimal, CalculationError> {
        if lift_weight <= Decimal::ZERO {
            return Err(CalculationError::domain(
                "one-rep max",
                "lift weight must be positive",
            ));
        }
        if reps == 0 {
            return Err(CalculationError::domain(
                "one-rep max",
                "repetition count must be positive",
            ));
        }

        if reps == 1 {
            return Ok(lift_weight);
        }

        let estimate = lift_weight * (Decimal::ONE + Decimal::from(reps) / dec!(30));
        Ok(estimate.round_dp(1))
    }

    /// Working-set suggestion at 80% of the estimated 1RM for 8-10 reps
    pub fn working_set(one_rm: Decimal) -> WorkingSet {
        let intensity = dec!(0.8);
        WorkingSet {
            weight: (one_rm * intensity).round_dp(1),
            intensity,
            rep_low: 8,
            rep_high: 10,
        }
    }
}
