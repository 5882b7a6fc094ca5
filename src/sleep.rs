//! Sleep-cycle bedtime back-calculation
//!
//! # Sleep Science Background
//!
//! Sleep progresses through roughly 90-minute physiological cycles (light
//! sleep, deep slow-wave sleep, REM). Waking at a cycle boundary feels far
//! better than waking mid-cycle, so instead of targeting a raw number of
//! hours, the calculation works backwards from the desired wake time in
//! whole cycles:
//!
//! - 4 cycles = 6.0 h, 5 cycles = 7.5 h, 6 cycles = 9.0 h of sleep
//! - plus a fixed 15-minute sleep-onset buffer (average time to fall asleep)
//!
//! The wake time is a clock time; it resolves to tonight's wake instant, or
//! rolls to the next calendar day when that instant is not strictly in the
//! future. "Now" is an explicit parameter so the calculation stays pure and
//! testable; only the CLI boundary reads the real clock.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Length of one sleep cycle in minutes
pub const CYCLE_MINUTES: i64 = 90;

/// Average time to fall asleep, added on top of the cycles
pub const ONSET_BUFFER_MINUTES: i64 = 15;

/// Cycle counts offered to the user, shortest night first
const CYCLE_COUNTS: [u8; 3] = [4, 5, 6];

/// One candidate bedtime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepOption {
    /// Number of full sleep cycles
    pub cycles: u8,

    /// Actual sleep duration in hours (excludes the onset buffer)
    pub duration_hours: f64,

    /// When to be in bed
    pub bedtime: NaiveDateTime,
}

/// Bedtime options for a resolved wake instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSchedule {
    /// The wake instant the options count back from
    pub wake_at: NaiveDateTime,

    /// Candidate bedtimes, shortest night first
    pub options: Vec<SleepOption>,
}

/// Sleep schedule calculation utilities
pub struct SleepCalculator;

impl SleepCalculator {
    /// Minutes of time in bed needed for the given cycle count
    pub fn required_minutes(cycles: u8) -> i64 {
        cycles as i64 * CYCLE_MINUTES + ONSET_BUFFER_MINUTES
    }

    /// Back-calculate bedtimes for a target wake clock time
    ///
    /// `now` is the instant the calculation is made; the wake time resolves
    /// against it and rolls to the next day unless strictly in the future.
    pub fn bedtimes(wake: NaiveTime, now: NaiveDateTime) -> SleepSchedule {
        let mut wake_at = now.date().and_time(wake);
        if wake_at <= now {
            wake_at += Duration::days(1);
        }

        let options = CYCLE_COUNTS
            .iter()
            .map(|&cycles| SleepOption {
                cycles,
                duration_hours: cycles as f64 * 1.5,
                bedtime: wake_at - Duration::minutes(Self::required_minutes(cycles)),
            })
            .collect();

        tracing::debug!(%wake_at, "calculated sleep schedule");
        SleepSchedule { wake_at, options }
    }
}
