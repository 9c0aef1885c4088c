//! Batch evaluation over ranges of staking inputs
//!
//! Dashboards and planning tools evaluate the yield surface over a grid of
//! staking ratios and bridged stake levels. One bad cell, typically a ratio
//! of exactly zero, must not abort the rest of the grid, so per-cell
//! failures are collected alongside the successful points.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::apy::yield_report;
use crate::errors::YieldError;
use crate::params::SplitPolicy;
use crate::types::{StakeSnapshot, YieldReport};

/// Evenly spaced values over `[start, end]`, both endpoints included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    /// Number of values produced, at least 2
    pub steps: usize,
}

impl SweepRange {
    /// Check bounds and step count. `field` names the range in errors so
    /// callers sweeping several dimensions can tell them apart.
    pub fn validate(&self, field: &'static str) -> Result<(), YieldError> {
        if !self.start.is_finite() {
            return Err(YieldError::InvalidInput {
                field,
                value: self.start,
            });
        }
        if !self.end.is_finite() || self.end < self.start {
            return Err(YieldError::InvalidInput {
                field,
                value: self.end,
            });
        }
        if self.steps < 2 {
            return Err(YieldError::InvalidInput {
                field,
                value: self.steps as f64,
            });
        }
        Ok(())
    }

    /// Materialize the range. The last value is pinned to `end` so the
    /// upper endpoint is hit exactly regardless of rounding drift.
    pub fn values(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![self.start],
            steps => {
                let span = self.end - self.start;
                let denominator = (steps - 1) as f64;
                (0..steps)
                    .map(|i| {
                        if i == steps - 1 {
                            self.end
                        } else {
                            self.start + span * i as f64 / denominator
                        }
                    })
                    .collect()
            }
        }
    }
}

/// One successfully evaluated grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Staking ratio the cell was evaluated at
    pub native_staking_ratio: f64,
    /// Bridged stake the cell was evaluated at, in quote-currency units
    pub bridged_asset_staked: f64,
    /// Full calculation trace for the cell
    pub report: YieldReport,
}

/// One grid cell that failed, with the inputs that produced the failure.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepFailure {
    pub native_staking_ratio: f64,
    pub bridged_asset_staked: f64,
    pub error: YieldError,
}

/// Result of a sweep: evaluated points plus any per-cell failures.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepOutcome {
    pub points: Vec<SweepPoint>,
    pub failures: Vec<SweepFailure>,
}

impl SweepOutcome {
    /// True when every cell evaluated cleanly.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Evaluate the yield surface across a range of staking ratios.
///
/// `base` supplies every field other than the ratio, which is replaced cell
/// by cell; the template must itself be a valid snapshot. The ratio range
/// has to stay inside `[0, 1]`. Range and template problems surface
/// immediately as `Err`; cells that fail during calculation, such as a
/// range starting at a ratio of exactly zero, are recorded and skipped.
pub fn sweep_staking_ratio(
    base: &StakeSnapshot,
    policy: &SplitPolicy,
    ratios: &SweepRange,
) -> Result<SweepOutcome, YieldError> {
    ratios.validate("ratio_range")?;
    if !(0.0..=1.0).contains(&ratios.start) {
        return Err(YieldError::InvalidInput {
            field: "ratio_range.start",
            value: ratios.start,
        });
    }
    if !(0.0..=1.0).contains(&ratios.end) {
        return Err(YieldError::InvalidInput {
            field: "ratio_range.end",
            value: ratios.end,
        });
    }
    base.validate()?;
    policy.validate()?;

    let mut outcome = SweepOutcome::default();
    for ratio in ratios.values() {
        let mut snapshot = *base;
        snapshot.native_staking_ratio = ratio;
        record_cell(&snapshot, policy, &mut outcome);
    }
    Ok(outcome)
}

/// Evaluate the yield surface across a ratio range and a bridged-stake
/// range.
///
/// Points come out stake-major: every ratio cell for the first stake level,
/// then the next level. Stake values must be strictly positive.
pub fn sweep_grid(
    base: &StakeSnapshot,
    policy: &SplitPolicy,
    ratios: &SweepRange,
    stakes: &SweepRange,
) -> Result<SweepOutcome, YieldError> {
    stakes.validate("stake_range")?;
    if stakes.start <= 0.0 {
        return Err(YieldError::InvalidInput {
            field: "stake_range.start",
            value: stakes.start,
        });
    }

    let mut outcome = SweepOutcome::default();
    for stake in stakes.values() {
        let mut row_base = *base;
        row_base.bridged_asset_staked = stake;
        let row = sweep_staking_ratio(&row_base, policy, ratios)?;
        outcome.points.extend(row.points);
        outcome.failures.extend(row.failures);
    }
    Ok(outcome)
}

fn record_cell(snapshot: &StakeSnapshot, policy: &SplitPolicy, outcome: &mut SweepOutcome) {
    match yield_report(snapshot, policy) {
        Ok(report) => outcome.points.push(SweepPoint {
            native_staking_ratio: snapshot.native_staking_ratio,
            bridged_asset_staked: snapshot.bridged_asset_staked,
            report,
        }),
        Err(error) => {
            warn!(
                "Sweep cell failed at ratio={}, bridged_stake={}: {}",
                snapshot.native_staking_ratio, snapshot.bridged_asset_staked, error
            );
            outcome.failures.push(SweepFailure {
                native_staking_ratio: snapshot.native_staking_ratio,
                bridged_asset_staked: snapshot.bridged_asset_staked,
                error,
            });
        }
    }
}
