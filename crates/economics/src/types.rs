//! Core types for the Tidelock yield engine
//!
//! Defines the staking snapshot fed into every calculation and the
//! reward-split and APY records the engine produces.

use serde::{Deserialize, Serialize};

use crate::errors::YieldError;

/// Point-in-time view of the dual staking system.
///
/// All monetary fields share one quote currency. The yield budget and the
/// staking ratio are unit-less fractions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StakeSnapshot {
    /// Fraction of native FDV paid out as yield per year, in `[0, 1]`
    pub fixed_yield_budget: f64,
    /// Total supply of the native token, in token units
    pub native_total_supply: f64,
    /// Total bridged-asset stake, in quote-currency units
    pub bridged_asset_staked: f64,
    /// Fraction of the native supply currently staked, in `[0, 1]`
    pub native_staking_ratio: f64,
    /// Price of one native token in the quote currency
    pub native_price: f64,
    /// Price of one bridged-asset unit in the quote currency
    pub bridged_asset_price: f64,
}

impl StakeSnapshot {
    /// Check every field against its accepted domain.
    ///
    /// The yield budget and the staking ratio must be fractions in `[0, 1]`;
    /// supply, stake, and prices must be finite and strictly positive. A
    /// staking ratio of exactly zero passes validation and is reported as
    /// [`YieldError::UndefinedRatio`] by the calculation that divides by it.
    pub fn validate(&self) -> Result<(), YieldError> {
        fraction("fixed_yield_budget", self.fixed_yield_budget)?;
        strictly_positive("native_total_supply", self.native_total_supply)?;
        strictly_positive("bridged_asset_staked", self.bridged_asset_staked)?;
        fraction("native_staking_ratio", self.native_staking_ratio)?;
        strictly_positive("native_price", self.native_price)?;
        strictly_positive("bridged_asset_price", self.bridged_asset_price)?;
        Ok(())
    }
}

/// How one unit of yield budget is divided between the two staker classes.
///
/// Shares are fractions of the budget and sum to 1 for any finite gamma.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardSplit {
    /// Share of the budget flowing to native stakers
    pub native_share: f64,
    /// Share of the budget flowing to bridged-asset stakers
    pub bridged_share: f64,
}

/// Headline annual percentage yields for both staker classes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldRates {
    /// APY for native stakers, in percent
    pub native_apy: f64,
    /// APY for bridged-asset stakers, in percent
    pub bridged_asset_apy: f64,
}

/// Full trace of one yield calculation.
///
/// Carries every intermediate alongside the headline rates so callers can
/// log, chart, or audit a run without re-deriving anything.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldReport {
    /// Staking ratio relative to the policy target
    pub beta: f64,
    /// Split weight the policy step function selected for `beta`
    pub gamma: f64,
    /// Budget split derived from `gamma`
    pub split: RewardSplit,
    /// Fully-diluted value of the native token, in the quote currency
    pub native_fdv: f64,
    /// Yearly yield flowing to bridged-asset stakers, in bridged-asset units
    pub bridged_asset_distributed: f64,
    /// Headline APYs
    pub rates: YieldRates,
}

fn fraction(field: &'static str, value: f64) -> Result<(), YieldError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(YieldError::InvalidInput { field, value })
    }
}

fn strictly_positive(field: &'static str, value: f64) -> Result<(), YieldError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(YieldError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StakeSnapshot {
        StakeSnapshot {
            fixed_yield_budget: 0.08,
            native_total_supply: 1e10,
            bridged_asset_staked: 2e9,
            native_staking_ratio: 0.2,
            native_price: 0.1,
            bridged_asset_price: 75_000.0,
        }
    }

    #[test]
    fn accepts_a_well_formed_snapshot() {
        assert!(snapshot().validate().is_ok());
    }

    #[test]
    fn accepts_fraction_boundaries() {
        let mut s = snapshot();
        s.fixed_yield_budget = 0.0;
        s.native_staking_ratio = 0.0;
        assert!(s.validate().is_ok());

        s.fixed_yield_budget = 1.0;
        s.native_staking_ratio = 1.0;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn rejects_budget_above_one() {
        let mut s = snapshot();
        s.fixed_yield_budget = 1.5;
        assert_eq!(
            s.validate(),
            Err(YieldError::InvalidInput {
                field: "fixed_yield_budget",
                value: 1.5
            })
        );
    }

    #[test]
    fn rejects_negative_ratio() {
        let mut s = snapshot();
        s.native_staking_ratio = -0.1;
        assert_eq!(
            s.validate(),
            Err(YieldError::InvalidInput {
                field: "native_staking_ratio",
                value: -0.1
            })
        );
    }

    #[test]
    fn rejects_zero_supply_stake_and_prices() {
        for field in [
            "native_total_supply",
            "bridged_asset_staked",
            "native_price",
            "bridged_asset_price",
        ] {
            let mut s = snapshot();
            match field {
                "native_total_supply" => s.native_total_supply = 0.0,
                "bridged_asset_staked" => s.bridged_asset_staked = 0.0,
                "native_price" => s.native_price = 0.0,
                _ => s.bridged_asset_price = 0.0,
            }
            assert_eq!(
                s.validate(),
                Err(YieldError::InvalidInput { field, value: 0.0 })
            );
        }
    }

    #[test]
    fn rejects_non_finite_fields() {
        let mut s = snapshot();
        s.native_price = f64::NAN;
        assert!(s.validate().is_err());

        let mut s = snapshot();
        s.bridged_asset_staked = f64::INFINITY;
        assert!(s.validate().is_err());

        let mut s = snapshot();
        s.native_staking_ratio = f64::NAN;
        assert!(s.validate().is_err());
    }
}
