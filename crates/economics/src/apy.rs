//! APY calculations for the dual staking scheme
//!
//! The yearly budget is a fixed fraction of native FDV. The native leg
//! spreads its share over the staked fraction of the supply. The bridged leg
//! converts its share into bridged-asset units at the current price and
//! spreads it over the units staked.

use tracing::debug;

use crate::errors::YieldError;
use crate::params::SplitPolicy;
use crate::split::{beta_for_ratio, gamma_for_beta, split_for_gamma};
use crate::types::{StakeSnapshot, YieldRates, YieldReport};

/// APY for native stakers, in percent.
///
/// `native_share` is the native slice of the yield budget, normally taken
/// from a reward split. Fails with [`YieldError::UndefinedRatio`] when the
/// staking ratio is zero: with nothing staked there is no per-staker rate.
pub fn native_apy(snapshot: &StakeSnapshot, native_share: f64) -> Result<f64, YieldError> {
    if snapshot.native_staking_ratio == 0.0 {
        return Err(YieldError::UndefinedRatio {
            divisor: "native_staking_ratio",
        });
    }

    Ok((snapshot.fixed_yield_budget * native_share / snapshot.native_staking_ratio) * 100.0)
}

/// APY for bridged-asset stakers, in percent.
///
/// The bridged slice of the budget is quoted against native FDV, converted
/// into bridged-asset units at the current price, and divided by the units
/// staked.
pub fn bridged_asset_apy(snapshot: &StakeSnapshot, bridged_share: f64) -> Result<f64, YieldError> {
    if snapshot.bridged_asset_staked == 0.0 {
        return Err(YieldError::UndefinedRatio {
            divisor: "bridged_asset_staked",
        });
    }
    if snapshot.bridged_asset_price == 0.0 {
        return Err(YieldError::UndefinedRatio {
            divisor: "bridged_asset_price",
        });
    }

    let native_fdv = snapshot.native_total_supply * snapshot.native_price;
    let distributed =
        snapshot.fixed_yield_budget * bridged_share * native_fdv / snapshot.bridged_asset_price;
    let staked_units = snapshot.bridged_asset_staked / snapshot.bridged_asset_price;

    Ok((distributed / staked_units) * 100.0)
}

/// Evaluate the split policy and both APY legs for one snapshot.
///
/// Validates the snapshot and the policy up front, then records every
/// intermediate in the returned [`YieldReport`]. The calculation reads
/// nothing but its arguments, so identical inputs always produce
/// bit-identical output.
pub fn yield_report(
    snapshot: &StakeSnapshot,
    policy: &SplitPolicy,
) -> Result<YieldReport, YieldError> {
    snapshot.validate()?;
    policy.validate()?;

    let beta = beta_for_ratio(snapshot.native_staking_ratio, policy);
    let gamma = gamma_for_beta(beta, policy);
    let split = split_for_gamma(gamma)?;

    let native_apy_pct = native_apy(snapshot, split.native_share)?;
    let bridged_apy_pct = bridged_asset_apy(snapshot, split.bridged_share)?;

    let native_fdv = snapshot.native_total_supply * snapshot.native_price;
    let bridged_asset_distributed = snapshot.fixed_yield_budget * split.bridged_share * native_fdv
        / snapshot.bridged_asset_price;

    debug!(
        "Yield report: ratio={}, beta={}, gamma={}, native_apy={}%, bridged_apy={}%",
        snapshot.native_staking_ratio, beta, gamma, native_apy_pct, bridged_apy_pct
    );

    Ok(YieldReport {
        beta,
        gamma,
        split,
        native_fdv,
        bridged_asset_distributed,
        rates: YieldRates {
            native_apy: native_apy_pct,
            bridged_asset_apy: bridged_apy_pct,
        },
    })
}

/// Headline rates only. Thin wrapper over [`yield_report`].
pub fn compute_yields(
    snapshot: &StakeSnapshot,
    policy: &SplitPolicy,
) -> Result<YieldRates, YieldError> {
    yield_report(snapshot, policy).map(|report| report.rates)
}
