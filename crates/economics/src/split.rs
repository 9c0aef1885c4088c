//! Reward-split policy evaluation
//!
//! Turns a native staking ratio into the gamma weight and the final
//! native/bridged budget split. gamma is the ratio of the native share to
//! the bridged share, so the shares fall out of it directly:
//! `bridged = 1 / (gamma + 1)` and `native = 1 - bridged`.

use crate::errors::YieldError;
use crate::params::SplitPolicy;
use crate::types::RewardSplit;

/// Staking ratio normalized against the policy target.
///
/// The caller is expected to hand in a validated policy; a zero target
/// would make the result non-finite.
pub fn beta_for_ratio(native_staking_ratio: f64, policy: &SplitPolicy) -> f64 {
    native_staking_ratio / policy.target_staking_ratio
}

/// Select the gamma tier for a beta value.
///
/// The band is inclusive at both edges: beta equal to either bound selects
/// the band tier. The branches are ordered so that every beta lands in
/// exactly one tier.
pub fn gamma_for_beta(beta: f64, policy: &SplitPolicy) -> f64 {
    if beta < policy.lower_beta_bound {
        policy.under_target_gamma
    } else if beta <= policy.upper_beta_bound {
        policy.band_gamma
    } else {
        policy.over_target_gamma
    }
}

/// Derive the budget split from a gamma weight.
///
/// Fails with [`YieldError::InvalidPolicyState`] when `gamma + 1` is zero
/// or non-finite, since the bridged share would be undefined.
pub fn split_for_gamma(gamma: f64) -> Result<RewardSplit, YieldError> {
    let denominator = gamma + 1.0;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(YieldError::InvalidPolicyState { gamma });
    }

    let bridged_share = 1.0 / denominator;
    let native_share = 1.0 - bridged_share;

    Ok(RewardSplit {
        native_share,
        bridged_share,
    })
}

/// Evaluate the full policy pipeline for a staking ratio.
pub fn split_for_ratio(
    native_staking_ratio: f64,
    policy: &SplitPolicy,
) -> Result<RewardSplit, YieldError> {
    let beta = beta_for_ratio(native_staking_ratio, policy);
    split_for_gamma(gamma_for_beta(beta, policy))
}
