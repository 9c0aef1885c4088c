//! Split policy configuration
//!
//! The three-tier step policy mapping the native staking ratio onto the
//! gamma weight that divides the yield budget between staker classes.

use serde::{Deserialize, Serialize};

use crate::errors::YieldError;

/// Staking ratio the protocol steers toward.
pub const DEFAULT_TARGET_STAKING_RATIO: f64 = 0.4;
/// Beta below this bound selects the under-target tier.
pub const DEFAULT_LOWER_BETA_BOUND: f64 = 1.0;
/// Beta above this bound selects the over-target tier.
pub const DEFAULT_UPPER_BETA_BOUND: f64 = 2.4;
/// Gamma while staking sits under the target band.
pub const DEFAULT_UNDER_TARGET_GAMMA: f64 = 1.0 / 3.0;
/// Gamma while beta sits inside the band, both ends inclusive.
pub const DEFAULT_BAND_GAMMA: f64 = 2.0 / 3.0;
/// Gamma once beta has left the band upward.
pub const DEFAULT_OVER_TARGET_GAMMA: f64 = 1.0;

/// Configurable parameters of the reward-split step policy.
///
/// These fields are meant to live in protocol configuration and change only
/// through governance. Every calculation takes the policy as an argument
/// instead of reading process-wide state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitPolicy {
    /// Staking ratio the protocol steers toward (beta = ratio / target)
    pub target_staking_ratio: f64,
    /// Lower edge of the beta band, inclusive
    pub lower_beta_bound: f64,
    /// Upper edge of the beta band, inclusive
    pub upper_beta_bound: f64,
    /// Gamma selected while beta sits below the band
    pub under_target_gamma: f64,
    /// Gamma selected while beta sits inside the band
    pub band_gamma: f64,
    /// Gamma selected once beta has left the band upward
    pub over_target_gamma: f64,
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self {
            target_staking_ratio: DEFAULT_TARGET_STAKING_RATIO,
            lower_beta_bound: DEFAULT_LOWER_BETA_BOUND,
            upper_beta_bound: DEFAULT_UPPER_BETA_BOUND,
            under_target_gamma: DEFAULT_UNDER_TARGET_GAMMA,
            band_gamma: DEFAULT_BAND_GAMMA,
            over_target_gamma: DEFAULT_OVER_TARGET_GAMMA,
        }
    }
}

impl SplitPolicy {
    /// Check the policy for values that would leave the step function or the
    /// downstream split undefined.
    pub fn validate(&self) -> Result<(), YieldError> {
        if !(self.target_staking_ratio.is_finite() && self.target_staking_ratio > 0.0) {
            return Err(YieldError::InvalidPolicy {
                field: "target_staking_ratio",
                value: self.target_staking_ratio,
            });
        }
        if !self.lower_beta_bound.is_finite() {
            return Err(YieldError::InvalidPolicy {
                field: "lower_beta_bound",
                value: self.lower_beta_bound,
            });
        }
        if !self.upper_beta_bound.is_finite() || self.upper_beta_bound < self.lower_beta_bound {
            return Err(YieldError::InvalidPolicy {
                field: "upper_beta_bound",
                value: self.upper_beta_bound,
            });
        }
        for (field, gamma) in [
            ("under_target_gamma", self.under_target_gamma),
            ("band_gamma", self.band_gamma),
            ("over_target_gamma", self.over_target_gamma),
        ] {
            if !(gamma.is_finite() && gamma >= 0.0) {
                return Err(YieldError::InvalidPolicy { field, value: gamma });
            }
        }
        Ok(())
    }

    /// Gamma tiers in band order: under target, in band, over target.
    pub fn gamma_table(&self) -> [f64; 3] {
        [
            self.under_target_gamma,
            self.band_gamma,
            self.over_target_gamma,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_uses_design_constants() {
        let policy = SplitPolicy::default();
        assert_eq!(policy.target_staking_ratio, 0.4);
        assert_eq!(policy.lower_beta_bound, 1.0);
        assert_eq!(policy.upper_beta_bound, 2.4);
        assert_eq!(policy.under_target_gamma, 1.0 / 3.0);
        assert_eq!(policy.band_gamma, 2.0 / 3.0);
        assert_eq!(policy.over_target_gamma, 1.0);
    }

    #[test]
    fn default_policy_validates() {
        assert!(SplitPolicy::default().validate().is_ok());
    }

    #[test]
    fn gamma_table_lists_tiers_in_band_order() {
        let policy = SplitPolicy::default();
        assert_eq!(policy.gamma_table(), [1.0 / 3.0, 2.0 / 3.0, 1.0]);
    }

    #[test]
    fn rejects_non_positive_target_ratio() {
        let policy = SplitPolicy {
            target_staking_ratio: 0.0,
            ..SplitPolicy::default()
        };
        assert_eq!(
            policy.validate(),
            Err(YieldError::InvalidPolicy {
                field: "target_staking_ratio",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_inverted_beta_band() {
        let policy = SplitPolicy {
            upper_beta_bound: 0.5,
            ..SplitPolicy::default()
        };
        assert_eq!(
            policy.validate(),
            Err(YieldError::InvalidPolicy {
                field: "upper_beta_bound",
                value: 0.5
            })
        );
    }

    #[test]
    fn rejects_negative_gamma_tier() {
        let policy = SplitPolicy {
            band_gamma: -0.25,
            ..SplitPolicy::default()
        };
        assert_eq!(
            policy.validate(),
            Err(YieldError::InvalidPolicy {
                field: "band_gamma",
                value: -0.25
            })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let policy = SplitPolicy {
            target_staking_ratio: f64::NAN,
            ..SplitPolicy::default()
        };
        assert!(policy.validate().is_err());

        let policy = SplitPolicy {
            over_target_gamma: f64::INFINITY,
            ..SplitPolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
